//! Airline domain models and parameters.
//!
//! An airline stores its CEO as a snapshot document copied from a person at
//! write time. Later edits to that person are not propagated.

use sea_orm::DbErr;
use serde::{Deserialize, Serialize};

use crate::{
    model::airline::{AirlineDto, CeoDto, CreateAirlineDto, UpdateAirlineDto},
    server::model::{airport::AirportKey, person::Person},
};

/// CEO document as persisted in the airline's `ceo` JSON column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CeoSnapshot {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
}

impl CeoSnapshot {
    pub fn of(person: &Person) -> Self {
        Self {
            username: person.username.clone(),
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
            email: person.email.clone(),
        }
    }

    pub fn into_dto(self) -> CeoDto {
        CeoDto {
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Airline {
    pub id: i32,
    pub airline_code: String,
    pub name: String,
    pub ceo: Option<CeoSnapshot>,
    pub ceo_name: Option<String>,
    pub home_airport_id: Option<i32>,
}

impl Airline {
    /// Converts to a DTO. The home airport key is resolved by the caller since
    /// only the row id is stored.
    pub fn into_dto(self, home_airport: Option<AirportKey>) -> AirlineDto {
        AirlineDto {
            airline_code: self.airline_code,
            name: self.name,
            ceo: self.ceo.map(CeoSnapshot::into_dto),
            ceo_name: self.ceo_name,
            home_airport: home_airport.map(AirportKey::into_dto),
        }
    }

    /// Fails when the stored CEO document cannot be decoded.
    pub fn from_entity(entity: entity::airline::Model) -> Result<Self, DbErr> {
        let ceo = match entity.ceo {
            Some(document) => Some(serde_json::from_value(document).map_err(|e| {
                DbErr::Custom(format!(
                    "Malformed CEO document for airline '{}': {}",
                    entity.airline_code, e
                ))
            })?),
            None => None,
        };

        Ok(Self {
            id: entity.id,
            airline_code: entity.airline_code,
            name: entity.name,
            ceo,
            ceo_name: entity.ceo_name,
            home_airport_id: entity.home_airport_id,
        })
    }
}

/// Airline creation request with references still expressed as business keys.
#[derive(Debug, Clone)]
pub struct CreateAirlineParam {
    pub airline_code: String,
    pub name: String,
    /// Username of the CEO.
    pub ceo: Option<String>,
    pub ceo_name: Option<String>,
    pub home_airport: Option<AirportKey>,
}

impl CreateAirlineParam {
    pub fn from_dto(dto: CreateAirlineDto) -> Self {
        Self {
            airline_code: dto.airline_code,
            name: dto.name,
            ceo: dto.ceo,
            ceo_name: dto.ceo_name,
            home_airport: dto.home_airport.map(AirportKey::from_dto),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAirlineParam {
    pub name: Option<String>,
    pub ceo: Option<Option<String>>,
    pub ceo_name: Option<Option<String>>,
    pub home_airport: Option<Option<AirportKey>>,
}

impl UpdateAirlineParam {
    pub fn from_dto(dto: UpdateAirlineDto) -> Self {
        Self {
            name: dto.name,
            ceo: dto.ceo,
            ceo_name: dto.ceo_name,
            home_airport: dto.home_airport.map(|key| key.map(AirportKey::from_dto)),
        }
    }
}

/// Airline row ready to be inserted, with references resolved.
#[derive(Debug, Clone)]
pub struct NewAirline {
    pub airline_code: String,
    pub name: String,
    pub ceo: Option<CeoSnapshot>,
    pub ceo_name: Option<String>,
    pub home_airport_id: Option<i32>,
}

/// Resolved partial update of an airline row.
#[derive(Debug, Clone, Default)]
pub struct AirlineChanges {
    pub name: Option<String>,
    pub ceo: Option<Option<CeoSnapshot>>,
    pub ceo_name: Option<Option<String>>,
    pub home_airport_id: Option<Option<i32>>,
}
