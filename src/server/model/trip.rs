//! Trip domain models and the cascade parameters used to create or replace a
//! trip's plan and travellers.

use chrono::{DateTime, Utc};

use crate::{
    model::trip::{
        AirlineRefDto, AirportRefDto, CreatePlanItemDto, CreateTripDto, PlanItemDto,
        TravellerRefDto, TripDto, TripSummaryDto, UpdateTripDto,
    },
    server::model::airport::AirportKey,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: i32,
    pub trip_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub budget: Option<i64>,
}

impl Trip {
    pub fn into_summary_dto(self) -> TripSummaryDto {
        TripSummaryDto {
            trip_id: self.trip_id,
            name: self.name,
            description: self.description,
            budget: self.budget,
        }
    }

    pub fn into_dto(self, plan_items: Vec<PlanItemDto>) -> TripDto {
        TripDto {
            trip_id: self.trip_id,
            name: self.name,
            description: self.description,
            budget: self.budget,
            plan_items,
        }
    }

    pub fn from_entity(entity: entity::trip::Model) -> Self {
        Self {
            id: entity.id,
            trip_id: entity.trip_id,
            name: entity.name,
            description: entity.description,
            budget: entity.budget,
        }
    }
}

/// Stored plan item. Airports are referenced by row id.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanItem {
    pub id: i32,
    pub trip_id: i32,
    pub position: i32,
    pub airline_code: String,
    pub origin_airport_id: i32,
    pub destination_airport_id: i32,
    pub departure: Option<DateTime<Utc>>,
}

impl PlanItem {
    pub fn into_dto(
        self,
        origin: Option<AirportKey>,
        destination: Option<AirportKey>,
    ) -> PlanItemDto {
        PlanItemDto {
            position: self.position,
            airline_code: self.airline_code,
            origin: origin.map(AirportKey::into_dto),
            destination: destination.map(AirportKey::into_dto),
            departure: self.departure,
        }
    }

    pub fn from_entity(entity: entity::plan_item::Model) -> Self {
        Self {
            id: entity.id,
            trip_id: entity.trip_id,
            position: entity.position,
            airline_code: entity.airline_code,
            origin_airport_id: entity.origin_airport_id,
            destination_airport_id: entity.destination_airport_id,
            departure: entity.departure,
        }
    }
}

/// Plan item with its references resolved, ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewPlanItem {
    pub airline_code: String,
    pub origin_airport_id: i32,
    pub destination_airport_id: i32,
    pub departure: Option<DateTime<Utc>>,
}

/// Reference to an airline that is created when missing.
#[derive(Debug, Clone)]
pub struct AirlineRef {
    pub airline_code: String,
    pub name: Option<String>,
}

impl AirlineRef {
    pub fn from_dto(dto: AirlineRefDto) -> Self {
        Self {
            airline_code: dto.airline_code,
            name: dto.name,
        }
    }
}

/// Reference to an airport that is created when missing.
#[derive(Debug, Clone)]
pub struct AirportRef {
    pub icao: String,
    pub iata: String,
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl AirportRef {
    pub fn key(&self) -> AirportKey {
        AirportKey::new(&self.icao, &self.iata)
    }

    pub fn from_dto(dto: AirportRefDto) -> Self {
        Self {
            icao: dto.icao,
            iata: dto.iata,
            name: dto.name,
            city: dto.city,
            country: dto.country,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlanItemParam {
    pub airline: AirlineRef,
    pub origin: AirportRef,
    pub destination: AirportRef,
    pub departure: Option<DateTime<Utc>>,
}

impl PlanItemParam {
    pub fn from_dto(dto: CreatePlanItemDto) -> Self {
        Self {
            airline: AirlineRef::from_dto(dto.airline),
            origin: AirportRef::from_dto(dto.origin),
            destination: AirportRef::from_dto(dto.destination),
            departure: dto.departure,
        }
    }
}

/// Reference to a person that is created when missing.
#[derive(Debug, Clone)]
pub struct TravellerParam {
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

impl TravellerParam {
    #[cfg(test)]
    pub fn username(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            first_name: None,
            last_name: None,
            email: None,
            age: None,
        }
    }

    pub fn from_dto(dto: TravellerRefDto) -> Self {
        Self {
            username: dto.username,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            age: dto.age,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTripParam {
    /// Assigned as the current maximum plus one when absent.
    pub trip_id: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub budget: Option<i64>,
    pub plan_items: Vec<PlanItemParam>,
    pub travellers: Vec<TravellerParam>,
}

impl CreateTripParam {
    pub fn from_dto(dto: CreateTripDto) -> Self {
        Self {
            trip_id: dto.trip_id,
            name: dto.name,
            description: dto.description,
            budget: dto.budget,
            plan_items: dto
                .plan_items
                .into_iter()
                .map(PlanItemParam::from_dto)
                .collect(),
            travellers: dto
                .travellers
                .into_iter()
                .map(TravellerParam::from_dto)
                .collect(),
        }
    }
}

/// Trip row ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewTrip {
    pub trip_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub budget: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTripParam {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub budget: Option<Option<i64>>,
    pub plan_items: Option<Vec<PlanItemParam>>,
    pub travellers: Option<Vec<TravellerParam>>,
}

impl UpdateTripParam {
    pub fn from_dto(dto: UpdateTripDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            budget: dto.budget,
            plan_items: dto
                .plan_items
                .map(|items| items.into_iter().map(PlanItemParam::from_dto).collect()),
            travellers: dto
                .travellers
                .map(|people| people.into_iter().map(TravellerParam::from_dto).collect()),
        }
    }
}

/// Scalar changes applied to a stored trip.
#[derive(Debug, Clone, Default)]
pub struct TripChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub budget: Option<Option<i64>>,
}
