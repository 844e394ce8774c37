//! Airport domain models and parameters.

use std::fmt;

use crate::model::airport::{AirportDto, AirportKeyDto, CreateAirportDto, UpdateAirportDto};

/// Business key of an airport, rendered as `ICAO/IATA` in messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AirportKey {
    pub icao: String,
    pub iata: String,
}

impl AirportKey {
    pub fn new(icao: impl Into<String>, iata: impl Into<String>) -> Self {
        Self {
            icao: icao.into(),
            iata: iata.into(),
        }
    }

    pub fn from_dto(dto: AirportKeyDto) -> Self {
        Self {
            icao: dto.icao,
            iata: dto.iata,
        }
    }

    pub fn into_dto(self) -> AirportKeyDto {
        AirportKeyDto {
            icao: self.icao,
            iata: self.iata,
        }
    }
}

impl fmt::Display for AirportKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.icao, self.iata)
    }
}

/// Airport as stored, including its row id which other records reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    pub id: i32,
    pub icao: String,
    pub iata: String,
    pub name: String,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl Airport {
    pub fn key(&self) -> AirportKey {
        AirportKey::new(&self.icao, &self.iata)
    }

    pub fn into_dto(self) -> AirportDto {
        AirportDto {
            icao: self.icao,
            iata: self.iata,
            name: self.name,
            city: self.city,
            country: self.country,
        }
    }

    pub fn from_entity(entity: entity::airport::Model) -> Self {
        Self {
            id: entity.id,
            icao: entity.icao,
            iata: entity.iata,
            name: entity.name,
            city: entity.city,
            country: entity.country,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAirportParam {
    pub icao: String,
    pub iata: String,
    pub name: String,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl CreateAirportParam {
    pub fn key(&self) -> AirportKey {
        AirportKey::new(&self.icao, &self.iata)
    }

    pub fn from_dto(dto: CreateAirportDto) -> Self {
        Self {
            icao: dto.icao,
            iata: dto.iata,
            name: dto.name,
            city: dto.city,
            country: dto.country,
        }
    }
}

/// Partial update. The outer `Option` tells whether the field was provided.
#[derive(Debug, Clone, Default)]
pub struct UpdateAirportParam {
    pub name: Option<String>,
    pub city: Option<Option<String>>,
    pub country: Option<Option<String>>,
}

impl UpdateAirportParam {
    pub fn from_dto(dto: UpdateAirportDto) -> Self {
        Self {
            name: dto.name,
            city: dto.city,
            country: dto.country,
        }
    }
}
