use serde::{Deserialize, Serialize};

use crate::model::api::deserialize_present;

/// Business key of an airport. Both codes are required to address one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AirportKeyDto {
    pub icao: String,
    pub iata: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportDto {
    pub icao: String,
    pub iata: String,
    pub name: String,
    pub city: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAirportDto {
    pub icao: String,
    pub iata: String,
    pub name: String,
    pub city: Option<String>,
    pub country: Option<String>,
}

/// Partial airport update; absent keys keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAirportDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub city: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub country: Option<Option<String>>,
}
