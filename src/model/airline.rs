use serde::{Deserialize, Serialize};

use crate::model::{airport::AirportKeyDto, api::deserialize_present};

/// Snapshot of the person who was CEO when the airline was written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CeoDto {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirlineDto {
    pub airline_code: String,
    pub name: String,
    pub ceo: Option<CeoDto>,
    pub ceo_name: Option<String>,
    pub home_airport: Option<AirportKeyDto>,
}

/// `ceo` names an existing person by username. It is mutually exclusive with
/// the free-text `ceoName`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAirlineDto {
    pub airline_code: String,
    pub name: String,
    #[serde(default)]
    pub ceo: Option<String>,
    #[serde(default)]
    pub ceo_name: Option<String>,
    #[serde(default)]
    pub home_airport: Option<AirportKeyDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAirlineDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub ceo: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub ceo_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub home_airport: Option<Option<AirportKeyDto>>,
}
