use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{airport::AirportKeyDto, api::deserialize_present};

/// Trip as returned by list and search endpoints, without its plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummaryDto {
    pub trip_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub budget: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDto {
    pub trip_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub budget: Option<i64>,
    pub plan_items: Vec<PlanItemDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanItemDto {
    pub position: i32,
    pub airline_code: String,
    /// `None` when the referenced airport no longer exists.
    pub origin: Option<AirportKeyDto>,
    pub destination: Option<AirportKeyDto>,
    pub departure: Option<DateTime<Utc>>,
}

/// Airline reference inside a plan item. `name` is required only when the
/// airline does not exist yet and has to be created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirlineRefDto {
    pub airline_code: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirportRefDto {
    pub icao: String,
    pub iata: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlanItemDto {
    pub airline: AirlineRefDto,
    pub origin: AirportRefDto,
    pub destination: AirportRefDto,
    #[serde(default)]
    pub departure: Option<DateTime<Utc>>,
}

/// Traveller reference. Name fields are required only for people that do not
/// exist yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravellerRefDto {
    pub username: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripDto {
    #[serde(default)]
    pub trip_id: Option<i32>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub budget: Option<i64>,
    #[serde(default)]
    pub plan_items: Vec<CreatePlanItemDto>,
    #[serde(default)]
    pub travellers: Vec<TravellerRefDto>,
}

/// Partial trip update. A present `planItems` or `travellers` list replaces the
/// stored one entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTripDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub budget: Option<Option<i64>>,
    #[serde(default)]
    pub plan_items: Option<Vec<CreatePlanItemDto>>,
    #[serde(default)]
    pub travellers: Option<Vec<TravellerRefDto>>,
}
