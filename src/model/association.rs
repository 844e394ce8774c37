use serde::{Deserialize, Serialize};

/// Row of the airline staff association as returned by its search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirlineStaffDto {
    pub airline_code: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonTripDto {
    pub username: String,
    pub trip_id: i32,
}
