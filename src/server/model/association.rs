use crate::model::association::{AirlineStaffDto, PersonTripDto};

/// Employment link between an airline and a person.
#[derive(Debug, Clone, PartialEq)]
pub struct AirlineStaff {
    pub airline_code: String,
    pub username: String,
}

impl AirlineStaff {
    pub fn into_dto(self) -> AirlineStaffDto {
        AirlineStaffDto {
            airline_code: self.airline_code,
            username: self.username,
        }
    }

    pub fn from_entity(entity: entity::airline_staff::Model) -> Self {
        Self {
            airline_code: entity.airline_code,
            username: entity.username,
        }
    }
}

/// Participation of a person in a trip. Read from the trip side this is the
/// trip's traveller list.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonTrip {
    pub username: String,
    pub trip_id: i32,
}

impl PersonTrip {
    pub fn into_dto(self) -> PersonTripDto {
        PersonTripDto {
            username: self.username,
            trip_id: self.trip_id,
        }
    }

    pub fn from_entity(entity: entity::person_trip::Model) -> Self {
        Self {
            username: entity.username,
            trip_id: entity.trip_id,
        }
    }
}
