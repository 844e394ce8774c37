use sea_orm::ActiveValue;

use crate::server::data::association::JoinTable;

/// Person (by username) travels on trip (by trip id). Read from the trip side
/// this table is the trip's traveller list.
impl JoinTable for entity::person_trip::Entity {
    type Left = entity::person::Entity;
    type Right = entity::trip::Entity;
    type LeftKey = String;
    type RightKey = i32;

    fn left_column() -> entity::person_trip::Column {
        entity::person_trip::Column::Username
    }

    fn right_column() -> entity::person_trip::Column {
        entity::person_trip::Column::TripId
    }

    fn left_key_column() -> entity::person::Column {
        entity::person::Column::Username
    }

    fn right_key_column() -> entity::trip::Column {
        entity::trip::Column::TripId
    }

    fn row(username: String, trip_id: i32) -> entity::person_trip::ActiveModel {
        entity::person_trip::ActiveModel {
            username: ActiveValue::Set(username),
            trip_id: ActiveValue::Set(trip_id),
        }
    }

    fn left_of(model: &entity::person_trip::Model) -> String {
        model.username.clone()
    }

    fn right_of(model: &entity::person_trip::Model) -> i32 {
        model.trip_id
    }
}
