use sea_orm::ActiveValue;

use crate::server::data::association::JoinTable;

/// Airline (by code) employs person (by username).
impl JoinTable for entity::airline_staff::Entity {
    type Left = entity::airline::Entity;
    type Right = entity::person::Entity;
    type LeftKey = String;
    type RightKey = String;

    fn left_column() -> entity::airline_staff::Column {
        entity::airline_staff::Column::AirlineCode
    }

    fn right_column() -> entity::airline_staff::Column {
        entity::airline_staff::Column::Username
    }

    fn left_key_column() -> entity::airline::Column {
        entity::airline::Column::AirlineCode
    }

    fn right_key_column() -> entity::person::Column {
        entity::person::Column::Username
    }

    fn row(airline_code: String, username: String) -> entity::airline_staff::ActiveModel {
        entity::airline_staff::ActiveModel {
            airline_code: ActiveValue::Set(airline_code),
            username: ActiveValue::Set(username),
        }
    }

    fn left_of(model: &entity::airline_staff::Model) -> String {
        model.airline_code.clone()
    }

    fn right_of(model: &entity::airline_staff::Model) -> String {
        model.username.clone()
    }
}
