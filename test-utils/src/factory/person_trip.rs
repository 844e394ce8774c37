//! Person trip association factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Links `username` to `trip_id` without any existence checks.
pub async fn create_person_trip(
    db: &DatabaseConnection,
    username: &str,
    trip_id: i32,
) -> Result<entity::person_trip::Model, DbErr> {
    entity::person_trip::ActiveModel {
        username: ActiveValue::Set(username.to_string()),
        trip_id: ActiveValue::Set(trip_id),
    }
    .insert(db)
    .await
}
