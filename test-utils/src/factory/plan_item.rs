//! Plan item factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a plan item on `trip_id` flying `airline_code` between two airports.
///
/// # Arguments
/// - `db` - Database connection
/// - `trip_id` - Business key of the owning trip
/// - `position` - Order of the item within the trip
/// - `airline_code` - Business key of the operating airline
/// - `origin_airport_id` / `destination_airport_id` - Store ids of the airports
pub async fn create_plan_item(
    db: &DatabaseConnection,
    trip_id: i32,
    position: i32,
    airline_code: &str,
    origin_airport_id: i32,
    destination_airport_id: i32,
) -> Result<entity::plan_item::Model, DbErr> {
    entity::plan_item::ActiveModel {
        trip_id: ActiveValue::Set(trip_id),
        position: ActiveValue::Set(position),
        airline_code: ActiveValue::Set(airline_code.to_string()),
        origin_airport_id: ActiveValue::Set(origin_airport_id),
        destination_airport_id: ActiveValue::Set(destination_airport_id),
        departure: ActiveValue::Set(Some(chrono::Utc::now())),
        ..Default::default()
    }
    .insert(db)
    .await
}
