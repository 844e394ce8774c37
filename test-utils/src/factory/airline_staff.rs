//! Airline staff association factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Links `username` to the staff of `airline_code` without any existence checks.
///
/// Either side may be absent from its collection, which is how tests build
/// dangling associations.
pub async fn create_airline_staff(
    db: &DatabaseConnection,
    airline_code: &str,
    username: &str,
) -> Result<entity::airline_staff::Model, DbErr> {
    entity::airline_staff::ActiveModel {
        airline_code: ActiveValue::Set(airline_code.to_string()),
        username: ActiveValue::Set(username.to_string()),
    }
    .insert(db)
    .await
}
