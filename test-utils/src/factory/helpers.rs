//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique business keys in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a trip with `count` travellers linked to it.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of persons to create and link
///
/// # Returns
/// - `Ok((trip, persons))` - The trip and its travellers in link order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_trip_with_travellers(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::trip::Model, Vec<entity::person::Model>), DbErr> {
    let trip = crate::factory::trip::create_trip(db).await?;

    let mut persons = Vec::with_capacity(count);
    for _ in 0..count {
        let person = crate::factory::person::create_person(db).await?;
        crate::factory::person_trip::create_person_trip(db, &person.username, trip.trip_id)
            .await?;
        persons.push(person);
    }

    Ok((trip, persons))
}

/// Creates an airline with `count` staff members.
///
/// # Returns
/// - `Ok((airline, persons))` - The airline and its staff in link order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_airline_with_staff(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::airline::Model, Vec<entity::person::Model>), DbErr> {
    let airline = crate::factory::airline::create_airline(db).await?;

    let mut persons = Vec::with_capacity(count);
    for _ in 0..count {
        let person = crate::factory::person::create_person(db).await?;
        crate::factory::airline_staff::create_airline_staff(
            db,
            &airline.airline_code,
            &person.username,
        )
        .await?;
        persons.push(person);
    }

    Ok((airline, persons))
}
