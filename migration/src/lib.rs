pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_airport_table;
mod m20260101_000002_create_person_table;
mod m20260101_000003_create_airline_table;
mod m20260101_000004_create_trip_table;
mod m20260101_000005_create_plan_item_table;
mod m20260101_000006_create_airline_staff_table;
mod m20260101_000007_create_person_trip_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_airport_table::Migration),
            Box::new(m20260101_000002_create_person_table::Migration),
            Box::new(m20260101_000003_create_airline_table::Migration),
            Box::new(m20260101_000004_create_trip_table::Migration),
            Box::new(m20260101_000005_create_plan_item_table::Migration),
            Box::new(m20260101_000006_create_airline_staff_table::Migration),
            Box::new(m20260101_000007_create_person_trip_table::Migration),
        ]
    }
}
