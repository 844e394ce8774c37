//! `SeaORM` entities for the travel collections.

pub mod prelude;

pub mod airline;
pub mod airline_staff;
pub mod airport;
pub mod person;
pub mod person_trip;
pub mod plan_item;
pub mod trip;
