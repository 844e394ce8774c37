//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Every default business key is derived from a process-wide
//! counter, so factories never collide inside one database.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let person = factory::person::create_person(&db).await?;
//!     let trip = factory::trip::create_trip(&db).await?;
//!     factory::person_trip::create_person_trip(&db, &person.username, trip.trip_id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let airline = factory::airline::AirlineFactory::new(&db)
//!     .airline_code("AA")
//!     .name("Test Air")
//!     .build()
//!     .await?;
//! ```

pub mod airline;
pub mod airline_staff;
pub mod airport;
pub mod helpers;
pub mod person;
pub mod person_trip;
pub mod plan_item;
pub mod trip;

// Re-export commonly used factory functions for concise usage
pub use airline::create_airline;
pub use airline_staff::create_airline_staff;
pub use airport::create_airport;
pub use person::create_person;
pub use person_trip::create_person_trip;
pub use plan_item::create_plan_item;
pub use trip::create_trip;
