//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! conversion tests between entity models, domain models and DTOs.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let person = fixture::person::entity();
//! let named = fixture::person::entity_builder().username("jdoe").build();
//! ```

pub mod airport;
pub mod person;

pub use airport::{entity as airport_entity, entity_builder as airport_entity_builder};
pub use person::{entity as person_entity, entity_builder as person_entity_builder};
