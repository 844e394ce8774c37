//! Data access layer.
//!
//! Repositories wrap a connection or transaction (`C: ConnectionTrait`) and
//! convert entity models into domain models. The search engine and the join
//! table repository are generic over the entity they operate on.

pub mod airline;
pub mod airline_staff;
pub mod airport;
pub mod association;
pub mod integrity;
pub mod person;
pub mod person_trip;
pub mod plan_item;
pub mod search;
pub mod trip;

#[cfg(test)]
mod test;
