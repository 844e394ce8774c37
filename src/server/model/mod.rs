//! Domain models used between the data and service layers.
//!
//! Entity models are converted into these types by the repositories, and the
//! services convert them into wire DTOs.

pub mod airline;
pub mod airport;
pub mod association;
pub mod person;
pub mod trip;
