//! Wire DTOs shared by controllers and services.
//!
//! Every JSON body the API accepts or produces is defined here. Field names are
//! camelCase on the wire.

pub mod airline;
pub mod airport;
pub mod api;
pub mod association;
pub mod person;
pub mod search;
pub mod trip;
