//! Business logic layer.
//!
//! Services hold the process-wide connection and open a transaction per write
//! operation, unless the caller passes one in through
//! [`transaction::TxContext::Join`].

pub mod airline;
pub mod airport;
pub mod association;
pub mod integrity;
pub mod person;
pub mod transaction;
pub mod trip;

#[cfg(test)]
mod test;
