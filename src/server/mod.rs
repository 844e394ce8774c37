//! Server-side API backend and business logic.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules, cascades and transaction ownership
//! - **Data Layer** (`data/`) - Repositories, the search engine and existence probes
//! - **Model Layer** (`model/`) - Domain models and operation parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Request Flow
//!
//! 1. **Router** routes the request to a controller
//! 2. **Controller** converts the DTO to params and calls a service with a fresh
//!    transaction context
//! 3. **Service** checks references, runs the cascade and commits or rolls back
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** wraps the result in a response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
