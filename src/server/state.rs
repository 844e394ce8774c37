//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Cloned into every handler through Axum's state extraction.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool; clones share the pool.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
