//! Trip factory for creating test trip entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test trips with customizable fields.
pub struct TripFactory<'a> {
    db: &'a DatabaseConnection,
    trip_id: i32,
    name: String,
    description: Option<String>,
    budget: Option<i64>,
}

impl<'a> TripFactory<'a> {
    /// Creates a new TripFactory with default values.
    ///
    /// Defaults:
    /// - trip_id: `{id}`
    /// - name: `"Trip {id}"`
    /// - description / budget: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            trip_id: id as i32,
            name: format!("Trip {}", id),
            description: None,
            budget: None,
        }
    }

    pub fn trip_id(mut self, trip_id: i32) -> Self {
        self.trip_id = trip_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn budget(mut self, budget: i64) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Builds and inserts the trip entity into the database.
    pub async fn build(self) -> Result<entity::trip::Model, DbErr> {
        entity::trip::ActiveModel {
            trip_id: ActiveValue::Set(self.trip_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            budget: ActiveValue::Set(self.budget),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a trip with default values.
pub async fn create_trip(db: &DatabaseConnection) -> Result<entity::trip::Model, DbErr> {
    TripFactory::new(db).build().await
}
