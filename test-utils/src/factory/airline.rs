//! Airline factory for creating test airline entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test airlines with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let airline = AirlineFactory::new(&db)
///     .airline_code("AA")
///     .name("Test Air")
///     .home_airport_id(airport.id)
///     .build()
///     .await?;
/// ```
pub struct AirlineFactory<'a> {
    db: &'a DatabaseConnection,
    airline_code: String,
    name: String,
    ceo: Option<serde_json::Value>,
    ceo_name: Option<String>,
    home_airport_id: Option<i32>,
}

impl<'a> AirlineFactory<'a> {
    /// Creates a new AirlineFactory with default values.
    ///
    /// Defaults:
    /// - airline_code: `"AL{id}"`
    /// - name: `"Airline {id}"`
    /// - ceo / ceo_name / home_airport_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            airline_code: format!("AL{}", id),
            name: format!("Airline {}", id),
            ceo: None,
            ceo_name: None,
            home_airport_id: None,
        }
    }

    pub fn airline_code(mut self, airline_code: impl Into<String>) -> Self {
        self.airline_code = airline_code.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the embedded CEO document verbatim.
    pub fn ceo(mut self, ceo: serde_json::Value) -> Self {
        self.ceo = Some(ceo);
        self
    }

    pub fn ceo_name(mut self, ceo_name: impl Into<String>) -> Self {
        self.ceo_name = Some(ceo_name.into());
        self
    }

    pub fn home_airport_id(mut self, home_airport_id: i32) -> Self {
        self.home_airport_id = Some(home_airport_id);
        self
    }

    /// Builds and inserts the airline entity into the database.
    pub async fn build(self) -> Result<entity::airline::Model, DbErr> {
        entity::airline::ActiveModel {
            airline_code: ActiveValue::Set(self.airline_code),
            name: ActiveValue::Set(self.name),
            ceo: ActiveValue::Set(self.ceo),
            ceo_name: ActiveValue::Set(self.ceo_name),
            home_airport_id: ActiveValue::Set(self.home_airport_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an airline with default values.
pub async fn create_airline(db: &DatabaseConnection) -> Result<entity::airline::Model, DbErr> {
    AirlineFactory::new(db).build().await
}

/// Creates an airline with a specific code and name.
pub async fn create_airline_named(
    db: &DatabaseConnection,
    airline_code: impl Into<String>,
    name: impl Into<String>,
) -> Result<entity::airline::Model, DbErr> {
    AirlineFactory::new(db)
        .airline_code(airline_code)
        .name(name)
        .build()
        .await
}
