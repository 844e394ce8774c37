//! Airport factory for creating test airport entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test airports with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let airport = AirportFactory::new(&db)
///     .icao("KJFK")
///     .iata("JFK")
///     .build()
///     .await?;
/// ```
pub struct AirportFactory<'a> {
    db: &'a DatabaseConnection,
    icao: String,
    iata: String,
    name: String,
    city: Option<String>,
    country: Option<String>,
}

impl<'a> AirportFactory<'a> {
    /// Creates a new AirportFactory with default values.
    ///
    /// Defaults:
    /// - icao: `"ICAO{id}"`
    /// - iata: `"I{id}"`
    /// - name: `"Airport {id}"`
    /// - city / country: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            icao: format!("ICAO{}", id),
            iata: format!("I{}", id),
            name: format!("Airport {}", id),
            city: None,
            country: None,
        }
    }

    pub fn icao(mut self, icao: impl Into<String>) -> Self {
        self.icao = icao.into();
        self
    }

    pub fn iata(mut self, iata: impl Into<String>) -> Self {
        self.iata = iata.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Builds and inserts the airport entity into the database.
    pub async fn build(self) -> Result<entity::airport::Model, DbErr> {
        entity::airport::ActiveModel {
            icao: ActiveValue::Set(self.icao),
            iata: ActiveValue::Set(self.iata),
            name: ActiveValue::Set(self.name),
            city: ActiveValue::Set(self.city),
            country: ActiveValue::Set(self.country),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an airport with default values.
pub async fn create_airport(db: &DatabaseConnection) -> Result<entity::airport::Model, DbErr> {
    AirportFactory::new(db).build().await
}
