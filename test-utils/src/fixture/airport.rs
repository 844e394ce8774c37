//! Airport fixtures for in-memory test data.

/// Creates an airport entity model with default values.
///
/// Defaults: id `1`, `KJFK`/`JFK`, "John F. Kennedy International", New York, USA.
pub fn entity() -> entity::airport::Model {
    entity_builder().build()
}

/// Creates an airport entity builder for customization.
pub fn entity_builder() -> AirportEntityBuilder {
    AirportEntityBuilder::default()
}

/// Builder for airport entity models.
pub struct AirportEntityBuilder {
    id: i32,
    icao: String,
    iata: String,
    name: String,
    city: Option<String>,
    country: Option<String>,
}

impl Default for AirportEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            icao: "KJFK".to_string(),
            iata: "JFK".to_string(),
            name: "John F. Kennedy International".to_string(),
            city: Some("New York".to_string()),
            country: Some("USA".to_string()),
        }
    }
}

impl AirportEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn icao(mut self, icao: impl Into<String>) -> Self {
        self.icao = icao.into();
        self
    }

    pub fn iata(mut self, iata: impl Into<String>) -> Self {
        self.iata = iata.into();
        self
    }

    pub fn build(self) -> entity::airport::Model {
        entity::airport::Model {
            id: self.id,
            icao: self.icao,
            iata: self.iata,
            name: self.name,
            city: self.city,
            country: self.country,
        }
    }
}
