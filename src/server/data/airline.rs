use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::integrity::BusinessKey,
    model::airline::{Airline, AirlineChanges, CeoSnapshot, NewAirline},
};

impl BusinessKey for entity::airline::Entity {
    type Key = String;
    type Id = i32;

    const KIND: &'static str = "airline";

    fn key_condition(airline_code: &String) -> Condition {
        Condition::all().add(entity::airline::Column::AirlineCode.eq(airline_code.clone()))
    }

    fn identity_column() -> entity::airline::Column {
        entity::airline::Column::Id
    }

    fn key_of(model: &entity::airline::Model) -> String {
        model.airline_code.clone()
    }
}

fn ceo_document(ceo: Option<CeoSnapshot>) -> Result<Option<serde_json::Value>, DbErr> {
    ceo.map(|snapshot| {
        serde_json::to_value(snapshot)
            .map_err(|e| DbErr::Custom(format!("Failed to encode CEO document: {}", e)))
    })
    .transpose()
}

/// Repository for airline records, keyed by airline code.
pub struct AirlineRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AirlineRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every airline ordered by code.
    ///
    /// # Returns
    /// - `Ok(Vec<Airline>)` - All airlines, possibly empty
    /// - `Err(DbErr)` - Database error during query, or a CEO document that no longer parses
    pub async fn find_all(&self) -> Result<Vec<Airline>, DbErr> {
        entity::prelude::Airline::find()
            .order_by_asc(entity::airline::Column::AirlineCode)
            .all(self.db)
            .await?
            .into_iter()
            .map(Airline::from_entity)
            .collect()
    }

    /// Finds an airline by its code.
    ///
    /// # Arguments
    /// - `airline_code` - Business key of the airline
    ///
    /// # Returns
    /// - `Ok(Some(Airline))` - The airline
    /// - `Ok(None)` - No airline has the code
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_code(&self, airline_code: &str) -> Result<Option<Airline>, DbErr> {
        entity::prelude::Airline::find()
            .filter(entity::airline::Column::AirlineCode.eq(airline_code))
            .one(self.db)
            .await?
            .map(Airline::from_entity)
            .transpose()
    }

    /// Gets the airlines based at an airport.
    ///
    /// # Arguments
    /// - `airport_id` - Row id of the home airport
    ///
    /// # Returns
    /// - `Ok(Vec<Airline>)` - Airlines ordered by code
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_home_airport(&self, airport_id: i32) -> Result<Vec<Airline>, DbErr> {
        entity::prelude::Airline::find()
            .filter(entity::airline::Column::HomeAirportId.eq(airport_id))
            .order_by_asc(entity::airline::Column::AirlineCode)
            .all(self.db)
            .await?
            .into_iter()
            .map(Airline::from_entity)
            .collect()
    }

    /// Counts the airlines based at the airport with the given row id.
    pub async fn count_by_home_airport(&self, airport_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Airline::find()
            .filter(entity::airline::Column::HomeAirportId.eq(airport_id))
            .count(self.db)
            .await
    }

    /// Inserts a new airline with its CEO snapshot stored as a JSON document.
    ///
    /// # Arguments
    /// - `airline` - Airline with references already resolved
    ///
    /// # Returns
    /// - `Ok(Airline)` - The stored airline
    /// - `Err(DbErr)` - Database error during insert or CEO serialization
    pub async fn create(&self, airline: NewAirline) -> Result<Airline, DbErr> {
        let model = entity::airline::ActiveModel {
            airline_code: ActiveValue::Set(airline.airline_code),
            name: ActiveValue::Set(airline.name),
            ceo: ActiveValue::Set(ceo_document(airline.ceo)?),
            ceo_name: ActiveValue::Set(airline.ceo_name),
            home_airport_id: ActiveValue::Set(airline.home_airport_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Airline::from_entity(model)
    }

    /// Applies resolved changes to the airline with the given code.
    ///
    /// Nothing is written when no field changes.
    ///
    /// # Arguments
    /// - `airline_code` - Business key of the airline to update
    /// - `changes` - Fields to change, references already resolved
    ///
    /// # Returns
    /// - `Ok(Airline)` - The airline after the update
    /// - `Err(DbErr::RecordNotFound)` - No airline has the code
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        airline_code: &str,
        changes: AirlineChanges,
    ) -> Result<Airline, DbErr> {
        let airline = entity::prelude::Airline::find()
            .filter(entity::airline::Column::AirlineCode.eq(airline_code))
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Airline {} not found", airline_code)))?;

        let mut active_model: entity::airline::ActiveModel = airline.clone().into();
        if let Some(name) = changes.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(ceo) = changes.ceo {
            active_model.ceo = ActiveValue::Set(ceo_document(ceo)?);
        }
        if let Some(ceo_name) = changes.ceo_name {
            active_model.ceo_name = ActiveValue::Set(ceo_name);
        }
        if let Some(home_airport_id) = changes.home_airport_id {
            active_model.home_airport_id = ActiveValue::Set(home_airport_id);
        }

        if !active_model.is_changed() {
            return Airline::from_entity(airline);
        }

        let airline = active_model.update(self.db).await?;

        Airline::from_entity(airline)
    }

    /// Deletes the airline with the given code, returning the number of deleted rows.
    pub async fn delete(&self, airline_code: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Airline::delete_many()
            .filter(entity::airline::Column::AirlineCode.eq(airline_code))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
