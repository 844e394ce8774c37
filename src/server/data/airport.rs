use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::integrity::BusinessKey,
    model::airport::{Airport, AirportKey, CreateAirportParam, UpdateAirportParam},
};

impl BusinessKey for entity::airport::Entity {
    type Key = AirportKey;
    type Id = i32;

    const KIND: &'static str = "airport";

    fn key_condition(key: &AirportKey) -> Condition {
        Condition::all()
            .add(entity::airport::Column::Icao.eq(key.icao.clone()))
            .add(entity::airport::Column::Iata.eq(key.iata.clone()))
    }

    fn identity_column() -> entity::airport::Column {
        entity::airport::Column::Id
    }

    fn key_of(model: &entity::airport::Model) -> AirportKey {
        AirportKey::new(&model.icao, &model.iata)
    }
}

pub struct AirportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AirportRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// All airports ordered by ICAO then IATA code.
    pub async fn find_all(&self) -> Result<Vec<Airport>, DbErr> {
        let airports = entity::prelude::Airport::find()
            .order_by_asc(entity::airport::Column::Icao)
            .order_by_asc(entity::airport::Column::Iata)
            .all(self.db)
            .await?;

        Ok(airports.into_iter().map(Airport::from_entity).collect())
    }

    /// Finds an airport by its ICAO/IATA pair.
    ///
    /// # Arguments
    /// - `key` - Business key of the airport
    ///
    /// # Returns
    /// - `Ok(Some(Airport))` - The airport
    /// - `Ok(None)` - No airport has the key
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_key(&self, key: &AirportKey) -> Result<Option<Airport>, DbErr> {
        let airport = entity::prelude::Airport::find()
            .filter(entity::airport::Entity::key_condition(key))
            .one(self.db)
            .await?;

        Ok(airport.map(Airport::from_entity))
    }

    /// Looks up the keys of the given airport ids. Unknown ids are absent from
    /// the returned map.
    pub async fn keys_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, AirportKey>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let airports = entity::prelude::Airport::find()
            .filter(entity::airport::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(airports
            .into_iter()
            .map(|airport| (airport.id, AirportKey::new(airport.icao, airport.iata)))
            .collect())
    }

    /// Inserts a new airport.
    ///
    /// # Arguments
    /// - `param` - Codes, name and optional location
    ///
    /// # Returns
    /// - `Ok(Airport)` - The stored airport
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateAirportParam) -> Result<Airport, DbErr> {
        let airport = entity::airport::ActiveModel {
            icao: ActiveValue::Set(param.icao),
            iata: ActiveValue::Set(param.iata),
            name: ActiveValue::Set(param.name),
            city: ActiveValue::Set(param.city),
            country: ActiveValue::Set(param.country),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Airport::from_entity(airport))
    }

    /// Applies the provided fields to the airport with the given key.
    ///
    /// # Arguments
    /// - `key` - Business key of the airport to update
    /// - `param` - Fields to change; `Some(None)` clears city or country
    ///
    /// # Returns
    /// - `Ok(Airport)` - The airport after the update
    /// - `Err(DbErr::RecordNotFound)` - No airport has the key
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        key: &AirportKey,
        param: UpdateAirportParam,
    ) -> Result<Airport, DbErr> {
        let airport = entity::prelude::Airport::find()
            .filter(entity::airport::Entity::key_condition(key))
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Airport {} not found", key)))?;

        let mut active_model: entity::airport::ActiveModel = airport.clone().into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(city) = param.city {
            active_model.city = ActiveValue::Set(city);
        }
        if let Some(country) = param.country {
            active_model.country = ActiveValue::Set(country);
        }

        if !active_model.is_changed() {
            return Ok(Airport::from_entity(airport));
        }

        let airport = active_model.update(self.db).await?;

        Ok(Airport::from_entity(airport))
    }

    /// Deletes the airport with the given key, returning the number of deleted rows.
    pub async fn delete(&self, key: &AirportKey) -> Result<u64, DbErr> {
        let result = entity::prelude::Airport::delete_many()
            .filter(entity::airport::Entity::key_condition(key))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
