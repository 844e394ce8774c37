use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::integrity::BusinessKey,
    model::trip::{NewTrip, Trip, TripChanges},
};

impl BusinessKey for entity::trip::Entity {
    type Key = i32;
    type Id = i32;

    const KIND: &'static str = "trip";

    fn key_condition(trip_id: &i32) -> Condition {
        Condition::all().add(entity::trip::Column::TripId.eq(*trip_id))
    }

    fn identity_column() -> entity::trip::Column {
        entity::trip::Column::Id
    }

    fn key_of(model: &entity::trip::Model) -> i32 {
        model.trip_id
    }
}

pub struct TripRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TripRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every trip ordered by trip id, without plan items.
    pub async fn find_all(&self) -> Result<Vec<Trip>, DbErr> {
        let trips = entity::prelude::Trip::find()
            .order_by_asc(entity::trip::Column::TripId)
            .all(self.db)
            .await?;

        Ok(trips.into_iter().map(Trip::from_entity).collect())
    }

    /// Finds a trip by its trip id.
    ///
    /// # Returns
    /// - `Ok(Some(Trip))` - The trip, without plan items
    /// - `Ok(None)` - No trip has the id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_trip_id(&self, trip_id: i32) -> Result<Option<Trip>, DbErr> {
        let trip = entity::prelude::Trip::find()
            .filter(entity::trip::Column::TripId.eq(trip_id))
            .one(self.db)
            .await?;

        Ok(trip.map(Trip::from_entity))
    }

    /// Next free trip id: the current maximum plus one, or 1 when there are no trips.
    pub async fn next_trip_id(&self) -> Result<i32, DbErr> {
        let latest = entity::prelude::Trip::find()
            .order_by_desc(entity::trip::Column::TripId)
            .one(self.db)
            .await?;

        Ok(latest.map_or(1, |trip| trip.trip_id + 1))
    }

    /// Inserts a new trip.
    ///
    /// # Arguments
    /// - `trip` - Trip with its id already chosen
    ///
    /// # Returns
    /// - `Ok(Trip)` - The stored trip
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, trip: NewTrip) -> Result<Trip, DbErr> {
        let model = entity::trip::ActiveModel {
            trip_id: ActiveValue::Set(trip.trip_id),
            name: ActiveValue::Set(trip.name),
            description: ActiveValue::Set(trip.description),
            budget: ActiveValue::Set(trip.budget),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Trip::from_entity(model))
    }

    /// Applies scalar changes to the trip with the given id.
    ///
    /// # Arguments
    /// - `trip_id` - Business key of the trip to update
    /// - `changes` - Fields to change; plan items and travellers are not touched here
    ///
    /// # Returns
    /// - `Ok(Trip)` - The trip after the update
    /// - `Err(DbErr::RecordNotFound)` - No trip has the id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, trip_id: i32, changes: TripChanges) -> Result<Trip, DbErr> {
        let trip = entity::prelude::Trip::find()
            .filter(entity::trip::Column::TripId.eq(trip_id))
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Trip {} not found", trip_id)))?;

        let mut active_model: entity::trip::ActiveModel = trip.clone().into();
        if let Some(name) = changes.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = changes.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(budget) = changes.budget {
            active_model.budget = ActiveValue::Set(budget);
        }

        if !active_model.is_changed() {
            return Ok(Trip::from_entity(trip));
        }

        let trip = active_model.update(self.db).await?;

        Ok(Trip::from_entity(trip))
    }

    pub async fn delete(&self, trip_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Trip::delete_many()
            .filter(entity::trip::Column::TripId.eq(trip_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
