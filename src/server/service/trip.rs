//! Trip service.
//!
//! Creating or replacing a trip's plan cascades into the referenced airlines and
//! airports, and creating or replacing its travellers cascades into people and
//! `person_trip` links. Every step of a cascade runs in the one transaction of
//! the top-level call, so a failure anywhere leaves nothing behind.

use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction};

use crate::{
    model::{
        search::{SearchCriteria, SearchResultDto},
        trip::{TripDto, TripSummaryDto},
    },
    server::{
        data::{
            airport::AirportRepository, association::JoinTableRepository,
            integrity::ExistenceProbe, plan_item::PlanItemRepository, search::SearchRepository,
            trip::TripRepository,
        },
        error::AppError,
        model::trip::{
            CreateTripParam, NewPlanItem, NewTrip, PlanItemParam, TravellerParam, Trip,
            TripChanges, UpdateTripParam,
        },
        service::{
            airline::AirlineService,
            airport::AirportService,
            integrity::{ensure_absent, ensure_exists},
            person::PersonService,
            transaction::{TxContext, TxScope},
        },
    },
};

/// Builds the full trip DTO, resolving plan item airports to their keys.
async fn trip_dto<C: ConnectionTrait>(db: &C, trip: Trip) -> Result<TripDto, AppError> {
    let items = PlanItemRepository::new(db).find_by_trip(trip.trip_id).await?;
    let airport_ids = items
        .iter()
        .flat_map(|item| [item.origin_airport_id, item.destination_airport_id])
        .collect();
    let keys = AirportRepository::new(db).keys_by_ids(airport_ids).await?;

    let plan_items = items
        .into_iter()
        .map(|item| {
            let origin = keys.get(&item.origin_airport_id).cloned();
            let destination = keys.get(&item.destination_airport_id).cloned();
            item.into_dto(origin, destination)
        })
        .collect();

    Ok(trip.into_dto(plan_items))
}

pub struct TripService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TripService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<TripSummaryDto>, AppError> {
        let trips = TripRepository::new(self.db).find_all().await?;

        Ok(trips.into_iter().map(Trip::into_summary_dto).collect())
    }

    /// Gets a trip with its plan items in plan order.
    pub async fn get(&self, trip_id: i32) -> Result<TripDto, AppError> {
        let trip = TripRepository::new(self.db)
            .find_by_trip_id(trip_id)
            .await?
            .ok_or_else(|| AppError::not_found("trip", trip_id))?;

        trip_dto(self.db, trip).await
    }

    pub async fn exists(&self, trip_id: i32) -> Result<bool, AppError> {
        Ok(ExistenceProbe::new(self.db)
            .exists::<entity::trip::Entity>(&trip_id)
            .await?)
    }

    pub async fn search(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<SearchResultDto<TripSummaryDto>, AppError> {
        let page = SearchRepository::new(self.db)
            .search::<entity::trip::Entity>(criteria)
            .await?
            .map(|model| Trip::from_entity(model).into_summary_dto());

        Ok(SearchResultDto {
            total_count: page.count,
            data: page.data,
        })
    }

    pub async fn search_count(&self, criteria: &SearchCriteria) -> Result<u64, AppError> {
        Ok(SearchRepository::new(self.db)
            .count::<entity::trip::Entity>(criteria)
            .await?)
    }

    /// Creates a trip with its plan and travellers.
    ///
    /// Airlines, airports and people referenced by the request are created when
    /// missing, which requires their names to be present. A trip id is assigned
    /// when the request has none.
    ///
    /// # Returns
    /// - `Err(AppError::Conflict)`: The requested trip id is taken
    /// - `Err(AppError::InvalidInput)`: A missing reference cannot be created
    pub async fn create(
        &self,
        context: TxContext<'_>,
        param: CreateTripParam,
    ) -> Result<TripDto, AppError> {
        let scope = TxScope::enter(self.db, context).await?;
        let result = self.create_within(scope.txn(), param).await;

        scope.finish(result).await
    }

    async fn create_within(
        &self,
        txn: &DatabaseTransaction,
        param: CreateTripParam,
    ) -> Result<TripDto, AppError> {
        let trip_id = match param.trip_id {
            Some(trip_id) => {
                ensure_absent::<entity::trip::Entity, _>(txn, &trip_id).await?;
                trip_id
            }
            None => TripRepository::new(txn).next_trip_id().await?,
        };

        let plan = self.resolve_plan(txn, &param.plan_items).await?;

        let trip = TripRepository::new(txn)
            .create(NewTrip {
                trip_id,
                name: param.name,
                description: param.description,
                budget: param.budget,
            })
            .await?;
        PlanItemRepository::new(txn)
            .create_many(trip_id, plan)
            .await?;
        let travellers = self
            .link_travellers(txn, trip_id, &param.travellers)
            .await?;
        tracing::info!(
            "Created trip {} with {} plan item(s) and {} new traveller link(s)",
            trip_id,
            param.plan_items.len(),
            travellers
        );

        trip_dto(txn, trip).await
    }

    /// Partially updates a trip. A present plan or traveller list replaces the
    /// stored one.
    pub async fn update(
        &self,
        context: TxContext<'_>,
        trip_id: i32,
        param: UpdateTripParam,
    ) -> Result<TripDto, AppError> {
        let scope = TxScope::enter(self.db, context).await?;
        let result = self.update_within(scope.txn(), trip_id, param).await;

        scope.finish(result).await
    }

    async fn update_within(
        &self,
        txn: &DatabaseTransaction,
        trip_id: i32,
        param: UpdateTripParam,
    ) -> Result<TripDto, AppError> {
        ensure_exists::<entity::trip::Entity, _>(txn, &trip_id).await?;

        let trip = TripRepository::new(txn)
            .update(
                trip_id,
                TripChanges {
                    name: param.name,
                    description: param.description,
                    budget: param.budget,
                },
            )
            .await?;

        if let Some(items) = param.plan_items {
            let plan = self.resolve_plan(txn, &items).await?;
            let plan_items = PlanItemRepository::new(txn);
            plan_items.delete_by_trip(trip_id).await?;
            plan_items.create_many(trip_id, plan).await?;
        }

        if let Some(travellers) = param.travellers {
            JoinTableRepository::<entity::person_trip::Entity, _>::new(txn)
                .delete_by_right(&trip_id)
                .await?;
            self.link_travellers(txn, trip_id, &travellers).await?;
        }

        tracing::info!("Updated trip {}", trip_id);

        trip_dto(txn, trip).await
    }

    /// Deletes a trip, its plan items and its traveller links. The travellers
    /// themselves are kept.
    pub async fn delete(&self, context: TxContext<'_>, trip_id: i32) -> Result<(), AppError> {
        let scope = TxScope::enter(self.db, context).await?;
        let result = Self::delete_within(scope.txn(), trip_id).await;

        scope.finish(result).await
    }

    async fn delete_within(txn: &DatabaseTransaction, trip_id: i32) -> Result<(), AppError> {
        ensure_exists::<entity::trip::Entity, _>(txn, &trip_id).await?;

        let items = PlanItemRepository::new(txn).delete_by_trip(trip_id).await?;
        let travellers = JoinTableRepository::<entity::person_trip::Entity, _>::new(txn)
            .delete_by_right(&trip_id)
            .await?;
        TripRepository::new(txn).delete(trip_id).await?;
        tracing::info!(
            "Deleted trip {} with {} plan item(s) and {} traveller link(s)",
            trip_id,
            items,
            travellers
        );

        Ok(())
    }

    /// Resolves every plan item's airline and airports, creating the missing
    /// ones, in plan order.
    async fn resolve_plan(
        &self,
        txn: &DatabaseTransaction,
        items: &[PlanItemParam],
    ) -> Result<Vec<NewPlanItem>, AppError> {
        let airlines = AirlineService::new(self.db);

        let mut plan = Vec::with_capacity(items.len());
        for item in items {
            airlines.resolve_or_create(txn, &item.airline).await?;
            let origin_airport_id = AirportService::resolve_or_create(txn, &item.origin).await?;
            let destination_airport_id =
                AirportService::resolve_or_create(txn, &item.destination).await?;

            plan.push(NewPlanItem {
                airline_code: item.airline.airline_code.clone(),
                origin_airport_id,
                destination_airport_id,
                departure: item.departure,
            });
        }

        Ok(plan)
    }

    /// Resolves or creates every traveller and links the ones not linked yet,
    /// returning the number of new links.
    async fn link_travellers(
        &self,
        txn: &DatabaseTransaction,
        trip_id: i32,
        travellers: &[TravellerParam],
    ) -> Result<u64, AppError> {
        let people = PersonService::new(self.db);
        let links = JoinTableRepository::<entity::person_trip::Entity, _>::new(txn);

        let mut queued: Vec<(String, i32)> = Vec::new();
        for traveller in travellers {
            people.resolve_or_create(txn, traveller).await?;

            let already_queued = queued
                .iter()
                .any(|(username, _)| *username == traveller.username);
            if !already_queued && !links.exists(&traveller.username, &trip_id).await? {
                queued.push((traveller.username.clone(), trip_id));
            }
        }

        Ok(links.insert_many(queued).await?)
    }
}
