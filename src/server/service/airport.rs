use sea_orm::{DatabaseConnection, DatabaseTransaction};

use crate::{
    model::{
        airline::AirlineDto,
        airport::AirportDto,
        search::{SearchCriteria, SearchResultDto},
    },
    server::{
        data::{
            airline::AirlineRepository, airport::AirportRepository, integrity::ExistenceProbe,
            plan_item::PlanItemRepository, search::SearchRepository,
        },
        error::AppError,
        model::{
            airport::{Airport, AirportKey, CreateAirportParam, UpdateAirportParam},
            trip::AirportRef,
        },
        service::{
            airline::airline_dtos,
            integrity::{ensure_absent, ensure_exists},
            transaction::{TxContext, TxScope},
        },
    },
};

pub struct AirportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AirportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<AirportDto>, AppError> {
        let airports = AirportRepository::new(self.db).find_all().await?;

        Ok(airports.into_iter().map(Airport::into_dto).collect())
    }

    pub async fn get(&self, key: &AirportKey) -> Result<AirportDto, AppError> {
        AirportRepository::new(self.db)
            .find_by_key(key)
            .await?
            .map(Airport::into_dto)
            .ok_or_else(|| AppError::not_found("airport", key))
    }

    pub async fn exists(&self, key: &AirportKey) -> Result<bool, AppError> {
        Ok(ExistenceProbe::new(self.db)
            .exists::<entity::airport::Entity>(key)
            .await?)
    }

    pub async fn search(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<SearchResultDto<AirportDto>, AppError> {
        let page = SearchRepository::new(self.db)
            .search::<entity::airport::Entity>(criteria)
            .await?
            .map(|model| Airport::from_entity(model).into_dto());

        Ok(SearchResultDto {
            total_count: page.count,
            data: page.data,
        })
    }

    pub async fn search_count(&self, criteria: &SearchCriteria) -> Result<u64, AppError> {
        Ok(SearchRepository::new(self.db)
            .count::<entity::airport::Entity>(criteria)
            .await?)
    }

    /// Airlines whose home airport is the given airport.
    pub async fn airlines_based_at(&self, key: &AirportKey) -> Result<Vec<AirlineDto>, AppError> {
        let airport = AirportRepository::new(self.db)
            .find_by_key(key)
            .await?
            .ok_or_else(|| AppError::not_found("airport", key))?;

        let airlines = AirlineRepository::new(self.db)
            .find_by_home_airport(airport.id)
            .await?;

        airline_dtos(self.db, airlines).await
    }

    /// Creates an airport.
    ///
    /// # Arguments
    /// - `context` - `TxContext::New` to own the transaction, or `Join` to run in the caller's
    /// - `param` - Codes, name and optional location
    ///
    /// # Returns
    /// - `Ok(AirportDto)` - The stored airport
    /// - `Err(AppError::Conflict)` - The ICAO/IATA pair is taken
    pub async fn create(
        &self,
        context: TxContext<'_>,
        param: CreateAirportParam,
    ) -> Result<AirportDto, AppError> {
        let scope = TxScope::enter(self.db, context).await?;
        let result = Self::create_within(scope.txn(), param).await;

        Ok(scope.finish(result).await?.into_dto())
    }

    async fn create_within(
        txn: &DatabaseTransaction,
        param: CreateAirportParam,
    ) -> Result<Airport, AppError> {
        let key = param.key();
        ensure_absent::<entity::airport::Entity, _>(txn, &key).await?;

        let airport = AirportRepository::new(txn).create(param).await?;
        tracing::info!("Created airport {}", key);

        Ok(airport)
    }

    /// Partially updates an airport.
    ///
    /// # Arguments
    /// - `context` - Transaction to own or join
    /// - `key` - Business key of the airport to update
    /// - `param` - Fields to change; city and country accept an explicit `null`
    ///
    /// # Returns
    /// - `Ok(AirportDto)` - The airport after the update
    /// - `Err(AppError::NotFound)` - No airport has the key
    pub async fn update(
        &self,
        context: TxContext<'_>,
        key: &AirportKey,
        param: UpdateAirportParam,
    ) -> Result<AirportDto, AppError> {
        let scope = TxScope::enter(self.db, context).await?;
        let result = Self::update_within(scope.txn(), key, param).await;

        Ok(scope.finish(result).await?.into_dto())
    }

    async fn update_within(
        txn: &DatabaseTransaction,
        key: &AirportKey,
        param: UpdateAirportParam,
    ) -> Result<Airport, AppError> {
        ensure_exists::<entity::airport::Entity, _>(txn, key).await?;

        let airport = AirportRepository::new(txn).update(key, param).await?;
        tracing::info!("Updated airport {}", key);

        Ok(airport)
    }

    /// Deletes an airport that nothing references any more.
    ///
    /// # Returns
    /// - `Err(AppError::InvalidInput)`: An airline or plan item still points at it
    pub async fn delete(&self, context: TxContext<'_>, key: &AirportKey) -> Result<(), AppError> {
        let scope = TxScope::enter(self.db, context).await?;
        let result = Self::delete_within(scope.txn(), key).await;

        scope.finish(result).await
    }

    async fn delete_within(txn: &DatabaseTransaction, key: &AirportKey) -> Result<(), AppError> {
        let airport = AirportRepository::new(txn)
            .find_by_key(key)
            .await?
            .ok_or_else(|| AppError::not_found("airport", key))?;

        let airlines = AirlineRepository::new(txn)
            .count_by_home_airport(airport.id)
            .await?;
        let plan_items = PlanItemRepository::new(txn)
            .count_by_airport(airport.id)
            .await?;
        if airlines + plan_items > 0 {
            return Err(AppError::InvalidInput(format!(
                "Airport '{}' is still referenced by {} airline(s) and {} plan item(s)",
                key, airlines, plan_items
            )));
        }

        AirportRepository::new(txn).delete(key).await?;
        tracing::info!("Deleted airport {}", key);

        Ok(())
    }

    /// Returns the row id of the referenced airport, creating it first when it
    /// does not exist. Creation requires a name.
    pub async fn resolve_or_create(
        txn: &DatabaseTransaction,
        reference: &AirportRef,
    ) -> Result<i32, AppError> {
        let key = reference.key();
        if let Some(id) = ExistenceProbe::new(txn)
            .foreign_id::<entity::airport::Entity>(&key)
            .await?
        {
            return Ok(id);
        }

        let Some(name) = reference.name.clone() else {
            return Err(AppError::InvalidInput(format!(
                "Airport '{}' does not exist and cannot be created without a name",
                key
            )));
        };

        let airport = Self::create_within(
            txn,
            CreateAirportParam {
                icao: reference.icao.clone(),
                iata: reference.iata.clone(),
                name,
                city: reference.city.clone(),
                country: reference.country.clone(),
            },
        )
        .await?;

        Ok(airport.id)
    }
}
