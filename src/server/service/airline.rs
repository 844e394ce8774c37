use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction};

use crate::{
    model::{
        airline::AirlineDto,
        search::{SearchCriteria, SearchResultDto},
    },
    server::{
        data::{
            airline::AirlineRepository, airport::AirportRepository,
            association::JoinTableRepository, integrity::ExistenceProbe,
            person::PersonRepository, search::SearchRepository,
        },
        error::AppError,
        model::{
            airline::{
                Airline, AirlineChanges, CeoSnapshot, CreateAirlineParam, NewAirline,
                UpdateAirlineParam,
            },
            trip::AirlineRef,
        },
        service::{
            integrity::{ensure_absent, ensure_exists, resolve_id},
            transaction::{TxContext, TxScope},
        },
    },
};

const CEO_EXCLUSIVE: &str = "Provide either CEO or ceoName, not both";

/// Converts airlines to DTOs, resolving home airport ids to their keys with a
/// single lookup.
pub(crate) async fn airline_dtos<C: ConnectionTrait>(
    db: &C,
    airlines: Vec<Airline>,
) -> Result<Vec<AirlineDto>, AppError> {
    let airport_ids = airlines
        .iter()
        .filter_map(|airline| airline.home_airport_id)
        .collect();
    let keys = AirportRepository::new(db).keys_by_ids(airport_ids).await?;

    Ok(airlines
        .into_iter()
        .map(|airline| {
            let home_airport = airline
                .home_airport_id
                .and_then(|id| keys.get(&id).cloned());
            airline.into_dto(home_airport)
        })
        .collect())
}

async fn airline_dto<C: ConnectionTrait>(db: &C, airline: Airline) -> Result<AirlineDto, AppError> {
    let home_airport = match airline.home_airport_id {
        Some(id) => AirportRepository::new(db)
            .keys_by_ids(vec![id])
            .await?
            .remove(&id),
        None => None,
    };

    Ok(airline.into_dto(home_airport))
}

pub struct AirlineService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AirlineService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<AirlineDto>, AppError> {
        let airlines = AirlineRepository::new(self.db).find_all().await?;

        airline_dtos(self.db, airlines).await
    }

    pub async fn get(&self, airline_code: &str) -> Result<AirlineDto, AppError> {
        let airline = AirlineRepository::new(self.db)
            .find_by_code(airline_code)
            .await?
            .ok_or_else(|| AppError::not_found("airline", airline_code))?;

        airline_dto(self.db, airline).await
    }

    pub async fn exists(&self, airline_code: &str) -> Result<bool, AppError> {
        Ok(ExistenceProbe::new(self.db)
            .exists::<entity::airline::Entity>(&airline_code.to_string())
            .await?)
    }

    pub async fn search(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<SearchResultDto<AirlineDto>, AppError> {
        let page = SearchRepository::new(self.db)
            .search::<entity::airline::Entity>(criteria)
            .await?
            .try_map(Airline::from_entity)?;

        Ok(SearchResultDto {
            total_count: page.count,
            data: airline_dtos(self.db, page.data).await?,
        })
    }

    pub async fn search_count(&self, criteria: &SearchCriteria) -> Result<u64, AppError> {
        Ok(SearchRepository::new(self.db)
            .count::<entity::airline::Entity>(criteria)
            .await?)
    }

    /// Creates an airline, copying the CEO's person record into it.
    ///
    /// # Returns
    /// - `Err(AppError::InvalidInput)`: Both `ceo` and `ceo_name` were given
    /// - `Err(AppError::Conflict)`: The airline code is taken
    /// - `Err(AppError::NotFound)`: The CEO or the home airport does not exist
    pub async fn create(
        &self,
        context: TxContext<'_>,
        param: CreateAirlineParam,
    ) -> Result<AirlineDto, AppError> {
        let scope = TxScope::enter(self.db, context).await?;
        let result = Self::create_within(scope.txn(), param).await;

        scope.finish(result).await
    }

    async fn create_within(
        txn: &DatabaseTransaction,
        param: CreateAirlineParam,
    ) -> Result<AirlineDto, AppError> {
        if param.ceo.is_some() && param.ceo_name.is_some() {
            return Err(AppError::InvalidInput(CEO_EXCLUSIVE.to_string()));
        }

        ensure_absent::<entity::airline::Entity, _>(txn, &param.airline_code).await?;

        let ceo = match &param.ceo {
            Some(username) => Some(Self::ceo_snapshot(txn, username).await?),
            None => None,
        };
        let home_airport_id = match &param.home_airport {
            Some(key) => Some(resolve_id::<entity::airport::Entity, _>(txn, key).await?),
            None => None,
        };

        let airline = AirlineRepository::new(txn)
            .create(NewAirline {
                airline_code: param.airline_code,
                name: param.name,
                ceo,
                ceo_name: param.ceo_name,
                home_airport_id,
            })
            .await?;
        tracing::info!("Created airline '{}'", airline.airline_code);

        Ok(airline.into_dto(param.home_airport))
    }

    /// Applies a partial update. Setting the CEO clears `ceo_name` and the
    /// other way round.
    pub async fn update(
        &self,
        context: TxContext<'_>,
        airline_code: &str,
        param: UpdateAirlineParam,
    ) -> Result<AirlineDto, AppError> {
        let scope = TxScope::enter(self.db, context).await?;
        let result = Self::update_within(scope.txn(), airline_code, param).await;

        scope.finish(result).await
    }

    async fn update_within(
        txn: &DatabaseTransaction,
        airline_code: &str,
        param: UpdateAirlineParam,
    ) -> Result<AirlineDto, AppError> {
        if matches!(param.ceo, Some(Some(_))) && matches!(param.ceo_name, Some(Some(_))) {
            return Err(AppError::InvalidInput(CEO_EXCLUSIVE.to_string()));
        }

        ensure_exists::<entity::airline::Entity, _>(txn, &airline_code.to_string()).await?;

        let mut changes = AirlineChanges {
            name: param.name,
            ceo_name: param.ceo_name,
            ..Default::default()
        };
        if let Some(ceo) = param.ceo {
            changes.ceo = Some(match ceo {
                Some(username) => Some(Self::ceo_snapshot(txn, &username).await?),
                None => None,
            });
        }
        if matches!(changes.ceo, Some(Some(_))) {
            changes.ceo_name = Some(None);
        }
        if matches!(changes.ceo_name, Some(Some(_))) {
            changes.ceo = Some(None);
        }
        if let Some(home_airport) = param.home_airport {
            changes.home_airport_id = Some(match home_airport {
                Some(key) => Some(resolve_id::<entity::airport::Entity, _>(txn, &key).await?),
                None => None,
            });
        }

        let airline = AirlineRepository::new(txn)
            .update(airline_code, changes)
            .await?;
        tracing::info!("Updated airline '{}'", airline_code);

        airline_dto(txn, airline).await
    }

    /// Deletes an airline together with its staff links.
    pub async fn delete(&self, context: TxContext<'_>, airline_code: &str) -> Result<(), AppError> {
        let scope = TxScope::enter(self.db, context).await?;
        let result = Self::delete_within(scope.txn(), airline_code).await;

        scope.finish(result).await
    }

    async fn delete_within(txn: &DatabaseTransaction, airline_code: &str) -> Result<(), AppError> {
        let airline_code = airline_code.to_string();
        ensure_exists::<entity::airline::Entity, _>(txn, &airline_code).await?;

        let staff = JoinTableRepository::<entity::airline_staff::Entity, _>::new(txn)
            .delete_by_left(&airline_code)
            .await?;
        AirlineRepository::new(txn).delete(&airline_code).await?;
        tracing::info!(
            "Deleted airline '{}' and {} staff link(s)",
            airline_code,
            staff
        );

        Ok(())
    }

    /// Makes sure the referenced airline exists, creating it when a name is
    /// given. Runs inside the caller's transaction.
    pub async fn resolve_or_create(
        &self,
        txn: &DatabaseTransaction,
        reference: &AirlineRef,
    ) -> Result<(), AppError> {
        if ExistenceProbe::new(txn)
            .exists::<entity::airline::Entity>(&reference.airline_code)
            .await?
        {
            return Ok(());
        }

        let Some(name) = reference.name.clone() else {
            return Err(AppError::InvalidInput(format!(
                "Airline '{}' does not exist and cannot be created without a name",
                reference.airline_code
            )));
        };

        self.create(
            TxContext::Join(txn),
            CreateAirlineParam {
                airline_code: reference.airline_code.clone(),
                name,
                ceo: None,
                ceo_name: None,
                home_airport: None,
            },
        )
        .await?;

        Ok(())
    }

    async fn ceo_snapshot(txn: &DatabaseTransaction, username: &str) -> Result<CeoSnapshot, AppError> {
        let person = PersonRepository::new(txn)
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found("person", username))?;

        Ok(CeoSnapshot::of(&person))
    }
}
