use sea_orm::{DatabaseConnection, DatabaseTransaction};

use crate::{
    model::{
        person::PersonDto,
        search::{SearchCriteria, SearchResultDto},
    },
    server::{
        data::{
            association::JoinTableRepository, integrity::ExistenceProbe,
            person::PersonRepository, search::SearchRepository,
        },
        error::AppError,
        model::{
            person::{CreatePersonParam, Person, UpdatePersonParam},
            trip::TravellerParam,
        },
        service::{
            integrity::{ensure_absent, ensure_exists},
            transaction::{TxContext, TxScope},
        },
    },
};

pub struct PersonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<PersonDto>, AppError> {
        let people = PersonRepository::new(self.db).find_all().await?;

        Ok(people.into_iter().map(Person::into_dto).collect())
    }

    pub async fn get(&self, username: &str) -> Result<PersonDto, AppError> {
        PersonRepository::new(self.db)
            .find_by_username(username)
            .await?
            .map(Person::into_dto)
            .ok_or_else(|| AppError::not_found("person", username))
    }

    pub async fn exists(&self, username: &str) -> Result<bool, AppError> {
        Ok(ExistenceProbe::new(self.db)
            .exists::<entity::person::Entity>(&username.to_string())
            .await?)
    }

    pub async fn search(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<SearchResultDto<PersonDto>, AppError> {
        let page = SearchRepository::new(self.db)
            .search::<entity::person::Entity>(criteria)
            .await?
            .map(|model| Person::from_entity(model).into_dto());

        Ok(SearchResultDto {
            total_count: page.count,
            data: page.data,
        })
    }

    pub async fn search_count(&self, criteria: &SearchCriteria) -> Result<u64, AppError> {
        Ok(SearchRepository::new(self.db)
            .count::<entity::person::Entity>(criteria)
            .await?)
    }

    /// Creates a person.
    ///
    /// # Arguments
    /// - `context` - `TxContext::New` to own the transaction, or `Join` to run in the caller's
    /// - `param` - Username, names and optional contact fields
    ///
    /// # Returns
    /// - `Ok(PersonDto)` - The stored person
    /// - `Err(AppError::Conflict)` - The username is taken
    /// - `Err(AppError::DbErr)` - Database error; an owned transaction is rolled back
    pub async fn create(
        &self,
        context: TxContext<'_>,
        param: CreatePersonParam,
    ) -> Result<PersonDto, AppError> {
        let scope = TxScope::enter(self.db, context).await?;
        let result = Self::create_within(scope.txn(), param).await;

        Ok(scope.finish(result).await?.into_dto())
    }

    async fn create_within(
        txn: &DatabaseTransaction,
        param: CreatePersonParam,
    ) -> Result<Person, AppError> {
        ensure_absent::<entity::person::Entity, _>(txn, &param.username).await?;

        let person = PersonRepository::new(txn).create(param).await?;
        tracing::info!("Created person '{}'", person.username);

        Ok(person)
    }

    /// Partially updates a person.
    ///
    /// # Arguments
    /// - `context` - Transaction to own or join
    /// - `username` - Business key of the person to update
    /// - `param` - Fields to change
    ///
    /// # Returns
    /// - `Ok(PersonDto)` - The person after the update
    /// - `Err(AppError::NotFound)` - No person has the username
    pub async fn update(
        &self,
        context: TxContext<'_>,
        username: &str,
        param: UpdatePersonParam,
    ) -> Result<PersonDto, AppError> {
        let scope = TxScope::enter(self.db, context).await?;
        let result = Self::update_within(scope.txn(), username, param).await;

        Ok(scope.finish(result).await?.into_dto())
    }

    async fn update_within(
        txn: &DatabaseTransaction,
        username: &str,
        param: UpdatePersonParam,
    ) -> Result<Person, AppError> {
        ensure_exists::<entity::person::Entity, _>(txn, &username.to_string()).await?;

        let person = PersonRepository::new(txn).update(username, param).await?;
        tracing::info!("Updated person '{}'", username);

        Ok(person)
    }

    /// Deletes a person and every trip and staff link naming them. Trips and
    /// airlines themselves are kept.
    pub async fn delete(&self, context: TxContext<'_>, username: &str) -> Result<(), AppError> {
        let scope = TxScope::enter(self.db, context).await?;
        let result = Self::delete_within(scope.txn(), username).await;

        scope.finish(result).await
    }

    async fn delete_within(txn: &DatabaseTransaction, username: &str) -> Result<(), AppError> {
        let username = username.to_string();
        ensure_exists::<entity::person::Entity, _>(txn, &username).await?;

        let trips = JoinTableRepository::<entity::person_trip::Entity, _>::new(txn)
            .delete_by_left(&username)
            .await?;
        let employers = JoinTableRepository::<entity::airline_staff::Entity, _>::new(txn)
            .delete_by_right(&username)
            .await?;
        PersonRepository::new(txn).delete(&username).await?;
        tracing::info!(
            "Deleted person '{}', {} trip link(s) and {} staff link(s)",
            username,
            trips,
            employers
        );

        Ok(())
    }

    /// Makes sure the traveller exists as a person, creating them when both
    /// names are given. Runs inside the caller's transaction.
    pub async fn resolve_or_create(
        &self,
        txn: &DatabaseTransaction,
        traveller: &TravellerParam,
    ) -> Result<(), AppError> {
        if ExistenceProbe::new(txn)
            .exists::<entity::person::Entity>(&traveller.username)
            .await?
        {
            return Ok(());
        }

        let (Some(first_name), Some(last_name)) =
            (traveller.first_name.clone(), traveller.last_name.clone())
        else {
            return Err(AppError::InvalidInput(format!(
                "Person '{}' does not exist and cannot be created without a first and last name",
                traveller.username
            )));
        };

        self.create(
            TxContext::Join(txn),
            CreatePersonParam {
                username: traveller.username.clone(),
                first_name,
                last_name,
                email: traveller.email.clone(),
                age: traveller.age,
            },
        )
        .await?;

        Ok(())
    }
}
