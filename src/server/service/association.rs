//! Link management for the many-to-many associations.
//!
//! [`AssociationService`] is generic over the join table. `link` and `unlink`
//! are write operations with the usual transaction context; the list
//! operations never fail on unknown keys and return an empty list instead.

use std::marker::PhantomData;

use sea_orm::{DatabaseConnection, DatabaseTransaction, EntityTrait, IntoActiveModel};

use crate::{
    model::{
        airline::AirlineDto,
        person::PersonDto,
        search::{SearchCriteria, SearchResultDto},
        trip::TripSummaryDto,
    },
    server::{
        data::{
            association::{JoinTable, JoinTableRepository},
            integrity::BusinessKey,
            search::SearchRepository,
        },
        error::AppError,
        model::{airline::Airline, person::Person, trip::Trip},
        service::{
            airline::airline_dtos,
            integrity::ensure_exists,
            transaction::{TxContext, TxScope},
        },
    },
};

pub type AirlineStaffService<'a> = AssociationService<'a, entity::airline_staff::Entity>;
pub type PersonTripService<'a> = AssociationService<'a, entity::person_trip::Entity>;

pub struct AssociationService<'a, J> {
    db: &'a DatabaseConnection,
    table: PhantomData<J>,
}

impl<'a, J> AssociationService<'a, J>
where
    J: JoinTable,
    J::Model: IntoActiveModel<J::ActiveModel> + Sync,
{
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            table: PhantomData,
        }
    }

    fn relation_message(left: &J::LeftKey, right: &J::RightKey, state: &str) -> String {
        format!(
            "Relation between {} '{}' and {} '{}' {}",
            <J::Left as BusinessKey>::KIND,
            left,
            <J::Right as BusinessKey>::KIND,
            right,
            state
        )
    }

    /// Links two existing records.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)`: Either side does not exist
    /// - `Err(AppError::Conflict)`: The pair is already linked
    pub async fn link(
        &self,
        context: TxContext<'_>,
        left: J::LeftKey,
        right: J::RightKey,
    ) -> Result<(), AppError> {
        let scope = TxScope::enter(self.db, context).await?;
        let result = Self::link_within(scope.txn(), left, right).await;

        scope.finish(result).await
    }

    async fn link_within(
        txn: &DatabaseTransaction,
        left: J::LeftKey,
        right: J::RightKey,
    ) -> Result<(), AppError> {
        ensure_exists::<J::Left, _>(txn, &left).await?;
        ensure_exists::<J::Right, _>(txn, &right).await?;

        let repo = JoinTableRepository::<J, _>::new(txn);
        if repo.exists(&left, &right).await? {
            return Err(AppError::Conflict(Self::relation_message(
                &left,
                &right,
                "already exists",
            )));
        }

        tracing::info!("{}", Self::relation_message(&left, &right, "created"));
        repo.insert(left, right).await?;

        Ok(())
    }

    /// Removes the link between two records.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)`: The pair is not linked
    pub async fn unlink(
        &self,
        context: TxContext<'_>,
        left: J::LeftKey,
        right: J::RightKey,
    ) -> Result<(), AppError> {
        let scope = TxScope::enter(self.db, context).await?;
        let result = Self::unlink_within(scope.txn(), &left, &right).await;

        scope.finish(result).await
    }

    async fn unlink_within(
        txn: &DatabaseTransaction,
        left: &J::LeftKey,
        right: &J::RightKey,
    ) -> Result<(), AppError> {
        let removed = JoinTableRepository::<J, _>::new(txn)
            .delete(left, right)
            .await?;
        if removed == 0 {
            return Err(AppError::NotFound(Self::relation_message(
                left,
                right,
                "does not exist",
            )));
        }

        tracing::info!("{}", Self::relation_message(left, right, "removed"));

        Ok(())
    }

    pub async fn link_exists(&self, left: &J::LeftKey, right: &J::RightKey) -> Result<bool, AppError> {
        Ok(JoinTableRepository::<J, _>::new(self.db)
            .exists(left, right)
            .await?)
    }

    /// Records of the right side linked to `left`; `None` marks a link whose
    /// record no longer exists.
    pub async fn list_by_a(
        &self,
        left: &J::LeftKey,
    ) -> Result<Vec<Option<<J::Right as EntityTrait>::Model>>, AppError> {
        Ok(JoinTableRepository::<J, _>::new(self.db)
            .list_right(left)
            .await?)
    }

    /// Records of the left side linked to `right`; `None` marks a link whose
    /// record no longer exists.
    pub async fn list_by_b(
        &self,
        right: &J::RightKey,
    ) -> Result<Vec<Option<<J::Left as EntityTrait>::Model>>, AppError> {
        Ok(JoinTableRepository::<J, _>::new(self.db)
            .list_left(right)
            .await?)
    }

    /// Searches the association rows themselves.
    pub async fn search<T>(
        &self,
        criteria: &SearchCriteria,
        convert: impl FnMut(J::Model) -> T,
    ) -> Result<SearchResultDto<T>, AppError> {
        let page = SearchRepository::new(self.db)
            .search::<J>(criteria)
            .await?
            .map(convert);

        Ok(SearchResultDto {
            total_count: page.count,
            data: page.data,
        })
    }

    pub async fn search_count(&self, criteria: &SearchCriteria) -> Result<u64, AppError> {
        Ok(SearchRepository::new(self.db).count::<J>(criteria).await?)
    }
}

impl AirlineStaffService<'_> {
    /// Staff of an airline.
    pub async fn staff_of(&self, airline_code: &str) -> Result<Vec<Option<PersonDto>>, AppError> {
        let people = self.list_by_a(&airline_code.to_string()).await?;

        Ok(people
            .into_iter()
            .map(|person| person.map(|model| Person::from_entity(model).into_dto()))
            .collect())
    }

    /// Airlines a person works for.
    pub async fn employers_of(&self, username: &str) -> Result<Vec<Option<AirlineDto>>, AppError> {
        let airlines = self
            .list_by_b(&username.to_string())
            .await?
            .into_iter()
            .map(|model| model.map(Airline::from_entity).transpose())
            .collect::<Result<Vec<_>, _>>()?;

        let present = airlines.iter().flatten().cloned().collect();
        let mut dtos = airline_dtos(self.db, present).await?.into_iter();

        Ok(airlines
            .iter()
            .map(|airline| airline.as_ref().and_then(|_| dtos.next()))
            .collect())
    }
}

impl PersonTripService<'_> {
    /// Trips a person travels on.
    pub async fn trips_of(&self, username: &str) -> Result<Vec<Option<TripSummaryDto>>, AppError> {
        let trips = self.list_by_a(&username.to_string()).await?;

        Ok(trips
            .into_iter()
            .map(|trip| trip.map(|model| Trip::from_entity(model).into_summary_dto()))
            .collect())
    }

    /// Travellers of a trip.
    pub async fn travellers_of(&self, trip_id: i32) -> Result<Vec<Option<PersonDto>>, AppError> {
        let people = self.list_by_b(&trip_id).await?;

        Ok(people
            .into_iter()
            .map(|person| person.map(|model| Person::from_entity(model).into_dto()))
            .collect())
    }
}
