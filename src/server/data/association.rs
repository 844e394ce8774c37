//! Generic repository for many-to-many join tables.
//!
//! A join table stores pairs of business keys, `(a, b)`. Listing one side
//! resolves the keys of the other side into full records; keys whose record no
//! longer exists are kept in the result as `None`.

use std::{collections::HashMap, fmt::Display, hash::Hash, marker::PhantomData};

use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Value,
};

use crate::server::data::integrity::BusinessKey;

pub trait JoinTable: EntityTrait {
    type Left: BusinessKey<Key = Self::LeftKey>;
    type Right: BusinessKey<Key = Self::RightKey>;
    type LeftKey: Clone + Eq + Hash + Display + Into<Value> + Send + Sync;
    type RightKey: Clone + Eq + Hash + Display + Into<Value> + Send + Sync;

    /// Column of this table holding the left key.
    fn left_column() -> Self::Column;
    fn right_column() -> Self::Column;

    /// Column of the left entity its key is stored in.
    fn left_key_column() -> <Self::Left as EntityTrait>::Column;
    fn right_key_column() -> <Self::Right as EntityTrait>::Column;

    fn row(left: Self::LeftKey, right: Self::RightKey) -> Self::ActiveModel;

    fn left_of(model: &Self::Model) -> Self::LeftKey;
    fn right_of(model: &Self::Model) -> Self::RightKey;
}

pub struct JoinTableRepository<'a, J, C> {
    db: &'a C,
    table: PhantomData<J>,
}

impl<'a, J, C> JoinTableRepository<'a, J, C>
where
    J: JoinTable,
    J::Model: IntoActiveModel<J::ActiveModel>,
    C: ConnectionTrait,
{
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            table: PhantomData,
        }
    }

    fn pair_condition(left: &J::LeftKey, right: &J::RightKey) -> Condition {
        Condition::all()
            .add(J::left_column().eq(left.clone()))
            .add(J::right_column().eq(right.clone()))
    }

    /// Checks whether the pair is linked.
    ///
    /// # Arguments
    /// - `left` - Key on the left side
    /// - `right` - Key on the right side
    ///
    /// # Returns
    /// - `Ok(true)` - The pair is stored
    /// - `Ok(false)` - The pair is not stored
    /// - `Err(DbErr)` - Database error during query
    pub async fn exists(&self, left: &J::LeftKey, right: &J::RightKey) -> Result<bool, DbErr> {
        let row = J::find()
            .filter(Self::pair_condition(left, right))
            .one(self.db)
            .await?;

        Ok(row.is_some())
    }

    /// Stores one pair. Existence of both sides and of the pair is checked by the
    /// caller.
    pub async fn insert(&self, left: J::LeftKey, right: J::RightKey) -> Result<(), DbErr> {
        J::insert(J::row(left, right))
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Inserts all pairs in one statement. Nothing is sent for an empty batch.
    pub async fn insert_many(&self, pairs: Vec<(J::LeftKey, J::RightKey)>) -> Result<u64, DbErr> {
        if pairs.is_empty() {
            return Ok(0);
        }

        J::insert_many(pairs.into_iter().map(|(left, right)| J::row(left, right)))
            .exec_without_returning(self.db)
            .await
    }

    /// Deletes one pair, returning the number of removed rows.
    pub async fn delete(&self, left: &J::LeftKey, right: &J::RightKey) -> Result<u64, DbErr> {
        let result = J::delete_many()
            .filter(Self::pair_condition(left, right))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every pair with the given left key.
    pub async fn delete_by_left(&self, left: &J::LeftKey) -> Result<u64, DbErr> {
        let result = J::delete_many()
            .filter(J::left_column().eq(left.clone()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every pair with the given right key.
    pub async fn delete_by_right(&self, right: &J::RightKey) -> Result<u64, DbErr> {
        let result = J::delete_many()
            .filter(J::right_column().eq(right.clone()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Right keys linked to `left`, in key order.
    pub async fn right_keys(&self, left: &J::LeftKey) -> Result<Vec<J::RightKey>, DbErr> {
        let rows = J::find()
            .filter(J::left_column().eq(left.clone()))
            .order_by_asc(J::right_column())
            .all(self.db)
            .await?;

        Ok(rows.iter().map(J::right_of).collect())
    }

    pub async fn left_keys(&self, right: &J::RightKey) -> Result<Vec<J::LeftKey>, DbErr> {
        let rows = J::find()
            .filter(J::right_column().eq(right.clone()))
            .order_by_asc(J::left_column())
            .all(self.db)
            .await?;

        Ok(rows.iter().map(J::left_of).collect())
    }

    /// Resolves the records on the right side linked to `left`.
    ///
    /// # Arguments
    /// - `left` - Key on the left side
    ///
    /// # Returns
    /// - `Ok(Vec<Option<Model>>)` - One entry per link in right key order; `None` for a
    ///   key whose record no longer exists
    /// - `Err(DbErr)` - Database error during either query
    pub async fn list_right(
        &self,
        left: &J::LeftKey,
    ) -> Result<Vec<Option<<J::Right as EntityTrait>::Model>>, DbErr> {
        let keys = self.right_keys(left).await?;
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let resolved: HashMap<J::RightKey, <J::Right as EntityTrait>::Model> =
            <J::Right as EntityTrait>::find()
                .filter(J::right_key_column().is_in(keys.clone()))
                .all(self.db)
                .await?
                .into_iter()
                .map(|model| (<J::Right as BusinessKey>::key_of(&model), model))
                .collect();

        Ok(keys.iter().map(|key| resolved.get(key).cloned()).collect())
    }

    /// Resolves the records on the left side linked to `right`.
    ///
    /// # Arguments
    /// - `right` - Key on the right side
    ///
    /// # Returns
    /// - `Ok(Vec<Option<Model>>)` - One entry per link in left key order; `None` for a
    ///   key whose record no longer exists
    /// - `Err(DbErr)` - Database error during either query
    pub async fn list_left(
        &self,
        right: &J::RightKey,
    ) -> Result<Vec<Option<<J::Left as EntityTrait>::Model>>, DbErr> {
        let keys = self.left_keys(right).await?;
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let resolved: HashMap<J::LeftKey, <J::Left as EntityTrait>::Model> =
            <J::Left as EntityTrait>::find()
                .filter(J::left_key_column().is_in(keys.clone()))
                .all(self.db)
                .await?
                .into_iter()
                .map(|model| (<J::Left as BusinessKey>::key_of(&model), model))
                .collect();

        Ok(keys.iter().map(|key| resolved.get(key).cloned()).collect())
    }
}
