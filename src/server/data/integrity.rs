//! Existence probes on business keys.
//!
//! Every entity addressed by a business key implements [`BusinessKey`]. The
//! [`ExistenceProbe`] answers "does it exist" and "what is its row id" with a
//! projection-only query that never materialises the full record.

use std::fmt::Display;

use sea_orm::{
    ConnectionTrait, Condition, DbErr, EntityTrait, QueryFilter, QuerySelect, TryGetableMany,
};

pub trait BusinessKey: EntityTrait {
    type Key: Display + Send + Sync;
    /// Type of the identity column returned by [`ExistenceProbe::foreign_id`].
    type Id: TryGetableMany + Send + Sync;

    /// Lowercase noun used in messages, e.g. `airline`.
    const KIND: &'static str;

    fn key_condition(key: &Self::Key) -> Condition;

    fn identity_column() -> Self::Column;

    fn key_of(model: &Self::Model) -> Self::Key;
}

pub struct ExistenceProbe<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ExistenceProbe<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether a record with the given business key exists.
    ///
    /// # Arguments
    /// - `key` - Business key of an `E` record
    ///
    /// # Returns
    /// - `Ok(true)` / `Ok(false)` - Whether the record exists; absence is not an error
    /// - `Err(DbErr)` - Database error during query
    pub async fn exists<E: BusinessKey>(&self, key: &E::Key) -> Result<bool, DbErr> {
        Ok(self.foreign_id::<E>(key).await?.is_some())
    }

    /// Returns the identity of the record with the given key, if any.
    ///
    /// # Arguments
    /// - `key` - Business key of an `E` record
    ///
    /// # Returns
    /// - `Ok(Some(id))` - Identity column value of the record
    /// - `Ok(None)` - No record has the key
    /// - `Err(DbErr)` - Database error during query
    pub async fn foreign_id<E: BusinessKey>(&self, key: &E::Key) -> Result<Option<E::Id>, DbErr> {
        E::find()
            .select_only()
            .column(E::identity_column())
            .filter(E::key_condition(key))
            .into_tuple::<E::Id>()
            .one(self.db)
            .await
    }
}
