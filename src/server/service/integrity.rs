//! Referential checks shared by the services.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::integrity::{BusinessKey, ExistenceProbe},
    error::AppError,
};

/// Fails with `NotFound` unless a record with the key exists.
pub async fn ensure_exists<E, C>(db: &C, key: &E::Key) -> Result<(), AppError>
where
    E: BusinessKey,
    C: ConnectionTrait,
{
    if ExistenceProbe::new(db).exists::<E>(key).await? {
        Ok(())
    } else {
        Err(AppError::not_found(E::KIND, key))
    }
}

/// Fails with `Conflict` if a record with the key already exists.
pub async fn ensure_absent<E, C>(db: &C, key: &E::Key) -> Result<(), AppError>
where
    E: BusinessKey,
    C: ConnectionTrait,
{
    if ExistenceProbe::new(db).exists::<E>(key).await? {
        Err(AppError::conflict(E::KIND, key))
    } else {
        Ok(())
    }
}

/// Resolves a business key to the identity other records store, failing with
/// `NotFound` when it is unknown.
pub async fn resolve_id<E, C>(db: &C, key: &E::Key) -> Result<E::Id, AppError>
where
    E: BusinessKey,
    C: ConnectionTrait,
{
    ExistenceProbe::new(db)
        .foreign_id::<E>(key)
        .await?
        .ok_or_else(|| AppError::not_found(E::KIND, key))
}
