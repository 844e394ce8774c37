//! Transaction ownership for write operations.
//!
//! Every write operation receives a [`TxContext`]. With [`TxContext::New`] the
//! operation opens its own transaction and becomes its owner: it commits on
//! success and rolls back on failure. With [`TxContext::Join`] it participates
//! in a transaction owned by a caller further up and leaves commit or rollback
//! to that caller.

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

use crate::server::error::AppError;

/// How a write operation obtains its transaction.
#[derive(Clone, Copy)]
pub enum TxContext<'t> {
    /// Open a new transaction owned by the operation.
    New,
    /// Run inside a transaction owned by the caller.
    Join(&'t DatabaseTransaction),
}

/// Transaction held by a running write operation.
pub enum TxScope<'t> {
    Owner(DatabaseTransaction),
    Participant(&'t DatabaseTransaction),
}

impl<'t> TxScope<'t> {
    pub async fn enter(db: &DatabaseConnection, context: TxContext<'t>) -> Result<Self, DbErr> {
        match context {
            TxContext::New => Ok(Self::Owner(db.begin().await?)),
            TxContext::Join(txn) => Ok(Self::Participant(txn)),
        }
    }

    pub fn txn(&self) -> &DatabaseTransaction {
        match self {
            Self::Owner(txn) => txn,
            Self::Participant(txn) => txn,
        }
    }

    #[cfg(test)]
    pub fn is_owner(&self) -> bool {
        matches!(self, Self::Owner(_))
    }

    /// Ends the scope with the operation's result.
    ///
    /// An owner commits on success. On failure it rolls back and returns the
    /// original error; a failed rollback is only logged. A participant returns
    /// the result untouched.
    pub async fn finish<T>(self, result: Result<T, AppError>) -> Result<T, AppError> {
        let txn = match self {
            Self::Participant(_) => return result,
            Self::Owner(txn) => txn,
        };

        match result {
            Ok(value) => {
                txn.commit().await?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::warn!(
                        "Failed to roll back transaction after '{}': {}",
                        err,
                        rollback_err
                    );
                }
                Err(err)
            }
        }
    }
}
