use thiserror::Error;

use crate::storage::PersistenceError;

/// Failures surfaced by budget store operations.
#[derive(Debug, Error)]
pub enum BudgetError {
    /// Input or a merged record broke a field rule. Nothing was written.
    #[error("invalid budget: {0}")]
    Validation(String),

    /// No budget with this id exists (it may have been deleted meanwhile).
    #[error("budget {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl BudgetError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
