//! Orders service errors.

use tavola::orders::{OrderValidationError, UnknownStatusError};
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    /// No active session.
    #[error("not signed in")]
    Unauthenticated,

    /// The order failed client-side validation.
    #[error(transparent)]
    Validation(#[from] OrderValidationError),

    /// The requested order does not exist.
    #[error("order not found")]
    NotFound,

    /// A persisted order carried a status outside the pipeline.
    #[error(transparent)]
    UnknownStatus(#[from] UnknownStatusError),

    /// The underlying store call failed.
    #[error("storage error")]
    Store(#[source] StoreError),
}

impl From<StoreError> for OrdersServiceError {
    fn from(error: StoreError) -> Self {
        if matches!(error, StoreError::NotFound) {
            return Self::NotFound;
        }

        Self::Store(error)
    }
}
