//! Restaurants service errors.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum RestaurantsServiceError {
    /// The requested restaurant does not exist.
    #[error("restaurant not found")]
    NotFound,

    /// The underlying store call failed.
    #[error("storage error")]
    Store(#[source] StoreError),
}

impl From<StoreError> for RestaurantsServiceError {
    fn from(error: StoreError) -> Self {
        if matches!(error, StoreError::NotFound) {
            return Self::NotFound;
        }

        Self::Store(error)
    }
}
