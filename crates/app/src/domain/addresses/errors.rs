//! Addresses service errors.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AddressesServiceError {
    /// The underlying store call failed.
    #[error("storage error")]
    Store(#[from] StoreError),
}
