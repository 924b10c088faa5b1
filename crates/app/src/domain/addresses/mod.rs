//! Delivery addresses

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::AddressesServiceError;
pub use models::{Address, NewAddress};
pub use repository::{AddressesRepository, RestAddressesRepository};
pub use service::*;
