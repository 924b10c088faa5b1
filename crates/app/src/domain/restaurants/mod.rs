//! Restaurants

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::RestaurantsServiceError;
pub use models::{SearchHit, SearchKind};
pub use repository::{RestRestaurantsRepository, RestaurantsRepository, SearchRow};
pub use service::*;

#[cfg(test)]
pub(crate) use repository::MockRestaurantsRepository;
