//! Orders

pub mod errors;
pub mod records;
mod repository;
pub mod service;
pub mod tracking;

pub use errors::OrdersServiceError;
pub use repository::{OrdersRepository, RestOrdersRepository};
pub use service::*;
pub use tracking::{OrderTracker, OrderWatch};

#[cfg(test)]
pub(crate) use repository::MockOrdersRepository;
