//! Tavola
//!
//! Tavola is the client-side ordering core for a food-delivery application:
//! cart aggregation, checkout snapshots, and the fulfilment status pipeline.

pub mod cart;
pub mod menu;
pub mod orders;
pub mod prelude;
pub mod prices;
pub mod users;
