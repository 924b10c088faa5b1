//! Tavola application services: authentication, store access, the order
//! submission flow, and order tracking.

pub mod auth;
pub mod config;
pub mod context;
pub mod domain;
pub mod logging;
pub mod store;

#[cfg(test)]
mod test;
