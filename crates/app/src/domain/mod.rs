//! Domain services.

pub mod addresses;
pub mod orders;
pub mod restaurants;
