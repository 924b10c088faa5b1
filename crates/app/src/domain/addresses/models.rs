//! Address models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Address {
    pub id: Uuid,
    pub label: String,
    pub address: String,
    pub is_default: bool,
}

/// New address payload.
#[derive(Debug, Clone, Serialize)]
pub struct NewAddress {
    pub label: String,
    pub address: String,
    pub is_default: bool,
}
