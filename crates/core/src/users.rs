//! Users and roles

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The role attached to an account, used to pick the dashboard a user lands
/// on after sign-in.
///
/// Roles are a closed set; a role string outside it is a parse error rather
/// than falling through to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Restaurant,
    Rider,
    Admin,
}

/// A role string outside the enumerated set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRoleError(pub String);

impl Role {
    /// The dashboard route for this role.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::Customer => "/home",
            Role::Restaurant => "/dashboard/restaurant",
            Role::Rider => "/dashboard/rider",
            Role::Admin => "/dashboard/admin",
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Restaurant => "restaurant",
            Role::Rider => "rider",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Role::Customer),
            "restaurant" => Ok(Role::Restaurant),
            "rider" => Ok(Role::Rider),
            "admin" => Ok(Role::Admin),
            other => Err(UnknownRoleError(other.to_string())),
        }
    }
}
