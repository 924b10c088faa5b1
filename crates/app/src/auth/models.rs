//! Auth data models.

use tavola::users::Role;
use uuid::Uuid;

/// The signed-in user, as carried by the current-session observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub uid: Uuid,
    pub email: String,
    pub role: Role,
}

impl Session {
    /// The dashboard route this session should land on after sign-in.
    #[must_use]
    pub fn dashboard_path(&self) -> &'static str {
        self.role.dashboard_path()
    }
}

/// Sign-up payload.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}
