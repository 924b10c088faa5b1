//! Auth service errors.

use tavola::users::UnknownRoleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Rejected locally before any network call.
    #[error("password must be at least {MIN_PASSWORD_LEN} characters")]
    WeakPassword,

    /// Bad credentials. Deliberately generic; the gateway's detail is not
    /// surfaced to the user.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The account carries a role outside the enumerated set.
    #[error(transparent)]
    UnknownRole(#[from] UnknownRoleError),

    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway returned a non-2xx response or unexpected body.
    #[error("unexpected response from auth gateway: {0}")]
    UnexpectedResponse(String),
}

/// Minimum accepted password length at sign-up.
pub const MIN_PASSWORD_LEN: usize = 8;
