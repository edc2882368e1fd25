//! Authentication errors.

use storefront_data::FetchError;
use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No session token is stored.
    #[error("not signed in")]
    NotAuthenticated,

    /// The users service refused the credentials or registration.
    #[error("rejected: {0}")]
    Rejected(String),

    /// Transport or HTTP failure.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl AuthError {
    /// Check if this is an authentication failure.
    pub fn is_auth_failure(&self) -> bool {
        match self {
            AuthError::NotAuthenticated | AuthError::Rejected(_) => true,
            AuthError::Fetch(e) => e.is_unauthorized(),
        }
    }
}
