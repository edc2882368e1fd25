//! Session management.

use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::user::{AuthResponse, User};

/// A signed-in session: the bearer token and the user it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Bearer token.
    pub token: String,
    /// The signed-in user.
    pub user: User,
}

impl AuthSession {
    /// Create a new session.
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl From<AuthResponse> for AuthSession {
    fn from(response: AuthResponse) -> Self {
        Self::new(response.token, response.user)
    }
}

/// Where the current session lives.
///
/// Shared between the auth transport and the users API, so implementations
/// use interior mutability.
pub trait SessionStore: Send + Sync {
    /// The stored bearer token.
    fn token(&self) -> Option<String>;

    /// The stored user.
    fn user(&self) -> Option<User>;

    /// Replace the stored session.
    fn set(&self, session: AuthSession);

    /// Forget the stored session.
    fn clear(&self);

    /// Whether a token is stored.
    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

/// In-memory session store.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: RwLock<Option<AuthSession>>,
}

impl MemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that starts signed in.
    pub fn with_session(session: AuthSession) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }

    fn snapshot(&self) -> Option<AuthSession> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.snapshot().map(|s| s.token)
    }

    fn user(&self) -> Option<User> {
        self.snapshot().map(|s| s.user)
    }

    fn set(&self, session: AuthSession) {
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = Some(session);
    }

    fn clear(&self) {
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::UserId;

    fn sample_user() -> User {
        serde_json::from_value(serde_json::json!({
            "id": 7, "username": "jdoe", "email": "jdoe@example.com"
        }))
        .unwrap()
    }

    #[test]
    fn test_memory_store_lifecycle() {
        let store = MemorySessionStore::new();
        assert!(!store.is_authenticated());

        store.set(AuthSession::new("tok-1", sample_user()));
        assert_eq!(store.token().as_deref(), Some("tok-1"));
        assert_eq!(store.user().map(|u| u.id), Some(UserId::new(7)));

        store.clear();
        assert!(store.token().is_none());
        assert!(store.user().is_none());
    }

    #[test]
    fn test_bearer_value() {
        let session = AuthSession::new("abc", sample_user());
        assert_eq!(session.bearer(), "Bearer abc");
    }
}
