//! Authentication for the storefront.
//!
//! Provides the users API client, session storage, and a transport wrapper
//! that signs requests with the stored bearer token.

mod api;
mod error;
mod session;
mod transport;
mod user;

pub use api::UserApi;
pub use error::AuthError;
pub use session::{AuthSession, MemorySessionStore, SessionStore};
pub use transport::AuthTransport;
pub use user::{AuthResponse, LoginRequest, RegisterRequest, Role, User};
