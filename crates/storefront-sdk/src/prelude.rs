//! Prelude for convenient imports.
//!
//! ```rust
//! use storefront_sdk::prelude::*;
//! ```

// Domain
pub use storefront_commerce::prelude::*;

// Transport
pub use storefront_data::{FetchClient, FetchError, FetchPolicy, Transport};

// Auth
pub use storefront_auth::{AuthError, AuthSession, LoginRequest, Role, SessionStore, User, UserApi};

// SDK
pub use crate::{
    ProductApi, ProductQueryService, ProductRequest, QueryOutcome, Storefront, StorefrontConfig,
    StorefrontError,
};
