//! # Storefront SDK
//!
//! Client-side storefront core over the products and users REST APIs.
//!
//! - [`ProductQueryService`] fetches by selector, falls back to the embedded
//!   catalog when the API is unreachable, then filters by price and sorts.
//! - [`ProductApi`] and [`UserApi`](storefront_auth::UserApi) wrap every
//!   endpoint and propagate errors.
//! - [`StorefrontConfig`] loads `storefront.toml` with env overrides.
//! - [`Storefront`] wires a transport, a session, and the clients together.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use storefront_sdk::prelude::*;
//!
//! # async fn run() -> storefront_sdk::Result<()> {
//! let storefront = Storefront::new(StorefrontConfig::default())?;
//!
//! let filter = QueryFilter::new()
//!     .with_max_price(Money::from_decimal(200.0))
//!     .with_sort(SortBy::Price, SortOrder::Descending);
//! let outcome = storefront
//!     .query()
//!     .query(&ProductSelector::category("Footwear"), &filter)
//!     .await;
//!
//! let mut cart = storefront.new_cart();
//! if let Some(product) = outcome.products().first() {
//!     cart.add_to_cart(product);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod products;
pub mod query;
pub mod storefront;

pub use config::StorefrontConfig;
pub use error::{Result, StorefrontError};
pub use products::{ProductApi, ProductRequest};
pub use query::{ProductQueryService, QueryOutcome};
pub use storefront::Storefront;

// Re-export the building blocks
pub use storefront_auth;
pub use storefront_commerce;
pub use storefront_data;
