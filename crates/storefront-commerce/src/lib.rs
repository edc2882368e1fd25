//! Storefront domain types and logic.
//!
//! This crate holds everything the storefront does without touching the
//! network:
//!
//! - **Catalog**: products, stock status, and the embedded fallback catalog
//! - **Cart**: the session cart store and its order summary
//! - **Search**: product selectors and the price filter / sort pipeline
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let headphones = Product::new(ProductId::new(6), "Sony WH-1000XM5", Money::from_decimal(399.99));
//!
//! let mut cart = CartStore::new();
//! cart.add_to_cart(&headphones);
//! cart.add_to_cart(&headphones);
//!
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.total().display(), "$799.98");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{CartEntry, CartStore, CartSummary};
    pub use crate::catalog::{fallback_catalog, Product, StockStatus};
    pub use crate::error::CommerceError;
    pub use crate::ids::{ProductId, UserId};
    pub use crate::money::Money;
    pub use crate::search::{Facets, ProductSelector, QueryFilter, SortBy, SortOrder};
}
