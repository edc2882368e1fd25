//! Shopping cart module.
//!
//! Contains the session cart store and its order summary.

mod store;
mod summary;

pub use store::{CartEntry, CartStore};
pub use summary::{CartSummary, TAX_RATE_PERCENT};
