//! Product catalog module.
//!
//! Contains the product type, stock classification, and the fallback catalog.

mod fallback;
mod inventory;
mod product;

pub use fallback::fallback_catalog;
pub use inventory::{StockStatus, LOW_STOCK_THRESHOLD};
pub use product::Product;
