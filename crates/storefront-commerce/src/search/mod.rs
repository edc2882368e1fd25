//! Search module.
//!
//! Contains product selectors, the filter / sort pipeline, and facets.

mod filter;
mod results;
mod selector;

pub use filter::{QueryFilter, SortBy, SortOrder};
pub use results::Facets;
pub use selector::ProductSelector;
