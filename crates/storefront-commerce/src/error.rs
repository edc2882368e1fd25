//! Commerce error types.

use thiserror::Error;

/// Errors raised while interpreting storefront input.
///
/// Cart mutations and query post-processing are total, so this only covers
/// parsing user-supplied filter vocabulary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Unknown sort key.
    #[error("Invalid sort key: {0} (expected 'name' or 'price')")]
    InvalidSortKey(String),

    /// Unknown sort direction.
    #[error("Invalid sort order: {0} (expected 'asc' or 'desc')")]
    InvalidSortOrder(String),

    /// Price could not be parsed.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Numeric id could not be parsed.
    #[error("Invalid id: {0}")]
    InvalidId(String),
}
