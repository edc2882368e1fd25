//! Post-fetch filter and sort.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::money::Money;
use crate::search::ProductSelector;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Name, ignoring case.
    #[default]
    Name,
    /// Unit price.
    Price,
}

impl SortBy {
    /// Query-string form of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Name => "name",
            SortBy::Price => "price",
        }
    }
}

impl FromStr for SortBy {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortBy::Name),
            "price" => Ok(SortBy::Price),
            _ => Err(CommerceError::InvalidSortKey(s.to_string())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    /// Query-string form of the direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(CommerceError::InvalidSortOrder(s.to_string())),
        }
    }
}

/// Category, brand, price bounds and sort applied to a candidate list.
///
/// Every set criterion must hold (logical AND). Category and brand match
/// exactly, ignoring ASCII case; price bounds are inclusive. A filter that
/// admits nothing (including `min > max`) yields an empty list, not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QueryFilter {
    /// Required category.
    pub category: Option<String>,
    /// Required brand.
    pub brand: Option<String>,
    /// Lowest admitted price.
    pub min_price: Option<Money>,
    /// Highest admitted price.
    pub max_price: Option<Money>,
    /// Sort key.
    pub sort_by: SortBy,
    /// Sort direction.
    pub sort_order: SortOrder,
}

impl QueryFilter {
    /// Name ascending, nothing excluded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Require a brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Set the lower price bound.
    pub fn with_min_price(mut self, min: Money) -> Self {
        self.min_price = Some(min);
        self
    }

    /// Set the upper price bound.
    pub fn with_max_price(mut self, max: Money) -> Self {
        self.max_price = Some(max);
        self
    }

    /// Set both price bounds.
    pub fn with_price_range(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Set sort key and direction.
    pub fn with_sort(mut self, sort_by: SortBy, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }

    /// The narrowest server-side selector for this filter.
    ///
    /// The API filters by one field per request, so with both set the
    /// category is fetched and the brand is checked by [`apply`](Self::apply).
    pub fn source_selector(&self) -> ProductSelector {
        match (&self.category, &self.brand) {
            (Some(category), _) => ProductSelector::category(category.as_str()),
            (None, Some(brand)) => ProductSelector::brand(brand.as_str()),
            (None, None) => ProductSelector::All,
        }
    }

    /// Check a product against every criterion.
    pub fn admits(&self, product: &Product) -> bool {
        let field_matches = |wanted: &Option<String>, actual: &str| {
            wanted
                .as_deref()
                .map_or(true, |wanted| wanted.eq_ignore_ascii_case(actual))
        };

        field_matches(&self.category, &product.category)
            && field_matches(&self.brand, &product.brand)
            && self.min_price.map_or(true, |min| product.price >= min)
            && self.max_price.map_or(true, |max| product.price <= max)
    }

    /// Compare two products by sort key in the configured direction.
    ///
    /// Equal keys compare `Equal` in both directions, so a stable sort keeps
    /// their candidate order either way.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let ordering = match self.sort_by {
            SortBy::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortBy::Price => a.price.cmp(&b.price),
        };
        match self.sort_order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }

    /// Filter and sort candidates into a new list. The input is untouched.
    pub fn apply(&self, candidates: &[Product]) -> Vec<Product> {
        let mut products: Vec<Product> = candidates
            .iter()
            .filter(|p| self.admits(p))
            .cloned()
            .collect();
        // `sort_by` is stable
        products.sort_by(|a, b| self.compare(a, b));
        products
    }
}
