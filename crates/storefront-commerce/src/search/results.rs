//! Facets derived from a product list.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Distinct categories and brands, for building filter controls.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Facets {
    /// Sorted distinct categories.
    pub categories: Vec<String>,
    /// Sorted distinct brands.
    pub brands: Vec<String>,
}

impl Facets {
    /// Collect facets from products. Empty strings are skipped.
    pub fn from_products(products: &[Product]) -> Self {
        let distinct = |field: fn(&Product) -> &str| -> Vec<String> {
            products
                .iter()
                .map(field)
                .filter(|value| !value.is_empty())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .map(str::to_string)
                .collect()
        };

        Self {
            categories: distinct(|p| p.category.as_str()),
            brands: distinct(|p| p.brand.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fallback_catalog;

    #[test]
    fn test_fallback_facets() {
        let facets = Facets::from_products(fallback_catalog());
        assert_eq!(facets.categories, vec!["Electronics", "Fashion", "Footwear"]);
        assert_eq!(facets.brands.len(), 10);
        assert!(facets.brands.contains(&"H&M".to_string()));
    }

    #[test]
    fn test_empty_facets() {
        assert_eq!(Facets::from_products(&[]), Facets::default());
    }
}
