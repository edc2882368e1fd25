//! Product selectors.

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which subset of the catalog to fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductSelector {
    /// Every listed product.
    #[default]
    All,
    /// Listed products with stock.
    Available,
    /// Products in a category.
    Category(String),
    /// Products of a brand.
    Brand(String),
    /// Products matching a free-text keyword.
    Keyword(String),
    /// A single product.
    ById(ProductId),
}

impl ProductSelector {
    /// Select by category.
    pub fn category(category: impl Into<String>) -> Self {
        ProductSelector::Category(category.into())
    }

    /// Select by brand.
    pub fn brand(brand: impl Into<String>) -> Self {
        ProductSelector::Brand(brand.into())
    }

    /// Select by keyword.
    pub fn keyword(keyword: impl Into<String>) -> Self {
        ProductSelector::Keyword(keyword.into())
    }

    /// Local approximation of the backend's selection, used on the fallback
    /// catalog.
    ///
    /// Category and brand compare ignoring ASCII case. Keyword search looks at
    /// name, description and brand. Unlisted products only match `ById`.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ProductSelector::All => product.active,
            ProductSelector::Available => product.is_available(),
            ProductSelector::Category(category) => {
                product.active && product.category.eq_ignore_ascii_case(category)
            }
            ProductSelector::Brand(brand) => {
                product.active && product.brand.eq_ignore_ascii_case(brand)
            }
            ProductSelector::Keyword(keyword) => product.active && product.matches_keyword(keyword),
            ProductSelector::ById(id) => product.id == *id,
        }
    }

    /// Clone the matching products, keeping their order.
    pub fn select(&self, products: &[Product]) -> Vec<Product> {
        products.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}

impl fmt::Display for ProductSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductSelector::All => write!(f, "all"),
            ProductSelector::Available => write!(f, "available"),
            ProductSelector::Category(c) => write!(f, "category:{}", c),
            ProductSelector::Brand(b) => write!(f, "brand:{}", b),
            ProductSelector::Keyword(k) => write!(f, "keyword:{}", k),
            ProductSelector::ById(id) => write!(f, "id:{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fallback_catalog;
    use crate::money::Money;

    fn ids(products: &[Product]) -> Vec<i64> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_select_category_ignores_case() {
        let footwear = ProductSelector::category("footwear").select(fallback_catalog());
        assert_eq!(ids(&footwear), vec![3, 4, 9, 10]);
    }

    #[test]
    fn test_select_brand() {
        let apple = ProductSelector::brand("Apple").select(fallback_catalog());
        assert_eq!(ids(&apple), vec![1, 5]);

        let nobody = ProductSelector::brand("Acme").select(fallback_catalog());
        assert!(nobody.is_empty());
    }

    #[test]
    fn test_select_keyword() {
        let running = ProductSelector::keyword("running").select(fallback_catalog());
        assert_eq!(ids(&running), vec![3, 4]);

        let nike = ProductSelector::keyword("NIKE").select(fallback_catalog());
        assert_eq!(ids(&nike), vec![3, 10]);
    }

    #[test]
    fn test_select_by_id() {
        let one = ProductSelector::ById(ProductId::new(7)).select(fallback_catalog());
        assert_eq!(ids(&one), vec![7]);

        let none = ProductSelector::ById(ProductId::new(700)).select(fallback_catalog());
        assert!(none.is_empty());
    }

    #[test]
    fn test_available_and_all_skip_unlisted() {
        let products = vec![
            Product::new(ProductId::new(1), "Listed", Money::from_cents(100)).with_stock(1),
            Product::new(ProductId::new(2), "Sold out", Money::from_cents(100)),
            Product::new(ProductId::new(3), "Hidden", Money::from_cents(100))
                .with_stock(4)
                .inactive(),
        ];

        assert_eq!(ids(&ProductSelector::All.select(&products)), vec![1, 2]);
        assert_eq!(ids(&ProductSelector::Available.select(&products)), vec![1]);
        assert_eq!(ids(&ProductSelector::ById(ProductId::new(3)).select(&products)), vec![3]);
    }

    #[test]
    fn test_selector_display() {
        assert_eq!(ProductSelector::category("Fashion").to_string(), "category:Fashion");
        assert_eq!(ProductSelector::ById(ProductId::new(4)).to_string(), "id:4");
    }
}
