//! Stock level classification.

use serde::{Deserialize, Serialize};

/// Quantity at or below which stock counts as low.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// How much of a product is left, as shown next to it in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// More than `LOW_STOCK_THRESHOLD` units.
    InStock(u32),
    /// Between 1 and `LOW_STOCK_THRESHOLD` units.
    LowStock(u32),
    /// Nothing left; the add-to-cart control should be disabled.
    OutOfStock,
}

impl StockStatus {
    /// Classify a stock quantity.
    pub fn from_quantity(quantity: u32) -> Self {
        match quantity {
            0 => StockStatus::OutOfStock,
            n if n <= LOW_STOCK_THRESHOLD => StockStatus::LowStock(n),
            n => StockStatus::InStock(n),
        }
    }

    /// Whether the product can be added to a cart.
    pub fn is_purchasable(&self) -> bool {
        !matches!(self, StockStatus::OutOfStock)
    }

    /// Label for listings (e.g. "15 in stock").
    pub fn label(&self) -> String {
        match self {
            StockStatus::InStock(n) | StockStatus::LowStock(n) => format!("{} in stock", n),
            StockStatus::OutOfStock => "Out of stock".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_thresholds() {
        assert_eq!(StockStatus::from_quantity(0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_quantity(1), StockStatus::LowStock(1));
        assert_eq!(StockStatus::from_quantity(10), StockStatus::LowStock(10));
        assert_eq!(StockStatus::from_quantity(11), StockStatus::InStock(11));
    }

    #[test]
    fn test_stock_label() {
        assert_eq!(StockStatus::from_quantity(15).label(), "15 in stock");
        assert_eq!(StockStatus::OutOfStock.label(), "Out of stock");
        assert!(!StockStatus::OutOfStock.is_purchasable());
    }
}
