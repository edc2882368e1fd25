//! Order summary shown alongside the cart.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Sales tax applied to the subtotal, in percent.
pub const TAX_RATE_PERCENT: f64 = 8.0;

/// Price breakdown for a cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Total units in the cart.
    pub item_count: u64,
    /// Sum of line totals.
    pub subtotal: Money,
    /// Shipping cost. Shipping is always free.
    pub shipping: Money,
    /// Tax on the subtotal.
    pub tax: Money,
    /// Subtotal plus shipping plus tax.
    pub grand_total: Money,
}

impl CartSummary {
    /// Build a summary from the cart's count and subtotal.
    pub fn new(item_count: u64, subtotal: Money) -> Self {
        let shipping = Money::zero();
        let tax = subtotal.percentage(TAX_RATE_PERCENT);
        Self {
            item_count,
            subtotal,
            shipping,
            tax,
            grand_total: subtotal + shipping + tax,
        }
    }

    /// Whether shipping is free.
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}
