//! Session cart store.

use crate::cart::CartSummary;
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One product in the cart with how many units of it were added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartEntry {
    /// The product as it was when added.
    pub product: Product,
    /// Units of the product. Never zero.
    pub quantity: u32,
}

impl CartEntry {
    /// Price of this entry (unit price times quantity).
    pub fn line_total(&self) -> Money {
        self.product.price * i64::from(self.quantity)
    }
}

/// A shopping cart for the current session.
///
/// The store owns its entries and is the only thing that mutates them.
/// Item count and total are computed from the entries on every call, so
/// they always reflect the latest mutation.
///
/// Mutations never fail: removing or updating a product that is not in
/// the cart is a no-op.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartStore {
    entries: Vec<CartEntry>,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing entry, or appends a new entry with quantity 1.
    /// Stock is not checked here.
    pub fn add_to_cart(&mut self, product: &Product) {
        self.add_to_cart_with_quantity(product, 1);
    }

    /// Add `quantity` units of a product in one step.
    ///
    /// Same as calling [`add_to_cart`](Self::add_to_cart) `quantity` times.
    pub fn add_to_cart_with_quantity(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }

        if let Some(existing) = self.entries.iter_mut().find(|e| e.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            return;
        }

        self.entries.push(CartEntry {
            product: product.clone(),
            quantity,
        });
    }

    /// Remove a product's entry. No-op if absent.
    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        self.entries.retain(|e| e.product.id != product_id);
    }

    /// Set a product's quantity exactly.
    ///
    /// A quantity of zero or less removes the entry. No-op if the product is
    /// not in the cart.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(product_id);
            return;
        }

        if let Some(entry) = self.entries.iter_mut().find(|e| e.product.id == product_id) {
            entry.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.entries.clear();
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Get the entry for a product.
    pub fn entry(&self, product_id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.product.id == product_id)
    }

    /// Total units across all entries.
    pub fn item_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.entries.len()
    }

    /// Sum of price times quantity over all entries.
    pub fn total(&self) -> Money {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Order summary for checkout display.
    pub fn summary(&self) -> CartSummary {
        CartSummary::new(self.item_count(), self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, cents: i64) -> Product {
        Product::new(ProductId::new(id), format!("Product {}", id), Money::from_cents(cents))
            .with_stock(5)
    }

    #[test]
    fn test_add_same_product_twice() {
        let mut cart = CartStore::new();
        let p = product(1, 1000);

        cart.add_to_cart(&p);
        cart.add_to_cart(&p);

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.entries()[0].quantity, 2);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total(), Money::from_cents(2000));
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut cart = CartStore::new();
        cart.add_to_cart(&product(3, 100));
        cart.add_to_cart(&product(1, 100));
        cart.add_to_cart(&product(2, 100));
        cart.add_to_cart(&product(3, 100));

        let ids: Vec<i64> = cart.entries().iter().map(|e| e.product.id.get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_add_ignores_stock() {
        let mut cart = CartStore::new();
        let sold_out = product(1, 500).with_stock(0);

        cart.add_to_cart(&sold_out);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_add_with_quantity() {
        let mut cart = CartStore::new();
        let p = product(1, 250);

        cart.add_to_cart_with_quantity(&p, 3);
        cart.add_to_cart_with_quantity(&p, 0);
        cart.add_to_cart(&p);

        assert_eq!(cart.entry(p.id).map(|e| e.quantity), Some(4));
        assert_eq!(cart.total(), Money::from_cents(1000));
    }

    #[test]
    fn test_update_quantity_sets_exactly() {
        let mut cart = CartStore::new();
        let p = product(1, 1000);
        cart.add_to_cart(&p);
        cart.add_to_cart(&p);

        cart.update_quantity(p.id, 5);
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total(), Money::from_cents(5000));
    }

    #[test]
    fn test_update_quantity_to_zero_removes() {
        let mut cart = CartStore::new();
        let a = product(1, 1000);
        let b = product(2, 300);
        cart.add_to_cart(&a);
        cart.add_to_cart(&b);

        cart.update_quantity(a.id, 0);
        assert!(cart.entry(a.id).is_none());
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total(), Money::from_cents(300));

        cart.update_quantity(b.id, -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_absent_product_is_noop() {
        let mut cart = CartStore::new();
        cart.add_to_cart(&product(1, 1000));
        let before = cart.clone();

        cart.update_quantity(ProductId::new(99), 4);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_absent_product_is_noop() {
        let mut cart = CartStore::new();
        cart.add_to_cart(&product(1, 1000));
        let before = cart.clone();

        cart.remove_from_cart(ProductId::new(42));
        assert_eq!(cart, before);

        cart.remove_from_cart(ProductId::new(42));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear_cart() {
        let mut cart = CartStore::new();
        cart.add_to_cart(&product(1, 1000));
        cart.add_to_cart_with_quantity(&product(2, 2500), 3);

        cart.clear_cart();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_quantity_saturates() {
        let mut cart = CartStore::new();
        let p = product(1, 1);
        cart.add_to_cart_with_quantity(&p, u32::MAX);
        cart.add_to_cart(&p);
        assert_eq!(cart.entry(p.id).map(|e| e.quantity), Some(u32::MAX));

        cart.update_quantity(p.id, i64::MAX);
        assert_eq!(cart.entry(p.id).map(|e| e.quantity), Some(u32::MAX));
    }

    #[test]
    fn test_independent_instances() {
        let mut first = CartStore::new();
        let second = CartStore::new();
        first.add_to_cart(&product(1, 100));

        assert_eq!(first.item_count(), 1);
        assert!(second.is_empty());
    }
}
