//! Product type as served by the products API.

use crate::catalog::StockStatus;
use crate::ids::ProductId;
use crate::money::Money;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// This is a read-through projection of backend state: the storefront never
/// mutates a product, it only fetches, filters and sorts them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    #[serde(default)]
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Units in stock. Only the backend changes this.
    #[serde(default)]
    pub stock_quantity: u32,
    /// Category name (e.g. "Electronics").
    #[serde(default)]
    pub category: String,
    /// Brand name (e.g. "Apple").
    #[serde(default)]
    pub brand: String,
    /// Image URL.
    #[serde(default)]
    pub image_url: String,
    /// When the product was created.
    pub created_at: NaiveDateTime,
    /// When the product was last updated.
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
    /// Whether the product is listed.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Product {
    /// Create an active product with no stock, category or brand.
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            price,
            stock_quantity: 0,
            category: String::new(),
            brand: String::new(),
            image_url: String::new(),
            created_at: Utc::now().naive_utc(),
            updated_at: None,
            active: true,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Set the stock quantity.
    pub fn with_stock(mut self, quantity: u32) -> Self {
        self.stock_quantity = quantity;
        self
    }

    /// Set the image URL.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    /// Set the creation timestamp.
    pub fn with_created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = created_at;
        self
    }

    /// Mark the product as unlisted.
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Check if the product has any units in stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock_quantity > 0
    }

    /// Check if the product is listed and can be bought right now.
    pub fn is_available(&self) -> bool {
        self.active && self.is_in_stock()
    }

    /// Classify the stock level for display.
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::from_quantity(self.stock_quantity)
    }

    /// Case-insensitive substring match against name, description and brand.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let needle = keyword.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&self.name, &self.description, &self.brand]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_from_backend_json() {
        let json = r#"{
            "id": 3,
            "name": "Nike Air Max 270",
            "description": "Comfortable running shoes",
            "price": 129.99,
            "stockQuantity": 100,
            "category": "Footwear",
            "brand": "Nike",
            "imageUrl": "https://example.com/nikeairmax.jpg",
            "createdAt": "2024-01-15T10:30:00",
            "updatedAt": null,
            "active": true
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.price.cents(), 12999);
        assert_eq!(product.stock_quantity, 100);
        assert_eq!(product.image_url, "https://example.com/nikeairmax.jpg");
        assert!(product.updated_at.is_none());
        assert!(product.is_available());
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let product = Product::new(ProductId::new(1), "Widget", Money::from_cents(500)).with_stock(2);
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["stockQuantity"], 2);
        assert_eq!(value["price"], 5.0);
        assert!(value.get("imageUrl").is_some());
    }

    #[test]
    fn test_availability() {
        let product = Product::new(ProductId::new(1), "Widget", Money::from_cents(500));
        assert!(!product.is_available());

        let stocked = product.clone().with_stock(3);
        assert!(stocked.is_available());
        assert!(!stocked.inactive().is_available());
    }

    #[test]
    fn test_keyword_match() {
        let product = Product::new(ProductId::new(6), "Sony WH-1000XM5", Money::from_cents(39999))
            .with_description("Premium noise-canceling wireless headphones")
            .with_brand("Sony");

        assert!(product.matches_keyword("sony"));
        assert!(product.matches_keyword("NOISE"));
        assert!(product.matches_keyword("  "));
        assert!(!product.matches_keyword("laptop"));
    }
}
