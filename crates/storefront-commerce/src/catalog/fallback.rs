//! Embedded fallback catalog.
//!
//! Served only when the products API cannot be reached, so a listing page
//! shows sample products instead of an error.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;

static FALLBACK_CATALOG: LazyLock<Vec<Product>> = LazyLock::new(build_catalog);

/// The fixed sample products, in catalog order.
pub fn fallback_catalog() -> &'static [Product] {
    &FALLBACK_CATALOG
}

fn catalog_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: i64,
    name: &str,
    description: &str,
    cents: i64,
    stock: u32,
    category: &str,
    brand: &str,
    image: &str,
) -> Product {
    Product::new(ProductId::new(id), name, Money::from_cents(cents))
        .with_description(description)
        .with_stock(stock)
        .with_category(category)
        .with_brand(brand)
        .with_image_url(format!("https://images.unsplash.com/{}?auto=format&fit=crop&w=2070&q=80", image))
        .with_created_at(catalog_epoch())
}

fn build_catalog() -> Vec<Product> {
    vec![
        sample(
            1,
            "iPhone 15 Pro Max",
            "Latest iPhone with A17 Pro chip, 48MP camera, and titanium design",
            119999,
            15,
            "Electronics",
            "Apple",
            "photo-1592750475338-74b7b21085ab",
        ),
        sample(
            2,
            "Samsung Galaxy S24 Ultra",
            "Premium Android smartphone with S Pen and advanced AI features",
            129999,
            12,
            "Electronics",
            "Samsung",
            "photo-1610945265064-0e34e5519bbf",
        ),
        sample(
            3,
            "Nike Air Max 270",
            "Comfortable running shoes with Air Max technology",
            14999,
            25,
            "Footwear",
            "Nike",
            "photo-1542291026-7eec264c27ff",
        ),
        sample(
            4,
            "Adidas Ultraboost 22",
            "Premium running shoes with responsive cushioning",
            18999,
            18,
            "Footwear",
            "Adidas",
            "photo-1608231387042-66d1773070a5",
        ),
        sample(
            5,
            "MacBook Pro 16-inch",
            "Powerful laptop with M3 Pro chip for professionals",
            249999,
            8,
            "Electronics",
            "Apple",
            "photo-1517336714731-489689fd1ca8",
        ),
        sample(
            6,
            "Sony WH-1000XM5",
            "Premium noise-canceling wireless headphones",
            39999,
            20,
            "Electronics",
            "Sony",
            "photo-1505740420928-5e560c06d30e",
        ),
        sample(
            7,
            "Levi's 501 Original Jeans",
            "Classic straight-fit jeans in authentic denim",
            8999,
            30,
            "Fashion",
            "Levi's",
            "photo-1542272604-787c3835535d",
        ),
        sample(
            8,
            "Casio G-Shock Watch",
            "Durable digital watch with shock resistance",
            12999,
            22,
            "Electronics",
            "Casio",
            "photo-1524592094714-0f0654e20314",
        ),
        sample(
            9,
            "Converse Chuck Taylor All Star",
            "Classic canvas sneakers for everyday wear",
            6999,
            35,
            "Footwear",
            "Converse",
            "photo-1607522370275-f14206abe5d3",
        ),
        sample(
            10,
            "Nike Air Jordan 1",
            "Iconic basketball shoes with premium leather",
            17999,
            10,
            "Footwear",
            "Nike",
            "photo-1556906781-9a412961c28c",
        ),
        sample(
            11,
            "Zara Oversized Blazer",
            "Trendy oversized blazer for a modern look",
            12999,
            15,
            "Fashion",
            "Zara",
            "photo-1594633312681-425c7b97ccd1",
        ),
        sample(
            12,
            "H&M Cotton T-Shirt",
            "Comfortable cotton t-shirt in various colors",
            2499,
            50,
            "Fashion",
            "H&M",
            "photo-1521572163474-6864f9cf17ab",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fallback_catalog_shape() {
        let catalog = fallback_catalog();
        assert_eq!(catalog.len(), 12);

        let ids: HashSet<_> = catalog.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog.len(), "ids must be unique");

        assert!(catalog.iter().all(|p| p.active && p.is_in_stock()));
        assert!(catalog.iter().all(|p| p.created_at == catalog_epoch()));
    }

    #[test]
    fn test_fallback_catalog_is_shared() {
        assert!(std::ptr::eq(fallback_catalog(), fallback_catalog()));
    }
}
