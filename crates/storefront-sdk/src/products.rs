//! Typed client for the products REST API.

use serde::{Deserialize, Serialize};
use storefront_commerce::catalog::Product;
use storefront_commerce::search::ProductSelector;
use storefront_commerce::{Money, ProductId};
use storefront_data::{FetchClient, FetchError};

/// Create/update payload for admin product mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: String,
    pub description: String,
    pub price: Money,
    pub stock_quantity: u32,
    pub category: String,
    pub brand: String,
    pub image_url: String,
}

impl ProductRequest {
    /// Start a request with the required fields.
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price,
            stock_quantity: 0,
            category: String::new(),
            brand: String::new(),
            image_url: String::new(),
        }
    }
}

impl From<&Product> for ProductRequest {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            stock_quantity: product.stock_quantity,
            category: product.category.clone(),
            brand: product.brand.clone(),
            image_url: product.image_url.clone(),
        }
    }
}

/// Client for `/api/products`. Every call propagates failures.
#[derive(Debug, Clone)]
pub struct ProductApi {
    client: FetchClient,
}

impl ProductApi {
    /// Create a products API client.
    pub fn new(client: FetchClient) -> Self {
        Self { client }
    }

    fn url(&self, segments: &[&str]) -> Result<String, FetchError> {
        let mut path = vec!["api", "products"];
        path.extend_from_slice(segments);
        self.client.endpoint(&path)
    }

    /// Fetch the products a selector names.
    pub async fn fetch(&self, selector: &ProductSelector) -> Result<Vec<Product>, FetchError> {
        match selector {
            ProductSelector::All => self.all().await,
            ProductSelector::Available => self.available().await,
            ProductSelector::Category(category) => self.by_category(category).await,
            ProductSelector::Brand(brand) => self.by_brand(brand).await,
            ProductSelector::Keyword(keyword) => self.search(keyword).await,
            ProductSelector::ById(id) => Ok(vec![self.get(*id).await?]),
        }
    }

    /// All listed products.
    pub async fn all(&self) -> Result<Vec<Product>, FetchError> {
        self.client.get(self.url(&[])?).send_json().await
    }

    /// One product.
    pub async fn get(&self, id: ProductId) -> Result<Product, FetchError> {
        self.client
            .get(self.url(&[id.to_string().as_str()])?)
            .send_json()
            .await
    }

    /// Products in a category.
    pub async fn by_category(&self, category: &str) -> Result<Vec<Product>, FetchError> {
        self.client
            .get(self.url(&["category", category])?)
            .send_json()
            .await
    }

    /// Products of a brand.
    pub async fn by_brand(&self, brand: &str) -> Result<Vec<Product>, FetchError> {
        self.client
            .get(self.url(&["brand", brand])?)
            .send_json()
            .await
    }

    /// Keyword search.
    pub async fn search(&self, keyword: &str) -> Result<Vec<Product>, FetchError> {
        self.client
            .get(self.url(&["search"])?)
            .query("keyword", keyword)
            .send_json()
            .await
    }

    /// Listed products with stock.
    pub async fn available(&self) -> Result<Vec<Product>, FetchError> {
        self.client.get(self.url(&["available"])?).send_json().await
    }

    /// Products whose stock is below `threshold`.
    pub async fn low_stock(&self, threshold: u32) -> Result<Vec<Product>, FetchError> {
        self.client
            .get(self.url(&["low-stock"])?)
            .query("threshold", threshold)
            .send_json()
            .await
    }

    /// Create a product.
    pub async fn create(&self, request: &ProductRequest) -> Result<Product, FetchError> {
        self.client
            .post(self.url(&[])?)
            .json(request)?
            .send_json()
            .await
    }

    /// Replace a product's fields.
    pub async fn update(
        &self,
        id: ProductId,
        request: &ProductRequest,
    ) -> Result<Product, FetchError> {
        self.client
            .put(self.url(&[id.to_string().as_str()])?)
            .json(request)?
            .send_json()
            .await
    }

    /// Unlist a product.
    pub async fn delete(&self, id: ProductId) -> Result<(), FetchError> {
        self.client
            .delete(self.url(&[id.to_string().as_str()])?)
            .send_empty()
            .await
    }

    /// Take `quantity` units out of stock. `false` when stock is short and
    /// nothing changed.
    pub async fn update_stock(&self, id: ProductId, quantity: u32) -> Result<bool, FetchError> {
        self.client
            .put(self.url(&[id.to_string().as_str(), "stock"])?)
            .query("quantity", quantity)
            .send_json()
            .await
    }

    /// Whether at least `quantity` units are in stock.
    pub async fn check_stock(&self, id: ProductId, quantity: u32) -> Result<bool, FetchError> {
        self.client
            .get(self.url(&[id.to_string().as_str(), "stock", "check"])?)
            .query("quantity", quantity)
            .send_json()
            .await
    }
}
