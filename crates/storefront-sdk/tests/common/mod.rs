//! Shared test helpers: a scripted in-memory transport.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use storefront_sdk::prelude::*;
use storefront_sdk::storefront_data::{Method, Request, Response};

pub const BASE_URL: &str = "http://localhost:8080";

/// Canned replies keyed by method and path.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<(String, String), (u16, Vec<u8>)>>,
    offline: bool,
    seen: Mutex<Vec<Request>>,
}

impl MockTransport {
    /// A transport where every route answers 404 until scripted.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A transport that cannot connect.
    pub fn offline() -> Arc<Self> {
        Arc::new(Self {
            offline: true,
            ..Self::default()
        })
    }

    /// Script a JSON reply.
    pub fn route(&self, method: Method, path: &str, status: u16, body: serde_json::Value) {
        self.route_raw(method, path, status, serde_json::to_vec(&body).unwrap());
    }

    /// Script a raw reply.
    pub fn route_raw(&self, method: Method, path: &str, status: u16, body: Vec<u8>) {
        self.routes
            .lock()
            .unwrap()
            .insert((method.as_str().to_string(), path.to_string()), (status, body));
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<Request> {
        self.seen.lock().unwrap().clone()
    }

    /// The most recent request.
    pub fn last(&self) -> Request {
        self.seen.lock().unwrap().last().cloned().expect("no request sent")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: Request) -> Result<Response, FetchError> {
        self.seen.lock().unwrap().push(request.clone());
        if self.offline {
            return Err(FetchError::Connection("connection refused".to_string()));
        }

        let path = request
            .url
            .strip_prefix(BASE_URL)
            .unwrap_or(&request.url)
            .to_string();
        let key = (request.method.as_str().to_string(), path);
        let (status, body) = self
            .routes
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or((404, b"Not Found".to_vec()));
        Ok(Response::new(status, HashMap::new(), body))
    }
}

/// A storefront over the mock transport, with retries off.
pub fn storefront(transport: Arc<MockTransport>) -> Storefront {
    let mut config = StorefrontConfig::default();
    config.api.base_url = BASE_URL.to_string();
    config.http.max_retries = 0;
    Storefront::with_transport(config, transport).unwrap()
}

pub fn product(id: i64, name: &str, price: f64) -> Product {
    Product::new(ProductId::new(id), name, Money::from_decimal(price)).with_stock(5)
}

pub fn json(products: &[Product]) -> serde_json::Value {
    serde_json::to_value(products).unwrap()
}

pub fn ids(products: &[Product]) -> Vec<i64> {
    products.iter().map(|p| p.id.get()).collect()
}
