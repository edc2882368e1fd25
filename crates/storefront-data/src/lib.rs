//! HTTP data access for the storefront REST APIs.
//!
//! This crate provides:
//! - `FetchClient` - Base URL resolution, per-attempt timeouts, and retries
//! - `Transport` - The seam between the client and the wire
//! - `HttpTransport` - `reqwest`-backed transport
//! - `TimeoutConfig` / `RetryPolicy` - Fetch policy building blocks
//!
//! # Example
//!
//! ```rust,no_run
//! use storefront_data::{FetchClient, FetchPolicy};
//!
//! # async fn run() -> Result<(), storefront_data::FetchError> {
//! let client = FetchClient::http(FetchPolicy::default())?
//!     .with_base_url("http://localhost:8080/api")?;
//!
//! let url = client.endpoint(&["products", "category", "Footwear"])?;
//! let products: Vec<serde_json::Value> = client.get(url).send_json().await?;
//! # let _ = products;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod request;
mod response;
mod retry;
mod timeout;
mod transport;

pub use client::{ClientRequestBuilder, FetchClient, FetchPolicy};
pub use error::FetchError;
pub use request::{Method, Request, RequestBuilder};
pub use response::Response;
pub use retry::{Backoff, RetryPolicy};
pub use timeout::TimeoutConfig;
pub use transport::{HttpTransport, Transport};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, FetchPolicy, Method, Request, Response, Transport};
}
