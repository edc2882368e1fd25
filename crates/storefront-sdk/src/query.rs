//! Product query service: remote fetch with offline fallback, then the
//! client-side price filter and sort.

use std::sync::Arc;

use storefront_commerce::catalog::{fallback_catalog, Product};
use storefront_commerce::search::{Facets, ProductSelector, QueryFilter};
use storefront_commerce::ProductId;
use tracing::{debug, warn};

use crate::products::ProductApi;

/// Result of a product query.
///
/// Transport failures never surface as errors; they turn the outcome
/// `Degraded` and the products come from the fallback catalog instead.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// Served by the products API.
    Fresh(Vec<Product>),
    /// Served from the fallback catalog.
    Degraded {
        products: Vec<Product>,
        /// Why the API could not be used. Diagnostic only.
        reason: String,
    },
}

impl QueryOutcome {
    /// The products, whichever source they came from.
    pub fn products(&self) -> &[Product] {
        match self {
            QueryOutcome::Fresh(products) => products,
            QueryOutcome::Degraded { products, .. } => products,
        }
    }

    /// Take the products.
    pub fn into_products(self) -> Vec<Product> {
        match self {
            QueryOutcome::Fresh(products) => products,
            QueryOutcome::Degraded { products, .. } => products,
        }
    }

    /// Whether the fallback catalog was used.
    pub fn is_degraded(&self) -> bool {
        matches!(self, QueryOutcome::Degraded { .. })
    }

    /// The failure that caused the fallback.
    pub fn reason(&self) -> Option<&str> {
        match self {
            QueryOutcome::Fresh(_) => None,
            QueryOutcome::Degraded { reason, .. } => Some(reason),
        }
    }

    /// Transform the products, keeping the source.
    pub fn map(self, f: impl FnOnce(Vec<Product>) -> Vec<Product>) -> Self {
        match self {
            QueryOutcome::Fresh(products) => QueryOutcome::Fresh(f(products)),
            QueryOutcome::Degraded { products, reason } => QueryOutcome::Degraded {
                products: f(products),
                reason,
            },
        }
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products().len()
    }

    /// Whether there are no products.
    pub fn is_empty(&self) -> bool {
        self.products().is_empty()
    }
}

/// Fetches products by selector and post-processes them with a filter.
#[derive(Debug, Clone)]
pub struct ProductQueryService {
    api: ProductApi,
    fallback: Arc<[Product]>,
}

impl ProductQueryService {
    /// Create a service that falls back to the embedded catalog.
    pub fn new(api: ProductApi) -> Self {
        Self::with_fallback(api, fallback_catalog())
    }

    /// Create a service with a custom fallback dataset.
    pub fn with_fallback(api: ProductApi, fallback: &[Product]) -> Self {
        Self {
            api,
            fallback: Arc::from(fallback),
        }
    }

    /// The fallback dataset.
    pub fn fallback(&self) -> &[Product] {
        &self.fallback
    }

    /// Fetch the candidates for a selector, unfiltered and in source order.
    pub async fn resolve(&self, selector: &ProductSelector) -> QueryOutcome {
        match self.api.fetch(selector).await {
            Ok(products) => {
                debug!(%selector, count = products.len(), "fetched products");
                QueryOutcome::Fresh(products)
            }
            Err(e) => {
                let products = selector.select(&self.fallback);
                warn!(
                    %selector,
                    error = %e,
                    count = products.len(),
                    "product API unavailable, serving fallback catalog"
                );
                QueryOutcome::Degraded {
                    products,
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Fetch by selector, then apply the price bounds and the stable sort.
    pub async fn query(&self, selector: &ProductSelector, filter: &QueryFilter) -> QueryOutcome {
        let outcome = self.resolve(selector).await.map(|products| filter.apply(&products));
        debug!(%selector, count = outcome.len(), degraded = outcome.is_degraded(), "query done");
        outcome
    }

    /// One product, from the API or the fallback catalog.
    pub async fn product(&self, id: ProductId) -> Option<Product> {
        self.resolve(&ProductSelector::ById(id))
            .await
            .into_products()
            .into_iter()
            .next()
    }

    /// The first `limit` available products, in source order.
    pub async fn featured(&self, limit: usize) -> QueryOutcome {
        self.resolve(&ProductSelector::Available)
            .await
            .map(|mut products| {
                products.truncate(limit);
                products
            })
    }

    /// Distinct categories and brands of a product list.
    pub fn facets(products: &[Product]) -> Facets {
        Facets::from_products(products)
    }
}
