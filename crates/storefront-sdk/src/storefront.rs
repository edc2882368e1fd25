//! The `Storefront` facade: one configured client stack.

use std::sync::Arc;

use storefront_auth::{AuthTransport, MemorySessionStore, SessionStore, UserApi};
use storefront_commerce::cart::CartStore;
use storefront_data::{FetchClient, HttpTransport, Transport};

use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::products::ProductApi;
use crate::query::{ProductQueryService, QueryOutcome};

/// Configured API clients sharing one transport and one session.
#[derive(Clone)]
pub struct Storefront {
    config: StorefrontConfig,
    session: Arc<dyn SessionStore>,
    products: ProductApi,
    users: UserApi,
    query: ProductQueryService,
}

impl Storefront {
    /// Build a storefront that talks HTTP.
    pub fn new(config: StorefrontConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config.fetch_policy().timeout)?;
        Self::with_transport(config, transport)
    }

    /// Build a storefront over any transport.
    pub fn with_transport(
        config: StorefrontConfig,
        transport: impl Transport + 'static,
    ) -> Result<Self> {
        config.validate()?;
        let session: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let client = FetchClient::new(AuthTransport::new(transport, session.clone()))
            .with_policy(config.fetch_policy())
            .with_base_url(&config.api.base_url)?;

        let products = ProductApi::new(client.clone());
        Ok(Self {
            query: ProductQueryService::new(products.clone()),
            users: UserApi::new(client, session.clone()),
            products,
            session,
            config,
        })
    }

    /// The effective configuration.
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// The session shared by every client.
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// Products API client.
    pub fn products(&self) -> &ProductApi {
        &self.products
    }

    /// Users API client.
    pub fn users(&self) -> &UserApi {
        &self.users
    }

    /// Product query service.
    pub fn query(&self) -> &ProductQueryService {
        &self.query
    }

    /// Featured products with the configured limit.
    pub async fn featured(&self) -> QueryOutcome {
        self.query.featured(self.config.catalog.featured_limit).await
    }

    /// A fresh, empty cart.
    pub fn new_cart(&self) -> CartStore {
        CartStore::new()
    }
}
