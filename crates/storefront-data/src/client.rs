//! Fetch client with base URL resolution, timeouts, and retries.

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::request::{Method, RequestBuilder};
use crate::response::Response;
use crate::retry::RetryPolicy;
use crate::timeout::TimeoutConfig;
use crate::transport::{HttpTransport, Transport};
use crate::FetchError;

/// Fetch policy combining timeout and retry configuration.
#[derive(Debug, Clone, Default)]
pub struct FetchPolicy {
    /// Timeout configuration.
    pub timeout: TimeoutConfig,
    /// Retry policy.
    pub retry: RetryPolicy,
}

impl FetchPolicy {
    /// Create a new fetch policy.
    pub fn new(timeout: TimeoutConfig, retry: RetryPolicy) -> Self {
        Self { timeout, retry }
    }
}

/// HTTP client for the storefront REST APIs.
///
/// Cheap to clone; clones share the same transport.
#[derive(Clone)]
pub struct FetchClient {
    base_url: Option<Url>,
    default_headers: HashMap<String, String>,
    policy: FetchPolicy,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchClient")
            .field("base_url", &self.base_url.as_ref().map(Url::as_str))
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl FetchClient {
    /// Create a client over an arbitrary transport.
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            base_url: None,
            default_headers: HashMap::new(),
            policy: FetchPolicy::default(),
            transport: Arc::new(transport),
        }
    }

    /// Create a client that talks HTTP through `reqwest`.
    pub fn http(policy: FetchPolicy) -> Result<Self, FetchError> {
        let transport = HttpTransport::new(&policy.timeout)?;
        Ok(Self::new(transport).with_policy(policy))
    }

    /// Set the base URL that relative paths and endpoints resolve against.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, FetchError> {
        let url = Url::parse(base_url.trim())
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(base_url.to_string()));
        }
        self.base_url = Some(url);
        Ok(self)
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Replace the timeout and retry policy.
    pub fn with_policy(mut self, policy: FetchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The configured base URL.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_ref().map(Url::as_str)
    }

    /// The active policy.
    pub fn policy(&self) -> &FetchPolicy {
        &self.policy
    }

    /// Build an absolute URL from path segments under the base URL.
    ///
    /// Each segment is percent-encoded, so `"Home Office"` becomes
    /// `Home%20Office` and a `/` inside a segment cannot add a path level.
    pub fn endpoint(&self, segments: &[&str]) -> Result<String, FetchError> {
        let base = self
            .base_url
            .as_ref()
            .ok_or_else(|| FetchError::InvalidUrl("no base URL configured".to_string()))?;
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url.to_string())
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder<'_> {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder<'_> {
        self.request(Method::Post, url)
    }

    /// Create a PUT request.
    pub fn put(&self, url: impl Into<String>) -> ClientRequestBuilder<'_> {
        self.request(Method::Put, url)
    }

    /// Create a DELETE request.
    pub fn delete(&self, url: impl Into<String>) -> ClientRequestBuilder<'_> {
        self.request(Method::Delete, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder<'_> {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) if !url.starts_with("http://") && !url.starts_with("https://") => {
                format!(
                    "{}/{}",
                    base.as_str().trim_end_matches('/'),
                    url.trim_start_matches('/')
                )
            }
            _ => url,
        };

        let mut builder = RequestBuilder::new(method, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder {
            client: self,
            method,
            builder,
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder<'a> {
    client: &'a FetchClient,
    method: Method,
    builder: RequestBuilder,
}

impl ClientRequestBuilder<'_> {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Add a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.builder = self.builder.query(key, value);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(mut self, token: impl AsRef<str>) -> Self {
        self.builder = self.builder.bearer_auth(token);
        self
    }

    /// Send the request and return the raw response.
    ///
    /// Each attempt is bounded by the policy's total timeout. Failed GETs
    /// are retried per the retry policy; writes are sent once.
    pub async fn send(self) -> Result<Response, FetchError> {
        let policy = &self.client.policy;
        let request = self.builder.accept("application/json").build();
        let mut attempt = 0;

        loop {
            let outcome = match tokio::time::timeout(
                policy.timeout.total,
                self.client.transport.send(request.clone()),
            )
            .await
            {
                Ok(result) => result,
                Err(_) => Err(FetchError::Timeout(policy.timeout.total)),
            };

            let retry = self.method.is_safe()
                && match &outcome {
                    Ok(response) => policy.retry.should_retry_status(response.status, attempt),
                    Err(e) => policy.retry.should_retry_error(e, attempt),
                };
            if !retry {
                return outcome;
            }

            let delay = policy.retry.backoff.delay(attempt);
            debug!(
                method = request.method.as_str(),
                url = %request.url,
                attempt = attempt + 1,
                ?delay,
                "retrying request"
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    /// Send the request and decode a 2xx JSON body.
    pub async fn send_json<T: DeserializeOwned>(self) -> Result<T, FetchError> {
        self.send().await?.error_for_status()?.json()
    }

    /// Send the request and require a 2xx status, ignoring the body.
    pub async fn send_empty(self) -> Result<(), FetchError> {
        self.send().await?.error_for_status()?;
        Ok(())
    }
}
