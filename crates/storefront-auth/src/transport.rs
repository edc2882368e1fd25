//! Transport wrapper that carries the session's bearer token.

use std::sync::Arc;

use async_trait::async_trait;
use storefront_data::{FetchError, Request, Response, Transport};
use tracing::info;

use crate::session::SessionStore;

/// Wraps a [`Transport`], attaching `Authorization: Bearer <token>` while a
/// session is stored and clearing the session on any 401 response.
///
/// The 401 response itself is passed through unchanged.
pub struct AuthTransport<T> {
    inner: T,
    session: Arc<dyn SessionStore>,
}

impl<T: Transport> AuthTransport<T> {
    /// Wrap a transport.
    pub fn new(inner: T, session: Arc<dyn SessionStore>) -> Self {
        Self { inner, session }
    }

    /// The session store this transport reads from.
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }
}

#[async_trait]
impl<T: Transport> Transport for AuthTransport<T> {
    async fn send(&self, mut request: Request) -> Result<Response, FetchError> {
        if request.header("Authorization").is_none() {
            if let Some(token) = self.session.token() {
                request
                    .headers
                    .insert("Authorization".to_string(), format!("Bearer {}", token));
            }
        }

        let url = request.url.clone();
        let response = self.inner.send(request).await?;
        if response.status == 401 && self.session.is_authenticated() {
            info!(%url, "session rejected by server, signing out");
            self.session.clear();
        }
        Ok(response)
    }
}
