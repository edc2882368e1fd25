//! Typed client for the users REST API.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use storefront_commerce::UserId;
use storefront_data::FetchClient;
use tracing::debug;

use crate::session::{AuthSession, SessionStore};
use crate::user::{AuthResponse, LoginRequest, RegisterRequest, Role, User};
use crate::AuthError;

/// Error body the users service sends with a 400 on register/login.
#[derive(Deserialize)]
struct Rejection {
    #[serde(default)]
    message: Option<String>,
}

/// Client for `/api/users`.
///
/// `register` and `login` store the issued session; every other call relies
/// on the client's transport to attach the token.
#[derive(Clone)]
pub struct UserApi {
    client: FetchClient,
    session: Arc<dyn SessionStore>,
}

impl UserApi {
    /// Create a users API client.
    pub fn new(client: FetchClient, session: Arc<dyn SessionStore>) -> Self {
        Self { client, session }
    }

    /// The session store this client writes to.
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    fn url(&self, segments: &[&str]) -> Result<String, AuthError> {
        let mut path = vec!["api", "users"];
        path.extend_from_slice(segments);
        Ok(self.client.endpoint(&path)?)
    }

    /// Create an account and sign in as it.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthSession, AuthError> {
        self.authenticate("register", request).await
    }

    /// Sign in.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthSession, AuthError> {
        self.authenticate("login", request).await
    }

    /// Forget the local session. The server keeps no logout state.
    pub fn logout(&self) {
        self.session.clear();
    }

    async fn authenticate<B: Serialize>(
        &self,
        action: &str,
        body: &B,
    ) -> Result<AuthSession, AuthError> {
        let response = self
            .client
            .post(self.url(&[action])?)
            .json(body)?
            .send()
            .await?;

        if response.status == 400 {
            let message = response
                .json::<Rejection>()
                .ok()
                .and_then(|r| r.message)
                .unwrap_or_else(|| format!("{} failed", action));
            return Err(AuthError::Rejected(message));
        }

        let auth: AuthResponse = response.error_for_status()?.json()?;
        let session = AuthSession::from(auth);
        debug!(user = %session.user.username, action, "session stored");
        self.session.set(session.clone());
        Ok(session)
    }

    /// The signed-in user, as the server sees it.
    pub async fn current(&self) -> Result<User, AuthError> {
        if !self.session.is_authenticated() {
            return Err(AuthError::NotAuthenticated);
        }
        Ok(self.client.get(self.url(&["current"])?).send_json().await?)
    }

    /// Get a user by id.
    pub async fn get(&self, id: UserId) -> Result<User, AuthError> {
        Ok(self
            .client
            .get(self.url(&[id.to_string().as_str()])?)
            .send_json()
            .await?)
    }

    /// Get a user by username.
    pub async fn by_username(&self, username: &str) -> Result<User, AuthError> {
        Ok(self
            .client
            .get(self.url(&["username", username])?)
            .send_json()
            .await?)
    }

    /// List all users.
    pub async fn all(&self) -> Result<Vec<User>, AuthError> {
        Ok(self.client.get(self.url(&[])?).send_json().await?)
    }

    /// Update a user's profile.
    pub async fn update(&self, id: UserId, request: &RegisterRequest) -> Result<User, AuthError> {
        Ok(self
            .client
            .put(self.url(&[id.to_string().as_str()])?)
            .json(request)?
            .send_json()
            .await?)
    }

    /// Delete a user.
    pub async fn delete(&self, id: UserId) -> Result<(), AuthError> {
        Ok(self
            .client
            .delete(self.url(&[id.to_string().as_str()])?)
            .send_empty()
            .await?)
    }

    /// Re-enable a disabled account.
    pub async fn enable(&self, id: UserId) -> Result<(), AuthError> {
        Ok(self
            .client
            .put(self.url(&[id.to_string().as_str(), "enable"])?)
            .send_empty()
            .await?)
    }

    /// Disable an account.
    pub async fn disable(&self, id: UserId) -> Result<(), AuthError> {
        Ok(self
            .client
            .put(self.url(&[id.to_string().as_str(), "disable"])?)
            .send_empty()
            .await?)
    }

    /// Change a user's role.
    pub async fn change_role(&self, id: UserId, role: Role) -> Result<(), AuthError> {
        Ok(self
            .client
            .put(self.url(&[id.to_string().as_str(), "role"])?)
            .query("role", role.as_str())
            .send_empty()
            .await?)
    }

    /// Ask the server whether a token is still valid.
    pub async fn validate_token(&self, token: &str) -> Result<bool, AuthError> {
        Ok(self
            .client
            .post(self.url(&["validate-token"])?)
            .query("token", token)
            .send_json()
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;
    use crate::transport::AuthTransport;
    use async_trait::async_trait;
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;
    use storefront_data::{FetchError, Method, Request, Response, Transport};

    #[derive(Default)]
    struct Scripted {
        replies: Mutex<VecDeque<(u16, serde_json::Value)>>,
        seen: Mutex<Vec<Request>>,
    }

    impl Scripted {
        fn reply(self, status: u16, body: serde_json::Value) -> Self {
            self.replies.lock().unwrap().push_back((status, body));
            self
        }
    }

    #[async_trait]
    impl Transport for Scripted {
        async fn send(&self, request: Request) -> Result<Response, FetchError> {
            self.seen.lock().unwrap().push(request);
            let (status, body) = self
                .replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or((500, serde_json::Value::Null));
            Ok(Response::new(
                status,
                HashMap::new(),
                serde_json::to_vec(&body).unwrap(),
            ))
        }
    }

    fn user_json() -> serde_json::Value {
        serde_json::json!({
            "id": 1,
            "username": "admin",
            "email": "admin@example.com",
            "firstName": "Admin",
            "lastName": "User",
            "role": "ADMIN",
            "enabled": true
        })
    }

    fn api(script: Scripted) -> (UserApi, Arc<Scripted>, Arc<MemorySessionStore>) {
        let script = Arc::new(script);
        let store = Arc::new(MemorySessionStore::new());
        let client = FetchClient::new(AuthTransport::new(script.clone(), store.clone()))
            .with_base_url("http://localhost:8080")
            .unwrap();
        (UserApi::new(client, store.clone()), script, store)
    }

    #[tokio::test]
    async fn test_login_stores_session() {
        let (api, script, store) = api(Scripted::default()
            .reply(
                200,
                serde_json::json!({ "token": "jwt-1", "type": "Bearer", "user": user_json() }),
            )
            .reply(200, user_json()));

        let session = api.login(&LoginRequest::new("admin", "admin123")).await.unwrap();
        assert_eq!(session.token, "jwt-1");
        assert_eq!(store.token().as_deref(), Some("jwt-1"));

        let me = api.current().await.unwrap();
        assert_eq!(me.username, "admin");

        let seen = script.seen.lock().unwrap();
        assert_eq!(seen[0].url, "http://localhost:8080/api/users/login");
        assert!(seen[0].header("Authorization").is_none());
        assert_eq!(seen[1].url, "http://localhost:8080/api/users/current");
        assert_eq!(seen[1].header("Authorization"), Some("Bearer jwt-1"));
    }

    #[tokio::test]
    async fn test_login_rejection_message() {
        let (api, _, store) = api(Scripted::default().reply(
            400,
            serde_json::json!({ "token": null, "message": "Invalid credentials" }),
        ));

        let err = api.login(&LoginRequest::new("admin", "nope")).await.unwrap_err();
        assert!(matches!(&err, AuthError::Rejected(m) if m == "Invalid credentials"));
        assert!(err.is_auth_failure());
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_current_requires_session() {
        let (api, script, _) = api(Scripted::default());
        assert!(matches!(api.current().await, Err(AuthError::NotAuthenticated)));
        assert!(script.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_admin_paths() {
        let (api, script, _) = api(Scripted::default()
            .reply(200, serde_json::Value::Null)
            .reply(200, user_json())
            .reply(200, serde_json::json!(true)));

        api.change_role(UserId::new(4), Role::Moderator).await.unwrap();
        api.by_username("jane doe").await.unwrap();
        assert!(api.validate_token("jwt-1").await.unwrap());

        let seen = script.seen.lock().unwrap();
        assert_eq!(seen[0].method, Method::Put);
        assert_eq!(seen[0].url, "http://localhost:8080/api/users/4/role");
        assert_eq!(seen[0].query_param("role"), Some("MODERATOR"));
        assert_eq!(seen[1].url, "http://localhost:8080/api/users/username/jane%20doe");
        assert_eq!(seen[2].query_param("token"), Some("jwt-1"));
    }

    #[tokio::test]
    async fn test_unauthorized_signs_out() {
        let (api, _, store) = api(Scripted::default().reply(401, serde_json::Value::Null));
        store.set(AuthSession::new("stale", serde_json::from_value(user_json()).unwrap()));

        let err = api.all().await.unwrap_err();
        assert!(err.is_auth_failure());
        assert!(!store.is_authenticated());
    }
}
