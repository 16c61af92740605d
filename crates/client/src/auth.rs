//! Authentication helpers
//!
//! The core [`ApiClient`](crate::ApiClient) takes the credential as a
//! per-call parameter and never stores it. This module is the convenience
//! layer on top: a provider trait for obtaining tokens, and a [`Session`]
//! that logs in once and threads the bearer token into each call.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use fieldscope_domain::types::user::{MeResponse, TokenPair};

use crate::api::{ApiClient, RequestOptions};
use crate::errors::ApiError;

/// Trait for providing access tokens
///
/// This trait allows dependency injection and testing with mock providers.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Get a valid access token.
    async fn access_token(&self) -> Result<String, ApiError>;
}

/// Provider returning a fixed token, e.g. one obtained from a login call.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<String, ApiError> {
        Ok(self.token.clone())
    }
}

/// Provider reading `FIELDSCOPE_API_TOKEN` on each call.
///
/// Useful for scripted use where an external process rotates the token.
pub struct EnvTokenProvider;

#[async_trait]
impl AccessTokenProvider for EnvTokenProvider {
    async fn access_token(&self) -> Result<String, ApiError> {
        std::env::var("FIELDSCOPE_API_TOKEN")
            .map_err(|_| ApiError::Config("FIELDSCOPE_API_TOKEN is not set".to_string()))
    }
}

/// Authenticated convenience wrapper around [`ApiClient`].
///
/// Fetches a token from its provider before each call and passes it as the
/// per-call credential; the underlying client stays stateless.
pub struct Session {
    client: ApiClient,
    tokens: Arc<dyn AccessTokenProvider>,
}

impl Session {
    /// Wrap a client with an existing token provider.
    pub fn new(client: ApiClient, tokens: Arc<dyn AccessTokenProvider>) -> Self {
        Self { client, tokens }
    }

    /// Log in with the password flow and return a session holding the
    /// obtained bearer token.
    ///
    /// # Errors
    ///
    /// Returns the login failure (`Http` with status 400 on bad
    /// credentials, per the backend).
    pub async fn login(client: ApiClient, email: &str, password: &str) -> Result<Self, ApiError> {
        info!("starting password login");

        let pair: TokenPair = client
            .post_form("/users/login", &[("username", email), ("password", password)])
            .await?;

        debug!(token_type = %pair.token_type, "login succeeded");
        Ok(Self::new(client, Arc::new(StaticTokenProvider::new(pair.access_token))))
    }

    /// Profile of the authenticated caller.
    pub async fn me(&self) -> Result<MeResponse, ApiError> {
        let token = self.tokens.access_token().await?;
        self.client.get("/users/me", Some(&token)).await
    }

    /// Perform an arbitrary request with the session credential attached.
    pub async fn request<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let token = self.tokens.access_token().await?;
        self.client.request(path, options, Some(&token)).await
    }

    /// Current token, as the resource wrappers expect it.
    pub async fn token(&self) -> Result<String, ApiError> {
        self.tokens.access_token().await
    }

    /// The underlying client, for unauthenticated calls.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::config::ClientConfig;

    use super::*;

    #[tokio::test]
    async fn static_provider_returns_token() {
        let provider = StaticTokenProvider::new("test-token");
        let token = provider.access_token().await.unwrap();
        assert_eq!(token, "test-token");
    }

    #[tokio::test]
    async fn login_then_me_uses_obtained_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/login"))
            .and(body_string_contains("username=a%40b.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "jwt-123", "token_type": "bearer"
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users/me"))
            .and(header("Authorization", "Bearer jwt-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "1", "email": "a@b.com", "first_name": "A", "last_name": "B"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(ClientConfig::new(server.uri())).unwrap();
        let session = Session::login(client, "a@b.com", "hunter2").await.expect("session");
        let me = session.me().await.expect("me");
        assert_eq!(me.first_name, "A");
    }

    #[tokio::test]
    async fn login_failure_surfaces_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/login"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "detail": "Incorrect email or password"
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(ClientConfig::new(server.uri())).unwrap();
        let result = Session::login(client, "a@b.com", "wrong").await;

        match result {
            Err(ApiError::Http { status, body }) => {
                assert_eq!(status.as_u16(), 400);
                assert_eq!(body.detail_message(), Some("Incorrect email or password"));
            }
            _ => panic!("expected http error"),
        }
    }
}
