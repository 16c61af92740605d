//! User and auth endpoints

use fieldscope_domain::types::user::{MeResponse, TokenPair, UserAccount, UserRegistration};

use crate::api::ApiClient;
use crate::errors::ApiError;

/// Typed wrapper over the `/users` router.
pub struct UsersApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// User endpoints.
    pub fn users(&self) -> UsersApi<'_> {
        UsersApi { client: self }
    }
}

impl UsersApi<'_> {
    /// `POST /users/` (201). Rejected with 400 when the email is taken.
    pub async fn register(&self, payload: &UserRegistration) -> Result<UserAccount, ApiError> {
        self.client.post("/users/", payload, None).await
    }

    /// `POST /users/login` — OAuth2 password form, not JSON.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, ApiError> {
        self.client.post_form("/users/login", &[("username", email), ("password", password)]).await
    }

    /// `GET /users/me`
    pub async fn me(&self, token: Option<&str>) -> Result<MeResponse, ApiError> {
        self.client.get("/users/me", token).await
    }
}
