//! Team endpoints

use fieldscope_domain::types::team::{Team, TeamPayload};

use crate::api::ApiClient;
use crate::errors::ApiError;

/// Typed wrapper over the `/teams` router.
pub struct TeamsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Team endpoints.
    pub fn teams(&self) -> TeamsApi<'_> {
        TeamsApi { client: self }
    }
}

impl TeamsApi<'_> {
    /// `GET /teams/`
    pub async fn list(&self, token: Option<&str>) -> Result<Vec<Team>, ApiError> {
        self.client.get("/teams/", token).await
    }

    /// `POST /teams/` (201)
    pub async fn create(
        &self,
        payload: &TeamPayload,
        token: Option<&str>,
    ) -> Result<Team, ApiError> {
        self.client.post("/teams/", payload, token).await
    }
}
