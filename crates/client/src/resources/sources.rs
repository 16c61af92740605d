//! Monitoring source endpoints

use fieldscope_domain::types::source::{Source, SourceCreate, SourceUpdate};

use crate::api::{ApiClient, Page};
use crate::errors::ApiError;

/// Typed wrapper over the `/monitoring-sources` router.
pub struct SourcesApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Source endpoints.
    pub fn sources(&self) -> SourcesApi<'_> {
        SourcesApi { client: self }
    }
}

impl SourcesApi<'_> {
    /// `POST /monitoring-sources/` (201)
    pub async fn create(
        &self,
        payload: &SourceCreate,
        token: Option<&str>,
    ) -> Result<Source, ApiError> {
        self.client.post("/monitoring-sources/", payload, token).await
    }

    /// `PATCH /monitoring-sources/{id}`
    pub async fn update(
        &self,
        id: i64,
        payload: &SourceUpdate,
        token: Option<&str>,
    ) -> Result<Source, ApiError> {
        self.client.patch(&format!("/monitoring-sources/{id}"), payload, token).await
    }

    /// `GET /monitoring-sources/{id}`
    pub async fn get(&self, id: i64, token: Option<&str>) -> Result<Source, ApiError> {
        self.client.get(&format!("/monitoring-sources/{id}"), token).await
    }

    /// `GET /monitoring-sources/?skip&limit`
    pub async fn list(&self, page: Page, token: Option<&str>) -> Result<Vec<Source>, ApiError> {
        let path = format!("/monitoring-sources/?skip={}&limit={}", page.skip, page.limit);
        self.client.get(&path, token).await
    }

    /// `DELETE /monitoring-sources/{id}` (204)
    pub async fn delete(&self, id: i64, token: Option<&str>) -> Result<(), ApiError> {
        self.client.delete(&format!("/monitoring-sources/{id}"), token).await
    }
}
