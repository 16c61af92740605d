//! Location endpoints

use fieldscope_domain::types::location::{Location, LocationPayload};

use crate::api::{ApiClient, Page};
use crate::errors::ApiError;

/// Typed wrapper over the `/locations` router.
pub struct LocationsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Location endpoints.
    pub fn locations(&self) -> LocationsApi<'_> {
        LocationsApi { client: self }
    }
}

impl LocationsApi<'_> {
    /// `GET /locations/{id}`
    pub async fn get(&self, id: &str, token: Option<&str>) -> Result<Location, ApiError> {
        self.client.get(&format!("/locations/{id}"), token).await
    }

    /// `GET /locations/?skip&limit`
    pub async fn list(&self, page: Page, token: Option<&str>) -> Result<Vec<Location>, ApiError> {
        let path = format!("/locations/?skip={}&limit={}", page.skip, page.limit);
        self.client.get(&path, token).await
    }

    /// `GET /projects/{project_id}/locations?skip&limit`
    pub async fn list_for_project(
        &self,
        project_id: &str,
        page: Page,
        token: Option<&str>,
    ) -> Result<Vec<Location>, ApiError> {
        let path =
            format!("/projects/{project_id}/locations?skip={}&limit={}", page.skip, page.limit);
        self.client.get(&path, token).await
    }

    /// `POST /locations/` (201)
    pub async fn create(
        &self,
        payload: &LocationPayload,
        token: Option<&str>,
    ) -> Result<Location, ApiError> {
        self.client.post("/locations/", payload, token).await
    }

    /// `PATCH /locations/{id}`
    pub async fn update(
        &self,
        id: &str,
        payload: &LocationPayload,
        token: Option<&str>,
    ) -> Result<Location, ApiError> {
        self.client.patch(&format!("/locations/{id}"), payload, token).await
    }

    /// `DELETE /locations/{id}` (204)
    pub async fn delete(&self, id: &str, token: Option<&str>) -> Result<(), ApiError> {
        self.client.delete(&format!("/locations/{id}"), token).await
    }
}
