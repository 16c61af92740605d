//! Project endpoints

use fieldscope_domain::types::project::{Project, ProjectPayload};

use crate::api::{ApiClient, Page};
use crate::errors::ApiError;

/// Typed wrapper over the `/projects` router.
pub struct ProjectsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Project endpoints.
    pub fn projects(&self) -> ProjectsApi<'_> {
        ProjectsApi { client: self }
    }
}

impl ProjectsApi<'_> {
    /// `POST /projects/` (201)
    pub async fn create(
        &self,
        payload: &ProjectPayload,
        token: Option<&str>,
    ) -> Result<Project, ApiError> {
        self.client.post("/projects/", payload, token).await
    }

    /// `GET /projects/?skip&limit`
    pub async fn list(&self, page: Page, token: Option<&str>) -> Result<Vec<Project>, ApiError> {
        let path = format!("/projects/?skip={}&limit={}", page.skip, page.limit);
        self.client.get(&path, token).await
    }

    /// `GET /projects/{id}`
    pub async fn get(&self, id: &str, token: Option<&str>) -> Result<Project, ApiError> {
        self.client.get(&format!("/projects/{id}"), token).await
    }

    /// `GET /projects/by-number/{number}`
    pub async fn get_by_number(
        &self,
        number: &str,
        token: Option<&str>,
    ) -> Result<Project, ApiError> {
        self.client.get(&format!("/projects/by-number/{number}"), token).await
    }

    /// `PATCH /projects/{id}`
    pub async fn update(
        &self,
        id: &str,
        payload: &ProjectPayload,
        token: Option<&str>,
    ) -> Result<Project, ApiError> {
        self.client.patch(&format!("/projects/{id}"), payload, token).await
    }

    /// `DELETE /projects/{id}` (204)
    pub async fn delete(&self, id: &str, token: Option<&str>) -> Result<(), ApiError> {
        self.client.delete(&format!("/projects/{id}"), token).await
    }
}
