//! Checklist endpoints
//!
//! Besides plain CRUD, this wrapper carries two composites ported from the
//! field app: fetching the newest expanded checklist for a location, and a
//! location-wide delete that falls back to per-item deletes when the bulk
//! route is not deployed.

use fieldscope_domain::types::checklist::{
    Checklist, ChecklistExpanded, ChecklistPayload, ChecklistResponse, ChecklistResponsePayload,
    ChecklistTemplate,
};
use reqwest::StatusCode;
use tracing::debug;

use crate::api::ApiClient;
use crate::errors::ApiError;

/// Typed wrapper over the `/checklists` router.
pub struct ChecklistsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Checklist endpoints.
    pub fn checklists(&self) -> ChecklistsApi<'_> {
        ChecklistsApi { client: self }
    }
}

impl ChecklistsApi<'_> {
    /// `GET /checklists/?location_id=`
    pub async fn list_for_location(
        &self,
        location_id: &str,
        token: Option<&str>,
    ) -> Result<Vec<Checklist>, ApiError> {
        self.client.get(&format!("/checklists/?location_id={location_id}"), token).await
    }

    /// `GET /checklists/{id}`
    pub async fn get(&self, id: &str, token: Option<&str>) -> Result<Checklist, ApiError> {
        self.client.get(&format!("/checklists/{id}"), token).await
    }

    /// `GET /checklists/{id}/expanded`
    pub async fn get_expanded(
        &self,
        id: &str,
        token: Option<&str>,
    ) -> Result<ChecklistExpanded, ApiError> {
        self.client.get(&format!("/checklists/{id}/expanded"), token).await
    }

    /// `POST /checklists/` (201)
    pub async fn create(
        &self,
        payload: &ChecklistPayload,
        token: Option<&str>,
    ) -> Result<Checklist, ApiError> {
        self.client.post("/checklists/", payload, token).await
    }

    /// `POST /checklists/{id}/responses`
    pub async fn add_responses(
        &self,
        id: &str,
        responses: &[ChecklistResponsePayload],
        token: Option<&str>,
    ) -> Result<Vec<ChecklistResponse>, ApiError> {
        self.client.post(&format!("/checklists/{id}/responses"), &responses, token).await
    }

    /// `GET /checklists/{id}/responses`
    pub async fn list_responses(
        &self,
        id: &str,
        token: Option<&str>,
    ) -> Result<Vec<ChecklistResponse>, ApiError> {
        self.client.get(&format!("/checklists/{id}/responses"), token).await
    }

    /// Newest expanded checklist for a location, or `None` when the
    /// location has none.
    ///
    /// `performed_at` is ISO-8601, so the lexicographically greatest value
    /// is the most recent; no date parsing needed.
    pub async fn latest_expanded_for_location(
        &self,
        location_id: &str,
        token: Option<&str>,
    ) -> Result<Option<ChecklistExpanded>, ApiError> {
        let mut list = self.list_for_location(location_id, token).await?;
        list.sort_by(|a, b| b.performed_at.cmp(&a.performed_at));

        match list.first() {
            Some(newest) => Ok(Some(self.get_expanded(&newest.id, token).await?)),
            None => Ok(None),
        }
    }

    /// `DELETE /checklists/{id}` (204)
    pub async fn delete(&self, id: &str, token: Option<&str>) -> Result<(), ApiError> {
        self.client.delete(&format!("/checklists/{id}"), token).await
    }

    /// Delete every checklist of a location.
    ///
    /// Tries the collection route first; deployments that predate it
    /// answer 404/405, in which case each checklist is deleted one by one.
    pub async fn delete_for_location(
        &self,
        location_id: &str,
        token: Option<&str>,
    ) -> Result<(), ApiError> {
        let bulk = self
            .client
            .delete(&format!("/checklists/?location_id={location_id}"), token)
            .await;

        match bulk {
            Ok(()) => Ok(()),
            Err(ApiError::Http { status, .. })
                if status == StatusCode::NOT_FOUND || status == StatusCode::METHOD_NOT_ALLOWED =>
            {
                debug!(%location_id, "bulk checklist delete unsupported, falling back");
                let list = self.list_for_location(location_id, token).await?;
                for checklist in &list {
                    self.delete(&checklist.id, token).await?;
                }
                Ok(())
            }
            Err(other) => Err(other),
        }
    }

    /// `GET /checklists/templates`
    pub async fn list_templates(
        &self,
        token: Option<&str>,
    ) -> Result<Vec<ChecklistTemplate>, ApiError> {
        self.client.get("/checklists/templates", token).await
    }
}
