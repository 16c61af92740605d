//! Monitoring group endpoints

use fieldscope_domain::types::monitoring_group::{MonitoringGroup, MonitoringGroupPayload};

use crate::api::{ApiClient, Page};
use crate::errors::ApiError;

/// Typed wrapper over the `/monitoring-groups` router.
pub struct MonitoringGroupsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Monitoring group endpoints.
    pub fn monitoring_groups(&self) -> MonitoringGroupsApi<'_> {
        MonitoringGroupsApi { client: self }
    }
}

impl MonitoringGroupsApi<'_> {
    /// `GET /monitoring-groups/?skip&limit`
    pub async fn list(
        &self,
        page: Page,
        token: Option<&str>,
    ) -> Result<Vec<MonitoringGroup>, ApiError> {
        let path = format!("/monitoring-groups/?skip={}&limit={}", page.skip, page.limit);
        self.client.get(&path, token).await
    }

    /// `GET /monitoring-groups/by-location/{location_id}?skip&limit`
    pub async fn list_for_location(
        &self,
        location_id: &str,
        page: Page,
        token: Option<&str>,
    ) -> Result<Vec<MonitoringGroup>, ApiError> {
        let path = format!(
            "/monitoring-groups/by-location/{location_id}?skip={}&limit={}",
            page.skip, page.limit
        );
        self.client.get(&path, token).await
    }

    /// `GET /monitoring-groups/{id}`
    pub async fn get(&self, id: &str, token: Option<&str>) -> Result<MonitoringGroup, ApiError> {
        self.client.get(&format!("/monitoring-groups/{id}"), token).await
    }

    /// `POST /monitoring-groups/` (201)
    pub async fn create(
        &self,
        payload: &MonitoringGroupPayload,
        token: Option<&str>,
    ) -> Result<MonitoringGroup, ApiError> {
        self.client.post("/monitoring-groups/", payload, token).await
    }

    /// `PATCH /monitoring-groups/{id}`
    pub async fn update(
        &self,
        id: &str,
        payload: &MonitoringGroupPayload,
        token: Option<&str>,
    ) -> Result<MonitoringGroup, ApiError> {
        self.client.patch(&format!("/monitoring-groups/{id}"), payload, token).await
    }

    /// `DELETE /monitoring-groups/{id}` (204)
    pub async fn delete(&self, id: &str, token: Option<&str>) -> Result<(), ApiError> {
        self.client.delete(&format!("/monitoring-groups/{id}"), token).await
    }
}
