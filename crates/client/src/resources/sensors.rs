//! Monitoring sensor endpoints

use fieldscope_domain::types::sensor::{MonitoringSensor, MonitoringSensorPayload};

use crate::api::{ApiClient, Page};
use crate::errors::ApiError;

/// Typed wrapper over the `/monitoring-sensors` router.
pub struct SensorsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Sensor endpoints.
    pub fn sensors(&self) -> SensorsApi<'_> {
        SensorsApi { client: self }
    }
}

impl SensorsApi<'_> {
    /// `GET /monitoring-sensors/?skip&limit`
    pub async fn list(
        &self,
        page: Page,
        token: Option<&str>,
    ) -> Result<Vec<MonitoringSensor>, ApiError> {
        let path = format!("/monitoring-sensors/?skip={}&limit={}", page.skip, page.limit);
        self.client.get(&path, token).await
    }

    /// `GET /monitoring-sensors/{id}`
    pub async fn get(&self, id: &str, token: Option<&str>) -> Result<MonitoringSensor, ApiError> {
        self.client.get(&format!("/monitoring-sensors/{id}"), token).await
    }

    /// `POST /monitoring-sensors/` (201)
    pub async fn create(
        &self,
        payload: &MonitoringSensorPayload,
        token: Option<&str>,
    ) -> Result<MonitoringSensor, ApiError> {
        self.client.post("/monitoring-sensors/", payload, token).await
    }

    /// `PATCH /monitoring-sensors/{id}`
    pub async fn update(
        &self,
        id: &str,
        payload: &MonitoringSensorPayload,
        token: Option<&str>,
    ) -> Result<MonitoringSensor, ApiError> {
        self.client.patch(&format!("/monitoring-sensors/{id}"), payload, token).await
    }

    /// `DELETE /monitoring-sensors/{id}` (204)
    pub async fn delete(&self, id: &str, token: Option<&str>) -> Result<(), ApiError> {
        self.client.delete(&format!("/monitoring-sensors/{id}"), token).await
    }
}
