//! Sensor field endpoints
//!
//! Fields are created and listed through their parent sensor; direct reads
//! and writes go through the flat `/monitoring-sensor-fields` router.

use fieldscope_domain::types::sensor_field::{SensorField, SensorFieldCreate, SensorFieldUpdate};

use crate::api::ApiClient;
use crate::errors::ApiError;

/// Typed wrapper over the sensor-field routes.
pub struct SensorFieldsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Sensor field endpoints.
    pub fn sensor_fields(&self) -> SensorFieldsApi<'_> {
        SensorFieldsApi { client: self }
    }
}

impl SensorFieldsApi<'_> {
    /// `GET /monitoring-sensors/{sensor_id}/fields`
    pub async fn list_for_sensor(
        &self,
        sensor_id: &str,
        token: Option<&str>,
    ) -> Result<Vec<SensorField>, ApiError> {
        self.client.get(&format!("/monitoring-sensors/{sensor_id}/fields"), token).await
    }

    /// `GET /monitoring-sensor-fields/{id}`
    pub async fn get(&self, id: &str, token: Option<&str>) -> Result<SensorField, ApiError> {
        self.client.get(&format!("/monitoring-sensor-fields/{id}"), token).await
    }

    /// `POST /monitoring-sensors/{sensor_id}/fields` (201)
    pub async fn create(
        &self,
        sensor_id: &str,
        payload: &SensorFieldCreate,
        token: Option<&str>,
    ) -> Result<SensorField, ApiError> {
        self.client.post(&format!("/monitoring-sensors/{sensor_id}/fields"), payload, token).await
    }

    /// `PATCH /monitoring-sensor-fields/{id}`
    pub async fn update(
        &self,
        id: &str,
        payload: &SensorFieldUpdate,
        token: Option<&str>,
    ) -> Result<SensorField, ApiError> {
        self.client.patch(&format!("/monitoring-sensor-fields/{id}"), payload, token).await
    }

    /// `DELETE /monitoring-sensor-fields/{id}` (204)
    pub async fn delete(&self, id: &str, token: Option<&str>) -> Result<(), ApiError> {
        self.client.delete(&format!("/monitoring-sensor-fields/{id}"), token).await
    }
}
