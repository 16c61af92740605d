//! Sensor data endpoints
//!
//! Data points are addressed by `(sensor_field_id, timestamp)`. The
//! timestamp lands in the URL path, so it is percent-encoded here before
//! the path is assembled.

use fieldscope_domain::constants::FIELD_SCAN_LIMIT;
use fieldscope_domain::types::sensor_data::{
    BulkIngestAck, BulkSensorDataRequest, SensorDataCreate, SensorDataPoint, SensorDataUpdate,
};

use crate::api::{ApiClient, Page};
use crate::errors::ApiError;

/// Percent-encode one path segment.
fn encode_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Typed wrapper over the `/monitoring-sensor-data` router.
pub struct SensorDataApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Sensor data endpoints.
    pub fn sensor_data(&self) -> SensorDataApi<'_> {
        SensorDataApi { client: self }
    }
}

impl SensorDataApi<'_> {
    /// `GET /monitoring-sensor-data/?skip&limit`
    pub async fn list(
        &self,
        page: Page,
        token: Option<&str>,
    ) -> Result<Vec<SensorDataPoint>, ApiError> {
        let path = format!("/monitoring-sensor-data/?skip={}&limit={}", page.skip, page.limit);
        self.client.get(&path, token).await
    }

    /// Pull a window of records and keep only those for one field.
    ///
    /// The backend has no field filter on the list route yet, so the
    /// filtering happens client-side over a wider scan window.
    pub async fn list_for_field(
        &self,
        sensor_field_id: &str,
        token: Option<&str>,
    ) -> Result<Vec<SensorDataPoint>, ApiError> {
        let page = Page { skip: 0, limit: FIELD_SCAN_LIMIT };
        let all = self.list(page, token).await?;
        Ok(all.into_iter().filter(|r| r.sensor_field_id == sensor_field_id).collect())
    }

    /// `GET /monitoring-sensor-data/{field_id}/{timestamp}`
    pub async fn get(
        &self,
        sensor_field_id: &str,
        timestamp: &str,
        token: Option<&str>,
    ) -> Result<SensorDataPoint, ApiError> {
        let ts = encode_segment(timestamp);
        self.client.get(&format!("/monitoring-sensor-data/{sensor_field_id}/{ts}"), token).await
    }

    /// `POST /monitoring-sensor-data/` (201)
    pub async fn create(
        &self,
        payload: &SensorDataCreate,
        token: Option<&str>,
    ) -> Result<SensorDataPoint, ApiError> {
        self.client.post("/monitoring-sensor-data/", payload, token).await
    }

    /// `PATCH /monitoring-sensor-data/{field_id}/{timestamp}`
    pub async fn update(
        &self,
        sensor_field_id: &str,
        timestamp: &str,
        payload: &SensorDataUpdate,
        token: Option<&str>,
    ) -> Result<SensorDataPoint, ApiError> {
        let ts = encode_segment(timestamp);
        self.client
            .patch(&format!("/monitoring-sensor-data/{sensor_field_id}/{ts}"), payload, token)
            .await
    }

    /// `DELETE /monitoring-sensor-data/{field_id}/{timestamp}` (204)
    pub async fn delete(
        &self,
        sensor_field_id: &str,
        timestamp: &str,
        token: Option<&str>,
    ) -> Result<(), ApiError> {
        let ts = encode_segment(timestamp);
        self.client.delete(&format!("/monitoring-sensor-data/{sensor_field_id}/{ts}"), token).await
    }

    /// `POST /monitoring-sensor-data/bulk-from-source`
    ///
    /// Enqueues logger rows for ingestion; the ack reports how many records
    /// were accepted, not how many were written.
    pub async fn bulk_from_source(
        &self,
        payload: &BulkSensorDataRequest,
        token: Option<&str>,
    ) -> Result<BulkIngestAck, ApiError> {
        self.client.post("/monitoring-sensor-data/bulk-from-source", payload, token).await
    }
}

#[cfg(test)]
mod tests {
    use super::encode_segment;

    #[test]
    fn encodes_timestamp_path_segments() {
        assert_eq!(encode_segment("2024-06-01T00:00:00"), "2024-06-01T00%3A00%3A00");
        assert_eq!(encode_segment("2024-06-01 00:00:00"), "2024-06-01%2000%3A00%3A00");
        assert_eq!(encode_segment("plain"), "plain");
    }
}
