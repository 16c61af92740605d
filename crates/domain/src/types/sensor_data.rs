//! Sensor data records
//!
//! Data points are keyed by `(sensor_field_id, timestamp)` rather than a
//! surrogate id. The bulk envelope mirrors the ingestion format produced by
//! on-site data loggers: one item per logger file row, fanning out into
//! per-sensor readings and per-field values.

use serde::{Deserialize, Serialize};

/// Single measured value as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorDataPoint {
    pub mon_loc_id: String,
    pub sensor_id: String,
    pub sensor_field_id: String,
    pub timestamp: String,
    pub data: f64,
    pub is_approved: Option<bool>,
    pub last_updated: String,
}

/// Payload for creating one data point.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorDataCreate {
    pub mon_loc_id: String,
    pub sensor_id: String,
    pub sensor_field_id: String,
    pub timestamp: String,
    pub data: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_approved: Option<bool>,
}

/// Partial update of a data point (value and/or approval flag).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SensorDataUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_approved: Option<bool>,
}

// ============================================================================
// Bulk ingestion envelope
// ============================================================================

/// One field value inside a reading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldValue {
    /// Sensor field id.
    pub field: String,
    pub value: f64,
}

/// All values read from one sensor at one instant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorReading {
    /// Sensor id.
    pub sensor: String,
    pub data: Vec<FieldValue>,
}

/// One timestamped row from a source file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BulkSensorDataItem {
    pub timestamp: String,
    pub source_id: String,
    pub mon_loc_id: String,
    pub sensor_type: String,
    pub sensors: Vec<SensorReading>,
}

/// Request body for `POST /monitoring-sensor-data/bulk-from-source`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BulkSensorDataRequest {
    pub items: Vec<BulkSensorDataItem>,
}

/// Acknowledgement returned by the bulk ingestion endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BulkIngestAck {
    pub status: String,
    pub records_enqueued: u64,
}
