//! Sensor field records
//!
//! A field is one measured (or calculated) channel of a sensor, e.g.
//! "water_level" in metres.

use serde::{Deserialize, Serialize};

/// Field as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorField {
    pub id: String,
    pub sensor_id: String,
    pub field_name: String,
    pub uom: Option<String>,
    pub is_calculated: Option<bool>,
    pub field_type: Option<String>,
}

/// Payload for creating a field under a sensor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorFieldCreate {
    pub field_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_calculated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
}

/// Partial update payload. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SensorFieldUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_calculated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
}
