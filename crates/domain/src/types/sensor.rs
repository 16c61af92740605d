//! Monitoring sensor records

use serde::{Deserialize, Serialize};

/// Denormalized parent names, present on expanded listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorDetails {
    pub mon_source_name: String,
    pub group_name: String,
}

/// A physical or virtual sensor attached to a monitoring source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonitoringSensor {
    pub id: String,
    pub mon_source_id: String,
    pub source_name: Option<String>,
    pub sensor_group_id: Option<String>,
    pub sensor_name: String,
    pub sensor_type: String,
    pub active: i32,
    pub created_at: String,
    pub last_updated: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<SensorDetails>,
}

/// Create/update payload for sensors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonitoringSensorPayload {
    pub mon_source_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensor_group_id: Option<String>,
    pub sensor_name: String,
    pub sensor_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<i32>,
}
