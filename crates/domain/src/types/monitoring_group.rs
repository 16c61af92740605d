//! Monitoring group records
//!
//! Groups cluster sensors under a location (e.g. a weather station or a
//! piezometer nest) and carry a free-form `data` blob the backend does not
//! interpret.

use serde::{Deserialize, Serialize};

/// Sensor group attached to a monitoring location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonitoringGroup {
    pub id: String,
    pub mon_loc_id: String,
    pub group_name: String,
    pub group_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    pub status: Option<String>,
    pub active: i32,
    pub created_at: String,
    pub last_updated: String,
}

/// Create/update payload for monitoring groups. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MonitoringGroupPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mon_loc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<i32>,
}
