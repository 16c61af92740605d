//! Monitoring location records

use serde::{Deserialize, Serialize};

/// A monitored site within a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub id: String,
    pub project_id: String,
    /// Denormalized project name, present on expanded listings.
    pub project_name: Option<String>,
    pub loc_name: String,
    pub loc_number: Option<String>,
    pub lat: f64,
    pub lon: f64,
    /// Sampling cadence, e.g. "5m" or "1h".
    pub frequency: String,
    pub active: i32,
    pub created_at: String,
    pub last_updated: String,
    pub last_inspected: Option<String>,
}

/// Create/update payload for locations. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LocationPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<i32>,
}
