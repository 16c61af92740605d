//! Monitoring source records
//!
//! A source describes where raw data files for a location come from (folder
//! layout, file naming, parser type). Unlike every other resource, the
//! backend keys sources by an integer id.

use serde::{Deserialize, Serialize};

/// Source as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Source {
    pub id: i64,
    pub project_id: String,
    pub location_id: String,
    pub source_name: String,
    pub folder_path: String,
    pub file_keyword: String,
    pub file_type: String,
    pub source_type: String,
    /// Parser configuration, opaque to the client.
    pub config: serde_json::Value,
    pub last_data_upload: serde_json::Value,
    pub active: i32,
    pub last_updated: String,
}

/// Payload for `POST /monitoring-sources/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceCreate {
    pub project_id: String,
    pub location_id: String,
    pub source_name: String,
    pub status: String,
}

/// Partial update payload. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SourceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
