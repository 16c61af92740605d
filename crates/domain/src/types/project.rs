//! Project records
//!
//! A project is the top-level container: locations hang off projects, and
//! everything else hangs off locations.

use serde::{Deserialize, Serialize};

/// Project as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: String,
    pub project_number: Option<String>,
    pub project_name: String,
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub status: String,
    pub active: i32,
    pub created_at: String,
    pub last_updated: String,
    /// Denormalized count maintained server-side.
    pub locations_count: i32,
}

/// Create/update payload for projects.
///
/// Mirrors the backend's create schema: the name, description, dates and
/// status are required on create; number and end date are optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectPayload {
    pub project_name: String,
    pub description: String,
    pub start_date: String,
    pub active: i32,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}
