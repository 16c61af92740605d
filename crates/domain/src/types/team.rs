//! Team records

use serde::{Deserialize, Serialize};

/// Team as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub last_updated: String,
}

/// Payload for creating a team.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamPayload {
    pub name: String,
}
