//! User and auth types

use serde::{Deserialize, Serialize};

/// Profile of the authenticated caller, from `GET /users/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeResponse {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Full user record, from `POST /users/` (registration).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserAccount {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub active: Option<i32>,
    pub created_at: String,
    pub last_updated: String,
}

/// Registration payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRegistration {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<i32>,
    pub password: String,
}

/// Bearer token pair returned by `POST /users/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenPair {
    pub access_token: String,
    /// Always "bearer" for this backend.
    pub token_type: String,
}
