//! Site-inspection checklist records
//!
//! Checklists are instances of a template performed at a location. The
//! expanded form inlines the template's categories/items together with the
//! recorded responses so a single fetch can render a filled-in form.

use serde::{Deserialize, Serialize};

/// Checklist instance as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Checklist {
    pub id: String,
    pub location_id: String,
    pub template_id: String,
    pub performed_at: String,
    pub created_by: Option<String>,
    pub notes: Option<String>,
}

/// Payload for creating a checklist instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChecklistPayload {
    pub location_id: String,
    pub template_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Checklist template header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChecklistTemplate {
    pub id: String,
    pub project_id: Option<String>,
    pub name: String,
    pub created_at: String,
}

/// How an item is answered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistResponseType {
    YesNo,
    Text,
}

/// One prompt inside a template category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChecklistItem {
    pub id: String,
    pub prompt: String,
    pub response_type: ChecklistResponseType,
    pub sort_order: i32,
}

/// Ordered group of items inside an expanded checklist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChecklistCategory {
    pub id: String,
    pub title: String,
    pub sort_order: i32,
    pub items: Vec<ChecklistItem>,
}

/// Recorded answer to a template item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChecklistResponse {
    pub id: String,
    pub checklist_id: String,
    pub template_item_id: String,
    pub value: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: String,
}

/// Payload for submitting answers to a checklist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChecklistResponsePayload {
    pub template_item_id: String,
    pub value: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Checklist with template structure and responses inlined.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChecklistExpanded {
    pub id: String,
    pub template_id: String,
    pub template_name: String,
    pub performed_at: String,
    pub notes: Option<String>,
    pub categories: Vec<ChecklistCategory>,
    pub responses: Vec<ChecklistResponse>,
}
