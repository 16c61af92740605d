//! # Fieldscope Domain
//!
//! Wire-shape records for the Fieldscope monitoring API.
//!
//! This crate contains:
//! - Resource records as returned by the backend (Project, Location,
//!   MonitoringGroup, MonitoringSensor, sensor fields/data, Source, Team,
//!   Checklist, user/auth types)
//! - "Payload" variants used for create/update requests
//! - Shared constants (pagination defaults)
//!
//! ## Architecture
//! - No dependencies on other Fieldscope crates
//! - Only external dependencies allowed
//! - Pure data shapes: records are produced by decoding server responses,
//!   never constructed by the client itself
//!
//! Payload variants never carry `id`, `created_at`, or `last_updated`;
//! those fields are server-assigned and read-only from the client side.

pub mod constants;
pub mod types;

// Re-export commonly used items
pub use constants::*;
pub use types::*;
