//! HTTP transport layer
//!
//! Thin wrapper over reqwest. All network I/O in this crate goes through
//! [`HttpClient`]; nothing else touches reqwest directly.

pub mod client;

// Re-export commonly used items
pub use client::{HttpClient, HttpClientBuilder};
