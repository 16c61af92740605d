//! Typed API client
//!
//! This module provides the HTTP-based typed client for the monitoring
//! API. It handles URL joining against the configured base origin, bearer
//! credential injection, JSON body encoding, and typed response decoding.
//!
//! # Architecture
//!
//! - Uses [`HttpClient`](crate::http::HttpClient) (no direct reqwest)
//! - Credential is a per-call parameter, never cached on the client
//! - One request per call; retry policy belongs to the caller

pub mod client;

pub use client::{ApiClient, Page, RequestOptions};
