//! # Fieldscope Client
//!
//! Typed client for the Fieldscope monitoring API.
//!
//! This crate contains:
//! - HTTP transport wrapper (timeout, single attempt per call)
//! - Typed API client (bearer injection, JSON encode/decode, error mapping)
//! - Per-resource endpoint wrappers (projects, locations, groups, sensors,
//!   sensor fields/data, sources, teams, checklists, users)
//! - Configuration loading and auth helpers
//!
//! ## Architecture
//! - All network I/O goes through [`http::HttpClient`]; no direct reqwest
//!   elsewhere
//! - Credentials are per-call parameters; the client caches nothing
//!   between calls, so concurrent use needs no coordination
//! - The client never retries; [`ApiError`] carries category metadata so
//!   callers can layer their own policy
//!
//! ## Example
//!
//! ```no_run
//! use fieldscope_client::{ApiClient, ClientConfig, Page};
//!
//! # async fn run() -> Result<(), fieldscope_client::ApiError> {
//! let client = ApiClient::new(ClientConfig::new("https://api.example.com"))?;
//! let session = fieldscope_client::Session::login(client, "a@b.com", "secret").await?;
//!
//! let token = session.token().await?;
//! let projects = session.client().projects().list(Page::default(), Some(&token)).await?;
//! println!("{} projects", projects.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod http;
pub mod resources;

// Re-export commonly used items
pub use api::{ApiClient, Page, RequestOptions};
pub use auth::{AccessTokenProvider, EnvTokenProvider, Session, StaticTokenProvider};
pub use config::ClientConfig;
pub use errors::{ApiError, ApiErrorCategory, ErrorBody};
pub use http::HttpClient;
