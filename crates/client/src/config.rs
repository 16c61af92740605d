//! Client configuration
//!
//! Loads the API base origin and request deadline from environment
//! variables or a config file. The base origin is injected into
//! [`ApiClient`](crate::ApiClient) at construction; nothing reads ambient
//! global state at request time.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `FIELDSCOPE_API_URL`: Base API origin (e.g. "https://api.example.com")
//! - `FIELDSCOPE_API_TIMEOUT_SECS`: Request deadline in seconds
//!
//! ## File Locations
//! The loader probes, in order: `./config.toml`, `./config.json`,
//! `./fieldscope.toml`, `./fieldscope.json`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::ApiError;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    concat!("fieldscope-client/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Configuration for [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// Base API origin, e.g. "https://api.example.com". A trailing slash
    /// is tolerated.
    pub base_url: String,
    /// Request deadline in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// User-Agent header sent on every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ClientConfig {
    /// Config with defaults for everything except the base origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }

    /// Request deadline as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the base origin parses as an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ApiError> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::Config(format!("invalid base url: {e}")))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ApiError::Config(format!(
                "base url must be http(s), got scheme {}",
                url.scheme()
            )));
        }
        Ok(())
    }
}

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the base URL is
/// missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `ApiError::Config` if configuration cannot be loaded from either
/// source, or if a file is present but malformed.
pub fn load() -> Result<ClientConfig, ApiError> {
    // Pick up a local .env in development; absence is fine.
    dotenvy::dotenv().ok();

    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `FIELDSCOPE_API_URL` must be present; the timeout falls back to its
/// default when unset.
///
/// # Errors
/// Returns `ApiError::Config` if the base URL is missing or any present
/// variable has an invalid value.
pub fn load_from_env() -> Result<ClientConfig, ApiError> {
    let base_url = std::env::var("FIELDSCOPE_API_URL")
        .map_err(|_| ApiError::Config("FIELDSCOPE_API_URL is not set".to_string()))?;

    let timeout_secs = match std::env::var("FIELDSCOPE_API_TIMEOUT_SECS") {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| ApiError::Config(format!("Invalid timeout: {e}")))?,
        Err(_) => DEFAULT_TIMEOUT_SECS,
    };

    let config = ClientConfig {
        base_url,
        timeout_secs,
        user_agent: default_user_agent(),
    };
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Supports both JSON
/// and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `ApiError::Config` if no file is found, or the file is
/// malformed or fails validation.
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig, ApiError> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ApiError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ApiError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ApiError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Probe the standard config file locations, returning the first that
/// exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    const CANDIDATES: [&str; 4] =
        ["config.toml", "config.json", "fieldscope.toml", "fieldscope.json"];

    CANDIDATES.iter().map(PathBuf::from).find(|p| p.exists())
}

fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig, ApiError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(contents)
            .map_err(|e| ApiError::Config(format!("Invalid TOML config: {e}"))),
        Some("json") => serde_json::from_str(contents)
            .map_err(|e| ApiError::Config(format!("Invalid JSON config: {e}"))),
        other => Err(ApiError::Config(format!(
            "Unsupported config format: {}",
            other.unwrap_or("<none>")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parses_toml_config_with_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "base_url = \"https://api.example.com\"").unwrap();

        let config = load_from_file(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("fieldscope-client/"));
    }

    #[test]
    fn parses_json_config() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"base_url": "http://localhost:8000", "timeout_secs": 5}}"#).unwrap();

        let config = load_from_file(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn rejects_unknown_extension() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "base_url: nope").unwrap();

        let result = load_from_file(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[test]
    fn rejects_missing_file() {
        let result = load_from_file(Some(PathBuf::from("/definitely/not/here.toml")));
        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let config = ClientConfig::new("ftp://files.example.com");
        assert!(matches!(config.validate(), Err(ApiError::Config(_))));
    }

    // Environment access is process-global, so everything env-related runs
    // in one test to avoid interleaving with parallel tests.
    #[test]
    fn env_loading_round_trip() {
        std::env::set_var("FIELDSCOPE_API_URL", "https://env.example.com");
        std::env::set_var("FIELDSCOPE_API_TIMEOUT_SECS", "7");

        let config = load_from_env().unwrap();
        assert_eq!(config.base_url, "https://env.example.com");
        assert_eq!(config.timeout_secs, 7);

        std::env::set_var("FIELDSCOPE_API_TIMEOUT_SECS", "not-a-number");
        assert!(matches!(load_from_env(), Err(ApiError::Config(_))));

        std::env::remove_var("FIELDSCOPE_API_TIMEOUT_SECS");
        std::env::remove_var("FIELDSCOPE_API_URL");
        assert!(matches!(load_from_env(), Err(ApiError::Config(_))));
    }
}
