//! Client error types
//!
//! Provides error classification for API operations. The client never
//! retries on its own; the category metadata exists so callers can build
//! their own retry policy on top.

use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Categories of API errors, for caller-side branching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Authentication errors (401, 403) - retryable after a fresh credential
    Authentication,
    /// Rate limiting errors (429) - retryable with backoff
    RateLimit,
    /// Server errors (5xx) - retryable
    Server,
    /// Client errors (4xx except auth) - non-retryable
    Client,
    /// Network/transport errors - retryable
    Network,
    /// Caller misuse or bad configuration - non-retryable
    Config,
    /// Response violated the expected wire contract - non-retryable
    Decode,
}

/// Raw body attached to an HTTP error response.
///
/// The backend usually answers with a JSON document; anything that fails to
/// parse is kept as text so callers can still inspect it.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    Json(serde_json::Value),
    Text(String),
    Empty,
}

impl ErrorBody {
    /// Build from a raw response body.
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::Empty;
        }
        match serde_json::from_str(raw) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(raw.to_string()),
        }
    }

    /// Human-readable failure detail.
    ///
    /// Mirrors the backend's error envelope: `detail` may be a bare string
    /// or an object carrying `code` and `message`.
    pub fn detail_message(&self) -> Option<&str> {
        match self {
            Self::Json(value) => match value.get("detail") {
                Some(serde_json::Value::String(message)) => Some(message),
                Some(serde_json::Value::Object(detail)) => {
                    detail.get("message").and_then(serde_json::Value::as_str)
                }
                _ => None,
            },
            Self::Text(text) => Some(text),
            Self::Empty => None,
        }
    }

    /// Machine-readable error code, when the backend provides one.
    pub fn detail_code(&self) -> Option<&str> {
        match self {
            Self::Json(value) => value
                .get("detail")
                .and_then(|detail| detail.get("code"))
                .and_then(serde_json::Value::as_str),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
            Self::Empty => f.write_str("<empty body>"),
        }
    }
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller misuse (e.g. body on a GET) or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport failed before a response was received.
    #[error("Network error: {0}")]
    Network(String),

    /// No response within the configured deadline.
    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    /// The in-flight request was aborted by the caller.
    #[error("Operation cancelled")]
    Cancelled,

    /// The server answered outside [200, 300).
    #[error("HTTP {status}: {body}")]
    Http { status: StatusCode, body: ErrorBody },

    /// The response body was not valid JSON or did not match the expected
    /// shape.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Config(_) => ApiErrorCategory::Config,
            Self::Network(_) | Self::Timeout(_) | Self::Cancelled => ApiErrorCategory::Network,
            Self::Decode(_) => ApiErrorCategory::Decode,
            Self::Http { status, .. } => {
                if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN {
                    ApiErrorCategory::Authentication
                } else if *status == StatusCode::TOO_MANY_REQUESTS {
                    ApiErrorCategory::RateLimit
                } else if status.is_server_error() {
                    ApiErrorCategory::Server
                } else {
                    ApiErrorCategory::Client
                }
            }
        }
    }

    /// Whether a caller-side retry could plausibly succeed.
    ///
    /// Authentication errors count as retryable because they may clear
    /// after obtaining a fresh credential. The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ApiErrorCategory::Authentication
                | ApiErrorCategory::RateLimit
                | ApiErrorCategory::Server
                | ApiErrorCategory::Network
        )
    }

    /// HTTP status code, when the server produced a response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
