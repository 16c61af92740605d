//! Typed API client
//!
//! One HTTP round trip per call: build the request against the configured
//! base origin, attach the optional bearer credential, send once, and map
//! the outcome into a typed value or a typed failure.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

use fieldscope_domain::constants::{DEFAULT_PAGE_LIMIT, DEFAULT_PAGE_SKIP};

use crate::config::ClientConfig;
use crate::errors::{ApiError, ErrorBody};
use crate::http::HttpClient;

/// `skip`/`limit` window for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: u32,
    pub limit: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self { skip: DEFAULT_PAGE_SKIP, limit: DEFAULT_PAGE_LIMIT }
    }
}

impl Page {
    /// Window starting at `skip` with the default limit.
    pub fn from_skip(skip: u32) -> Self {
        Self { skip, ..Self::default() }
    }
}

/// Request descriptor for [`ApiClient::request`].
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// HTTP method; GET when not set otherwise.
    pub method: Method,
    /// JSON body. Invalid in combination with GET.
    pub body: Option<serde_json::Value>,
    /// Extra headers, applied before the credential and content type.
    pub headers: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self { method: Method::GET, body: None, headers: Vec::new() }
    }
}

impl RequestOptions {
    /// Descriptor for `method` with no body.
    pub fn new(method: Method) -> Self {
        Self { method, ..Self::default() }
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the value cannot be represented as
    /// JSON.
    pub fn json_body<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::Config(format!("failed to serialize body: {e}")))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Typed client for the monitoring API.
///
/// Holds only immutable configuration and the underlying transport;
/// credentials are supplied per call, so one client can serve any number
/// of concurrent callers.
#[derive(Clone)]
pub struct ApiClient {
    http: HttpClient,
    config: ClientConfig,
}

impl ApiClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the base origin is not a valid
    /// http(s) URL or the transport cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        config.validate()?;

        let http = HttpClient::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { http, config })
    }

    /// Client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Perform one request and decode the response into `T`.
    ///
    /// `path` is joined onto the configured base origin; a path that is
    /// already absolute (`http://` or `https://`) is used verbatim. When
    /// `credential` is set, `Authorization: Bearer <credential>` is sent.
    ///
    /// # Errors
    ///
    /// - `Config`: empty path, or a body supplied with GET (rejected
    ///   before any I/O)
    /// - `Network`/`Timeout`: transport failed before a response arrived
    /// - `Http`: status outside [200, 300), raw body attached
    /// - `Decode`: body is not valid JSON or does not match `T`
    #[instrument(skip(self, options, credential), fields(method = %options.method, path = %path))]
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
        credential: Option<&str>,
    ) -> Result<T, ApiError> {
        if options.method == Method::GET && options.body.is_some() {
            return Err(ApiError::Config("request body is not allowed on GET".to_string()));
        }

        let url = self.join_url(path)?;
        debug!(url = %url, "API request");

        let mut builder = self.http.request(options.method.clone(), &url);
        for (name, value) in &options.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(token) = credential {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = &options.body {
            builder = builder.header(CONTENT_TYPE, "application/json").json(body);
        }

        let response = self.http.send(builder).await?;
        self.decode_response(response).await
    }

    /// Perform one form-encoded POST and decode the response into `T`.
    ///
    /// Used by the password login endpoint, which speaks
    /// `application/x-www-form-urlencoded` rather than JSON.
    #[instrument(skip(self, form), fields(path = %path))]
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.join_url(path)?;
        debug!(url = %url, "API form request");

        let builder = self.http.request(Method::POST, &url).form(form);
        let response = self.http.send(builder).await?;
        self.decode_response(response).await
    }

    /// GET `path` and decode into `T`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        credential: Option<&str>,
    ) -> Result<T, ApiError> {
        self.request(path, RequestOptions::default(), credential).await
    }

    /// POST `body` to `path` and decode into `T`.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        credential: Option<&str>,
    ) -> Result<T, ApiError> {
        let options = RequestOptions::new(Method::POST).json_body(body)?;
        self.request(path, options, credential).await
    }

    /// PATCH `body` to `path` and decode into `T`.
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        credential: Option<&str>,
    ) -> Result<T, ApiError> {
        let options = RequestOptions::new(Method::PATCH).json_body(body)?;
        self.request(path, options, credential).await
    }

    /// PUT `body` to `path` and decode into `T`.
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        credential: Option<&str>,
    ) -> Result<T, ApiError> {
        let options = RequestOptions::new(Method::PUT).json_body(body)?;
        self.request(path, options, credential).await
    }

    /// DELETE `path`. The backend answers 204, which decodes as `()`.
    pub async fn delete(&self, path: &str, credential: Option<&str>) -> Result<(), ApiError> {
        self.request(path, RequestOptions::new(Method::DELETE), credential).await
    }

    /// Join `path` onto the base origin.
    ///
    /// Normalizes to exactly one slash between base and path; passes
    /// absolute URLs through untouched.
    fn join_url(&self, path: &str) -> Result<String, ApiError> {
        if path.is_empty() {
            return Err(ApiError::Config("request path is empty".to_string()));
        }
        if path.starts_with("http://") || path.starts_with("https://") {
            return Ok(path.to_string());
        }

        let base = self.config.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            Ok(format!("{base}{path}"))
        } else {
            Ok(format!("{base}/{path}"))
        }
    }

    async fn decode_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            return Err(ApiError::Http { status, body: ErrorBody::from_raw(&raw) });
        }

        // 204/205 carry no body; only types that accept null (e.g. `()`)
        // can be produced from them.
        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            return serde_json::from_value(serde_json::Value::Null).map_err(|_| {
                ApiError::Decode(format!(
                    "no-content response ({}) cannot populate the requested type",
                    status.as_u16()
                ))
            });
        }

        let raw = response
            .text()
            .await
            .map_err(|err| self.http.map_transport_error(&err))?;

        serde_json::from_str(&raw)
            .map_err(|e| ApiError::Decode(format!("failed to parse response: {e}")))
    }
}
