//! Error types for the SimpleSwap client library.

use serde::Deserialize;
use thiserror::Error;

/// The main error type for all SimpleSwap client operations.
///
/// Transport failures, malformed response bodies and API rejections are kept
/// in separate variants so callers can tell "the request never completed"
/// apart from "the service said no".
#[derive(Error, Debug)]
pub enum SimpleSwapError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// Failure raised by a custom [`Transport`](crate::rest::Transport)
    #[error("transport error: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync>),

    /// Response body could not be decoded, either as the expected payload
    /// or (on a failure status) as an API error
    #[error("failed to decode response body (HTTP {status}): {source}")]
    Decode {
        /// HTTP status code of the response
        status: u16,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// SimpleSwap API rejected the request
    #[error("SimpleSwap API error: {0}")]
    Api(ApiError),

    /// Request body serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// A timestamp filter could not be rendered
    #[error("time formatting error: {0}")]
    TimeFormat(#[from] time::error::Format),

    /// A header value supplied by the caller is not valid
    #[error("invalid header value: {0}")]
    InvalidHeader(String),

    /// No API key was configured
    #[error("Missing credentials: an API key is required")]
    MissingCredentials,
}

impl SimpleSwapError {
    /// Wrap an arbitrary error raised by a custom transport.
    pub fn transport(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Transport(err.into())
    }

    /// True if the request failed before a response was received.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::HttpMiddleware(_) | Self::Transport(_)
        )
    }

    /// True if a response arrived but its body could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// The structured API error, if the service rejected the request.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Error record returned by the SimpleSwap API in a non-200 response body.
///
/// The wire shape is `{"status": 400, "error": "...", "description": "...", "traceId": "..."}`.
/// Missing fields decode as empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiError {
    /// HTTP-like status code reported by the service
    pub status: u16,
    /// Short error identifier (e.g. `bad_request`)
    #[serde(rename = "error")]
    pub error_text: String,
    /// Human-readable description
    pub description: String,
    /// Trace id to quote when contacting support
    #[serde(rename = "traceId")]
    pub trace_id: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "status {}, {} ({}); trace id: {}",
            self.status, self.error_text, self.description, self.trace_id
        )
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error from its four fields.
    pub fn new(
        status: u16,
        error_text: impl Into<String>,
        description: impl Into<String>,
        trace_id: impl Into<String>,
    ) -> Self {
        Self {
            status,
            error_text: error_text.into(),
            description: description.into(),
            trace_id: trace_id.into(),
        }
    }

    /// Check if the service classified this as a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Check if the service classified this as a server error (5xx).
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }

    /// Check if the API key was rejected.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401 || self.status == 403
    }

    /// Check if the requested resource (currency, exchange) does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Check if the request was throttled.
    pub fn is_rate_limit(&self) -> bool {
        self.status == 429
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_deserialize() {
        let body = r#"{"status":400,"error":"bad_request","description":"invalid symbol","traceId":"abc123"}"#;
        let error: ApiError = serde_json::from_str(body).unwrap();
        assert_eq!(error, ApiError::new(400, "bad_request", "invalid symbol", "abc123"));
        assert!(error.is_client_error());
        assert!(!error.is_server_error());
    }

    #[test]
    fn test_api_error_missing_fields_default() {
        let error: ApiError = serde_json::from_str(r#"{"error":"unauthorized"}"#).unwrap();
        assert_eq!(error.status, 0);
        assert_eq!(error.error_text, "unauthorized");
        assert!(error.trace_id.is_empty());
    }

    #[test]
    fn test_api_error_display() {
        let error = ApiError::new(404, "not_found", "exchange not found", "t-1");
        assert_eq!(
            error.to_string(),
            "status 404, not_found (exchange not found); trace id: t-1"
        );
        assert!(error.is_not_found());
    }

    #[test]
    fn test_error_classification() {
        let api = SimpleSwapError::Api(ApiError::new(429, "too_many_requests", "", ""));
        assert!(api.api_error().unwrap().is_rate_limit());
        assert!(!api.is_transport());

        let transport = SimpleSwapError::transport("connection reset");
        assert!(transport.is_transport());
        assert!(transport.api_error().is_none());

        let source = serde_json::from_str::<ApiError>("not json").unwrap_err();
        let decode = SimpleSwapError::Decode { status: 502, source };
        assert!(decode.is_decode());
        assert!(decode.to_string().contains("HTTP 502"));
    }
}
