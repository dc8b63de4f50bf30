//! Error types for the fleet API client.
//!
//! Every failure surfaced by this crate is an [`Error`]. Responses with an
//! HTTP status in `400..600` become [`Error::Api`], tagged with the
//! [`ApiErrorKind`] registered for that status.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for fleet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all fleet API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Building the underlying HTTP client failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The transport could not reach the API (socket failure, timeout)
    #[error("Connection error: {0}")]
    Connection(String),

    /// API returned an error response
    #[error("{kind}: status={status}, code={code}, message={message}")]
    Api {
        /// Error kind selected by the HTTP status
        kind: ApiErrorKind,
        /// HTTP status code
        status: u16,
        /// Error code reported in the response body
        code: i64,
        /// Human-readable error message
        message: String,
    },

    /// A successful response did not have the expected JSON shape
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    /// A follow-up page could not be merged into the previous ones
    #[error("Cannot merge page key `{key}`: {reason}")]
    PageMerge {
        /// Top-level key that failed to merge
        key: String,
        /// Why the values could not be concatenated
        reason: String,
    },

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Typed category of an API error, keyed by HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// 400
    BadRequest,
    /// 401
    Unauthorized,
    /// 403
    Forbidden,
    /// 404
    NotFound,
    /// 406
    NotAcceptable,
    /// 409
    Conflict,
    /// 412
    PreconditionFailed,
    /// 500
    InternalServerError,
    /// 502
    BadGateway,
    /// 503
    ServiceUnavailable,
    /// 504
    GatewayTimeout,
    /// Any status without a dedicated kind
    Other,
}

impl ApiErrorKind {
    /// Look up the kind registered for an HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// use fleet_rs::error::ApiErrorKind;
    ///
    /// assert_eq!(ApiErrorKind::from_status(404), ApiErrorKind::NotFound);
    /// assert_eq!(ApiErrorKind::from_status(418), ApiErrorKind::Other);
    /// ```
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ApiErrorKind::BadRequest,
            401 => ApiErrorKind::Unauthorized,
            403 => ApiErrorKind::Forbidden,
            404 => ApiErrorKind::NotFound,
            406 => ApiErrorKind::NotAcceptable,
            409 => ApiErrorKind::Conflict,
            412 => ApiErrorKind::PreconditionFailed,
            500 => ApiErrorKind::InternalServerError,
            502 => ApiErrorKind::BadGateway,
            503 => ApiErrorKind::ServiceUnavailable,
            504 => ApiErrorKind::GatewayTimeout,
            _ => ApiErrorKind::Other,
        }
    }

    /// Name of the kind, as used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiErrorKind::BadRequest => "BadRequest",
            ApiErrorKind::Unauthorized => "Unauthorized",
            ApiErrorKind::Forbidden => "Forbidden",
            ApiErrorKind::NotFound => "NotFound",
            ApiErrorKind::NotAcceptable => "NotAcceptable",
            ApiErrorKind::Conflict => "Conflict",
            ApiErrorKind::PreconditionFailed => "PreconditionFailed",
            ApiErrorKind::InternalServerError => "InternalServerError",
            ApiErrorKind::BadGateway => "BadGateway",
            ApiErrorKind::ServiceUnavailable => "ServiceUnavailable",
            ApiErrorKind::GatewayTimeout => "GatewayTimeout",
            ApiErrorKind::Other => "Error",
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Error {
    /// Returns `true` if the transport failed to reach the API.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Error::Connection(_))
    }

    /// Returns `true` for a 404 API error.
    pub fn is_not_found(&self) -> bool {
        self.api_kind() == Some(ApiErrorKind::NotFound)
    }

    /// The API error kind, if this is an API error.
    pub fn api_kind(&self) -> Option<ApiErrorKind> {
        match self {
            Error::Api { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns `true` if this error indicates a client-side issue.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => (400..500).contains(status),
            Error::InvalidInput(_) | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Create an API error from an error response.
    ///
    /// The body is expected to look like
    /// `{"error": {"message": "...", "code": 404}}`. A body that is not JSON
    /// or has no `error` object still yields an API error: the message falls
    /// back to the raw body and the code to the HTTP status.
    pub(crate) fn from_api_response(status: u16, body: &str) -> Self {
        let parsed: Option<Value> = serde_json::from_str(body).ok();
        let error = parsed.as_ref().and_then(|b| b.get("error"));

        let code = error
            .and_then(|e| e.get("code"))
            .and_then(|c| c.as_i64())
            .unwrap_or(i64::from(status));

        let message = match error.and_then(|e| e.get("message")).and_then(|m| m.as_str()) {
            Some(message) => message.to_string(),
            None if body.trim().is_empty() => "Unknown API error".to_string(),
            None => body.trim().to_string(),
        };

        Error::Api {
            kind: ApiErrorKind::from_status(status),
            status,
            code,
            message,
        }
    }
}
