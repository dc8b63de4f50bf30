//! Transport abstraction and the reqwest-backed implementation.
//!
//! The request executor never talks to the network directly: it hands a
//! [`TransportRequest`] to a [`Transport`] and gets back the raw status and
//! body. [`HttpTransport`] is the implementation used by
//! [`FleetClient::new`](crate::FleetClient::new); tests can plug in their own.

use std::fmt;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::{ClientConfig, Error, Result};

/// HTTP verbs used by the fleet API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Read a resource or a collection.
    Get,
    /// Create or replace a resource.
    Put,
    /// Delete a resource.
    Delete,
}

impl Method {
    /// The verb as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single request handed to a [`Transport`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportRequest {
    /// Percent-encoded path, relative to the API root
    pub path: String,
    /// Query parameters, in order
    pub query: Vec<(String, String)>,
    /// Extra request headers
    pub headers: Vec<(String, String)>,
    /// Serialized request body
    pub body: Option<String>,
}

impl TransportRequest {
    /// Create a request for an already escaped path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Value of a query parameter, if set.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Value of a header, if set. Header names compare case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response returned by a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Undecoded response body
    pub body: String,
}

impl TransportResponse {
    /// Create a response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` for statuses the API reports errors with (`400..600`).
    pub fn is_error(&self) -> bool {
        (400..600).contains(&self.status)
    }
}

/// The connection the request executor sends requests through.
///
/// Implementations must report network-level failures (refused connections,
/// timeouts, broken sockets) as [`Error::Connection`]. Any HTTP status,
/// including error statuses, is a successful `send`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request and return the raw response.
    async fn send(&self, method: Method, request: TransportRequest) -> Result<TransportResponse>;
}

/// [`Transport`] backed by a `reqwest::Client`.
pub struct HttpTransport {
    http: reqwest::Client,
    api_url: Url,
}

impl HttpTransport {
    /// Build a transport from the client configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let api_url = config.api_url()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { http, api_url })
    }

    /// The URL request paths are resolved against.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path.trim_start_matches('/'))
    }

    fn build_headers(request: &TransportRequest) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        for (name, value) in &request.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| Error::InvalidInput(format!("Invalid header name: {}", name)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| Error::InvalidInput(format!("Invalid value for header {}", name)))?;
            headers.insert(name, value);
        }
        Ok(headers)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, method: Method, request: TransportRequest) -> Result<TransportResponse> {
        let url = self.url_for(&request.path);
        let headers = Self::build_headers(&request)?;

        let builder = match method {
            Method::Get => self.http.get(&url),
            Method::Put => self.http.put(&url),
            Method::Delete => self.http.delete(&url),
        };

        let mut builder = builder.headers(headers).query(&request.query);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(connection_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(connection_error)?;

        Ok(TransportResponse { status, body })
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("api_url", &self.api_url.as_str())
            .finish()
    }
}

fn connection_error(err: reqwest::Error) -> Error {
    Error::Connection(err.to_string())
}
