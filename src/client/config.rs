//! Client configuration options.

use std::time::Duration;

use url::Url;

use crate::{Error, Result};

/// Default address of the fleet API.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:49153";

/// Default fleet API version.
pub const DEFAULT_API_VERSION: &str = "v1";

/// Configuration for the fleet client.
///
/// # Example
///
/// ```
/// use fleet_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_base_url("http://10.0.0.5:49153")
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme, host and port of the fleet API
    pub base_url: String,
    /// API version segment, as in `/fleet/{api_version}/`
    pub api_version: String,
    /// Request timeout
    pub timeout: Duration,
    /// Connection establishment timeout
    pub connect_timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("fleet-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fleet API address.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the API version.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The URL every request path is resolved against,
    /// e.g. `http://127.0.0.1:49153/fleet/v1/`.
    pub fn api_url(&self) -> Result<Url> {
        let base = Url::parse(&self.base_url)?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "unsupported scheme `{}` in base URL",
                base.scheme()
            )));
        }

        let version = self.api_version.trim_matches('/');
        if version.is_empty() {
            return Err(Error::Config("API version must not be empty".to_string()));
        }

        let prefix = base.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{}/fleet/{}/", prefix, version))?)
    }
}
