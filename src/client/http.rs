//! Request executor for the fleet API.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::api::{MachinesService, StatesService, UnitsService};
use crate::{Error, Result};

use super::config::ClientConfig;
use super::paginated::{take_page_token, PageAccumulator, NEXT_PAGE_TOKEN};
use super::transport::{HttpTransport, Method, Transport, TransportRequest, TransportResponse};

/// The main client for interacting with the fleet API.
///
/// Besides the typed services ([`units`](Self::units),
/// [`machines`](Self::machines), [`states`](Self::states)) the client exposes
/// the raw verbs [`read`](Self::read), [`replace`](Self::replace) and
/// [`remove`](Self::remove) for any path under the API root.
///
/// # Example
///
/// ```no_run
/// use fleet_rs::{ClientConfig, FleetClient};
///
/// # async fn example() -> fleet_rs::Result<()> {
/// let client = FleetClient::new(
///     ClientConfig::default().with_base_url("http://10.0.0.5:49153"),
/// )?;
///
/// // Every page of the unit list, merged
/// let units = client.units().list().await?;
///
/// // The same, untyped
/// let raw = client.read("units", &()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct FleetClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) transport: Box<dyn Transport>,
}

impl FleetClient {
    /// Create a client that talks HTTP to the configured fleet API.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(transport))
    }

    /// Create a client on top of a custom transport.
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                transport: Box::new(transport),
            }),
        }
    }

    /// Get the units service.
    pub fn units(&self) -> UnitsService {
        UnitsService::new(self.inner.clone())
    }

    /// Get the machines service.
    pub fn machines(&self) -> MachinesService {
        MachinesService::new(self.inner.clone())
    }

    /// Get the unit states service.
    pub fn states(&self) -> StatesService {
        StatesService::new(self.inner.clone())
    }

    /// Read a resource, following `nextPageToken` until the last page.
    ///
    /// `options` must serialize to a JSON object of scalars (or to `null`,
    /// e.g. `&()`); they are sent as query parameters.
    pub async fn read<Q>(&self, path: &str, options: &Q) -> Result<Map<String, Value>>
    where
        Q: Serialize + ?Sized,
    {
        self.inner.read(path, options).await
    }

    /// Like [`read`](Self::read), then deserialize the merged result.
    pub async fn read_as<T, Q>(&self, path: &str, options: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.inner.read_as(path, options).await
    }

    /// Create or replace a resource with `options` as its JSON body.
    pub async fn replace<B>(&self, path: &str, options: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.inner.replace(path, options).await
    }

    /// Delete a resource. Non-empty `options` are sent as a JSON body.
    pub async fn remove<B>(&self, path: &str, options: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.inner.remove(path, options).await
    }
}

impl ClientInner {
    pub(crate) async fn read<Q>(&self, path: &str, options: &Q) -> Result<Map<String, Value>>
    where
        Q: Serialize + ?Sized,
    {
        let query = query_pairs(options)?;

        let mut first = self.fetch_page(path, query.clone()).await?;
        let mut next_page_token = take_page_token(&mut first)?;
        let mut pages = PageAccumulator::new(first);

        while let Some(token) = next_page_token {
            tracing::debug!(path, pages = pages.pages(), "following {}", NEXT_PAGE_TOKEN);

            let mut next_query = query.clone();
            next_query.retain(|(name, _)| name != NEXT_PAGE_TOKEN);
            next_query.push((NEXT_PAGE_TOKEN.to_string(), token));

            let mut page = self.fetch_page(path, next_query).await?;
            next_page_token = take_page_token(&mut page)?;
            pages.push(page)?;
        }

        tracing::debug!(path, pages = pages.pages(), "read complete");
        Ok(pages.into_inner())
    }

    pub(crate) async fn read_as<T, Q>(&self, path: &str, options: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let merged = self.read(path, options).await?;
        Ok(serde_json::from_value(Value::Object(merged))?)
    }

    pub(crate) async fn replace<B>(&self, path: &str, options: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let mut request = TransportRequest::new(escape_path(path));
        request
            .headers
            .push(("Content-Type".to_string(), "application/json".to_string()));
        request.body = Some(serde_json::to_string(options)?);

        self.perform(Method::Put, request).await?;
        Ok(())
    }

    pub(crate) async fn remove<B>(&self, path: &str, options: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let mut request = TransportRequest::new(escape_path(path));

        match serde_json::to_value(options)? {
            Value::Null => {}
            Value::Object(map) if map.is_empty() => {}
            body => {
                request
                    .headers
                    .push(("Content-Type".to_string(), "application/json".to_string()));
                request.body = Some(serde_json::to_string(&body)?);
            }
        }

        self.perform(Method::Delete, request).await?;
        Ok(())
    }

    /// GET one page and decode it as a JSON object.
    async fn fetch_page(&self, path: &str, query: Vec<(String, String)>) -> Result<Map<String, Value>> {
        let mut request = TransportRequest::new(escape_path(path));
        request.query = query;

        let response = self.perform(Method::Get, request).await?;
        match serde_json::from_str::<Value>(&response.body)? {
            Value::Object(page) => Ok(page),
            other => Err(Error::UnexpectedShape(format!(
                "expected a JSON object from {}, got {}",
                path, other
            ))),
        }
    }

    /// Send a request and turn error statuses into [`Error::Api`].
    async fn perform(&self, method: Method, request: TransportRequest) -> Result<TransportResponse> {
        tracing::debug!(%method, path = %request.path, "sending request");

        let response = match self.transport.send(method, request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(%method, error = %err, "request failed");
                return Err(err);
            }
        };

        if response.is_error() {
            let err = Error::from_api_response(response.status, &response.body);
            tracing::warn!(%method, status = response.status, error = %err, "API error");
            return Err(err);
        }

        Ok(response)
    }
}

/// Percent-encode a path for use in a request URL.
///
/// Each `/`-separated segment is encoded on its own, so separators survive
/// while everything except ASCII alphanumerics and `-_.~` is escaped. That
/// includes `@`, which some URL encoders leave literal.
pub fn escape_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).replace('@', "%40"))
        .collect::<Vec<_>>()
        .join("/")
}

/// Flatten read options into query parameters.
fn query_pairs<Q>(options: &Q) -> Result<Vec<(String, String)>>
where
    Q: Serialize + ?Sized,
{
    let map = match serde_json::to_value(options)? {
        Value::Null => return Ok(Vec::new()),
        Value::Object(map) => map,
        other => {
            return Err(Error::InvalidInput(format!(
                "read options must be an object, got {}",
                other
            )))
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (name, value) in map {
        let value = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(Error::InvalidInput(format!(
                    "query parameter `{}` must be a scalar",
                    name
                )))
            }
        };
        pairs.push((name, value));
    }
    Ok(pairs)
}

impl std::fmt::Debug for FleetClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FleetClient").finish_non_exhaustive()
    }
}
