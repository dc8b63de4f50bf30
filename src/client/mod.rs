//! HTTP client and request executor for the fleet API.
//!
//! This module provides the main entry point [`FleetClient`], the
//! [`Transport`] seam it sends requests through, and the pagination helpers
//! used by list reads.
//!
//! # Example
//!
//! ```no_run
//! use fleet_rs::{ClientConfig, FleetClient};
//!
//! # async fn example() -> fleet_rs::Result<()> {
//! let client = FleetClient::new(ClientConfig::default())?;
//! let machines = client.machines().list().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod paginated;
pub mod transport;

pub use config::{ClientConfig, DEFAULT_API_VERSION, DEFAULT_BASE_URL};
pub use http::{escape_path, FleetClient};
pub use paginated::{PageAccumulator, NEXT_PAGE_TOKEN};
pub use transport::{HttpTransport, Method, Transport, TransportRequest, TransportResponse};
pub(crate) use http::ClientInner;
