//! # fleet-rs
//!
//! An async Rust client for the fleet cluster scheduler REST API.
//!
//! The client sends requests through a [`Transport`](client::Transport),
//! follows `nextPageToken` cursors on list endpoints and merges every page
//! into one result, and turns error responses into typed [`Error::Api`]
//! values.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fleet_rs::{ClientConfig, FleetClient, UnitName};
//!
//! #[tokio::main]
//! async fn main() -> fleet_rs::Result<()> {
//!     let client = FleetClient::new(
//!         ClientConfig::default().with_base_url("http://127.0.0.1:49153"),
//!     )?;
//!
//!     let units = client.units().list().await?;
//!     println!("Found {} units", units.len());
//!
//!     match client.units().get(&UnitName::new("web@1.service")).await {
//!         Ok(unit) => println!("{:?}", unit.current_state),
//!         Err(e) if e.is_not_found() => println!("not submitted"),
//!         Err(e) => return Err(e),
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use client::{ClientConfig, FleetClient};
pub use error::{ApiErrorKind, Error, Result};
pub use models::{DesiredState, MachineId, UnitName};

/// Prelude module for convenient imports.
///
/// ```rust
/// use fleet_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::StatesQuery;
    pub use crate::client::{ClientConfig, FleetClient, Method, Transport, TransportRequest, TransportResponse};
    pub use crate::error::{ApiErrorKind, Error, Result};
    pub use crate::models::{
        DesiredState, Machine, MachineId, Unit, UnitName, UnitOption, UnitState,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_name_creation() {
        let unit = UnitName::new("web.service");
        assert_eq!(unit.as_str(), "web.service");
    }

    #[test]
    fn test_default_api_url() {
        assert_eq!(
            ClientConfig::default().api_url().unwrap().as_str(),
            "http://127.0.0.1:49153/fleet/v1/"
        );
    }
}
