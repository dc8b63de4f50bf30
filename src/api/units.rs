//! Units service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{DesiredState, Unit, UnitName};
use crate::Result;

/// Service for unit operations.
///
/// # Example
///
/// ```no_run
/// use fleet_rs::models::{Unit, UnitOption};
///
/// # async fn example(client: fleet_rs::FleetClient) -> fleet_rs::Result<()> {
/// let unit = Unit::new(
///     "web@1.service",
///     vec![UnitOption::new("Service", "ExecStart", "/usr/bin/sleep 1000")],
/// );
/// client.units().create(&unit).await?;
///
/// for unit in client.units().list().await? {
///     println!("{}: {:?}", unit.name, unit.current_state);
/// }
///
/// client.units().destroy(&unit.name).await?;
/// # Ok(())
/// # }
/// ```
pub struct UnitsService {
    inner: Arc<ClientInner>,
}

impl UnitsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all units, across every page.
    pub async fn list(&self) -> Result<Vec<Unit>> {
        #[derive(serde::Deserialize)]
        struct Response {
            #[serde(default)]
            units: Vec<Unit>,
        }

        let response: Response = self.inner.read_as("units", &()).await?;
        Ok(response.units)
    }

    /// Get a single unit.
    pub async fn get(&self, name: &UnitName) -> Result<Unit> {
        self.inner.read_as(&unit_path(name), &()).await
    }

    /// Create a unit, or replace an existing one with the same name.
    pub async fn create(&self, unit: &Unit) -> Result<()> {
        tracing::debug!(unit = %unit.name, "creating unit");
        self.inner.replace(&unit_path(&unit.name), unit).await
    }

    /// Drive an existing unit towards `state`.
    pub async fn set_desired_state(&self, name: &UnitName, state: DesiredState) -> Result<()> {
        #[derive(serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Request {
            desired_state: DesiredState,
        }

        tracing::debug!(unit = %name, %state, "setting desired state");
        self.inner
            .replace(
                &unit_path(name),
                &Request {
                    desired_state: state,
                },
            )
            .await
    }

    /// Make fleet aware of the unit without scheduling it.
    pub async fn submit(&self, name: &UnitName) -> Result<()> {
        self.set_desired_state(name, DesiredState::Inactive).await
    }

    /// Schedule the unit and load it into systemd.
    pub async fn load(&self, name: &UnitName) -> Result<()> {
        self.set_desired_state(name, DesiredState::Loaded).await
    }

    /// Schedule and start the unit.
    pub async fn start(&self, name: &UnitName) -> Result<()> {
        self.set_desired_state(name, DesiredState::Launched).await
    }

    /// Stop the unit, leaving it loaded.
    pub async fn stop(&self, name: &UnitName) -> Result<()> {
        self.set_desired_state(name, DesiredState::Loaded).await
    }

    /// Remove the unit from the cluster.
    pub async fn destroy(&self, name: &UnitName) -> Result<()> {
        tracing::debug!(unit = %name, "destroying unit");
        self.inner.remove(&unit_path(name), &()).await
    }
}

fn unit_path(name: &UnitName) -> String {
    format!("units/{}", name)
}
