//! Unit states service.

use std::sync::Arc;

use serde::Serialize;

use crate::client::ClientInner;
use crate::models::{MachineId, UnitName, UnitState};
use crate::Result;

/// Service for querying systemd unit states.
///
/// # Example
///
/// ```no_run
/// use fleet_rs::api::StatesQuery;
/// use fleet_rs::MachineId;
///
/// # async fn example(client: fleet_rs::FleetClient) -> fleet_rs::Result<()> {
/// let query = StatesQuery::default().machine(MachineId::new("2c0f4b5e"));
/// for state in client.states().list(Some(query)).await? {
///     println!("{}: {}", state.name, state.systemd_sub_state);
/// }
/// # Ok(())
/// # }
/// ```
pub struct StatesService {
    inner: Arc<ClientInner>,
}

/// Filters for listing unit states.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatesQuery {
    /// Only states reported by this machine
    #[serde(rename = "machineID", skip_serializing_if = "Option::is_none")]
    pub machine_id: Option<MachineId>,
    /// Only states of this unit
    #[serde(rename = "unitName", skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<UnitName>,
}

impl StatesQuery {
    /// Filter by machine.
    pub fn machine(mut self, machine_id: MachineId) -> Self {
        self.machine_id = Some(machine_id);
        self
    }

    /// Filter by unit.
    pub fn unit(mut self, unit_name: UnitName) -> Self {
        self.unit_name = Some(unit_name);
        self
    }
}

impl StatesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List unit states, across every page.
    pub async fn list(&self, query: Option<StatesQuery>) -> Result<Vec<UnitState>> {
        #[derive(serde::Deserialize)]
        struct Response {
            #[serde(default)]
            states: Vec<UnitState>,
        }

        let query = query.unwrap_or_default();
        let response: Response = self.inner.read_as("state", &query).await?;
        Ok(response.states)
    }
}
