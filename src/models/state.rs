//! Unit state models.

use serde::{Deserialize, Serialize};

use super::primitives::{MachineId, UnitName};

/// systemd's view of a unit on the machine it is scheduled on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitState {
    /// Unit name
    pub name: UnitName,
    /// Hash of the unit file contents
    #[serde(default)]
    pub hash: String,
    /// Machine reporting the state
    #[serde(rename = "machineID")]
    pub machine_id: MachineId,
    /// systemd `LoadState`, e.g. `loaded`
    #[serde(default)]
    pub systemd_load_state: String,
    /// systemd `ActiveState`, e.g. `active`
    #[serde(default)]
    pub systemd_active_state: String,
    /// systemd `SubState`, e.g. `running`
    #[serde(default)]
    pub systemd_sub_state: String,
}

impl UnitState {
    /// Returns `true` if systemd reports the unit as active.
    pub fn is_active(&self) -> bool {
        self.systemd_active_state == "active"
    }
}
