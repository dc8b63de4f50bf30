//! Enumeration types for the fleet API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Target (or current) state of a unit in the cluster.
///
/// `inactive` units are known to fleet but not scheduled, `loaded` units are
/// scheduled onto a machine and loaded into systemd, `launched` units are
/// also started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesiredState {
    /// Submitted but not scheduled
    Inactive,
    /// Scheduled and loaded, not started
    Loaded,
    /// Scheduled, loaded and started
    Launched,
}

impl DesiredState {
    /// The state as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            DesiredState::Inactive => "inactive",
            DesiredState::Loaded => "loaded",
            DesiredState::Launched => "launched",
        }
    }
}

impl fmt::Display for DesiredState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
