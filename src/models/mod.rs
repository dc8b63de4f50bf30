//! Data models for the fleet API.
//!
//! - [`primitives`] - Identifier newtypes (`UnitName`, `MachineId`)
//! - [`enums`] - Unit states
//! - [`unit`] - Units and unit file options
//! - [`machine`] - Cluster machines
//! - [`state`] - systemd unit states

pub mod enums;
pub mod machine;
pub mod primitives;
pub mod state;
pub mod unit;

pub use enums::*;
pub use machine::*;
pub use primitives::*;
pub use state::*;
pub use unit::*;
