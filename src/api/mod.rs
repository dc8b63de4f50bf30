//! API service modules for fleet endpoints.
//!
//! Each service wraps one resource of the fleet API on top of the request
//! executor in [`client`](crate::client).

mod machines;
mod states;
mod units;

pub use machines::MachinesService;
pub use states::{StatesQuery, StatesService};
pub use units::UnitsService;
