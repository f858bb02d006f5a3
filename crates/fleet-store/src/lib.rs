//! Fleet registry: exclusive owner of the vehicles it holds

pub mod fleet;
pub mod shared;

pub use fleet::{Fleet, FleetEntry, VehicleSummary};
pub use shared::SharedFleet;
