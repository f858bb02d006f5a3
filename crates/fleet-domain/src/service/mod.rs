//! Domain services

pub mod energy;

pub use energy::{add_fuel, charge, ChargeOutcome};
