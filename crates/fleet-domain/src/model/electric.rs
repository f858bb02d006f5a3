//! Battery electric vehicle

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::kind::{EnergyUnit, VehicleKind};
use super::vehicle::{RefuelReport, Vehicle, VehicleIdentity};
use crate::service::charge;

/// Electric vehicle. Charge never exceeds `battery_capacity` after a
/// `refuel` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectricVehicle {
    pub identity: VehicleIdentity,
    /// kWh ceiling
    pub battery_capacity: u32,
    /// kWh
    pub charge_level: f64,
}

impl ElectricVehicle {
    pub fn new(identity: VehicleIdentity, battery_capacity: u32, charge_level: f64) -> Self {
        Self {
            identity,
            battery_capacity,
            charge_level,
        }
    }
}

impl Vehicle for ElectricVehicle {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Electric
    }

    fn identity(&self) -> &VehicleIdentity {
        &self.identity
    }

    fn energy_level(&self) -> f64 {
        self.charge_level
    }

    fn refuel(&mut self, amount: f64) -> RefuelReport {
        let outcome = charge(self.charge_level, amount, self.battery_capacity);
        if outcome.clamped {
            debug!(
                model = %self.identity.model,
                capacity = self.battery_capacity,
                "charge capped at battery capacity"
            );
        }
        self.charge_level = outcome.level;
        RefuelReport {
            kind: VehicleKind::Electric,
            amount,
            level: self.charge_level,
            unit: EnergyUnit::KilowattHours,
            clamped: outcome.clamped,
        }
    }
}

impl fmt::Display for ElectricVehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Electric Vehicle ---")?;
        self.identity.write_lines(f)?;
        writeln!(f, "Battery: {} kWh", self.battery_capacity)?;
        write!(f, "Charge: {} kWh", self.charge_level)
    }
}
