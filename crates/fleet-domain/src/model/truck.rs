//! Cargo truck

use std::fmt;

use serde::{Deserialize, Serialize};

use super::kind::{EnergyUnit, VehicleKind};
use super::vehicle::{RefuelReport, Vehicle, VehicleIdentity};
use crate::service::add_fuel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truck {
    pub identity: VehicleIdentity,
    /// Liters
    pub fuel_level: f64,
    /// Tons
    pub cargo_capacity: f64,
    pub engine_type: String,
}

impl Truck {
    pub fn new(
        identity: VehicleIdentity,
        fuel_level: f64,
        cargo_capacity: f64,
        engine_type: impl Into<String>,
    ) -> Self {
        Self {
            identity,
            fuel_level,
            cargo_capacity,
            engine_type: engine_type.into(),
        }
    }
}

impl Vehicle for Truck {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Truck
    }

    fn identity(&self) -> &VehicleIdentity {
        &self.identity
    }

    fn energy_level(&self) -> f64 {
        self.fuel_level
    }

    fn refuel(&mut self, amount: f64) -> RefuelReport {
        self.fuel_level = add_fuel(self.fuel_level, amount);
        RefuelReport {
            kind: VehicleKind::Truck,
            amount,
            level: self.fuel_level,
            unit: EnergyUnit::Liters,
            clamped: false,
        }
    }
}

impl fmt::Display for Truck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Truck ---")?;
        self.identity.write_lines(f)?;
        writeln!(f, "Fuel: {}L", self.fuel_level)?;
        writeln!(f, "Cargo: {} tons", self.cargo_capacity)?;
        write!(f, "Engine: {}", self.engine_type)
    }
}
