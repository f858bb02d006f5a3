//! Motorbike

use std::fmt;

use serde::{Deserialize, Serialize};

use super::kind::{EnergyUnit, VehicleKind};
use super::vehicle::{RefuelReport, Vehicle, VehicleIdentity};
use crate::service::add_fuel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bike {
    pub identity: VehicleIdentity,
    /// Liters
    pub fuel_level: f64,
    /// e.g. "Standard"
    pub bike_type: String,
    /// cc
    pub engine_capacity: u32,
}

impl Bike {
    pub fn new(
        identity: VehicleIdentity,
        fuel_level: f64,
        bike_type: impl Into<String>,
        engine_capacity: u32,
    ) -> Self {
        Self {
            identity,
            fuel_level,
            bike_type: bike_type.into(),
            engine_capacity,
        }
    }
}

impl Vehicle for Bike {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Bike
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
            kind: VehicleKind::Bike,
            amount,
            level: self.fuel_level,
            unit: EnergyUnit::Liters,
            clamped: false,
        }
    }
}

impl fmt::Display for Bike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Bike ---")?;
        self.identity.write_lines(f)?;
        writeln!(f, "Fuel: {}L", self.fuel_level)?;
        writeln!(f, "Type: {}", self.bike_type)?;
        write!(f, "Engine CC: {}", self.engine_capacity)
    }
}
