//! Passenger car

use std::fmt;

use serde::{Deserialize, Serialize};

use super::kind::{EnergyUnit, VehicleKind};
use super::vehicle::{RefuelReport, Vehicle, VehicleIdentity};
use crate::service::add_fuel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub identity: VehicleIdentity,
    /// Liters
    pub fuel_level: f64,
    pub num_doors: u32,
    /// e.g. "Petrol"
    pub engine_type: String,
}

impl Car {
    pub fn new(
        identity: VehicleIdentity,
        fuel_level: f64,
        num_doors: u32,
        engine_type: impl Into<String>,
    ) -> Self {
        Self {
            identity,
            fuel_level,
            num_doors,
            engine_type: engine_type.into(),
        }
    }
}

impl Vehicle for Car {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Car
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
            kind: VehicleKind::Car,
            amount,
            level: self.fuel_level,
            unit: EnergyUnit::Liters,
            clamped: false,
        }
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Car ---")?;
        self.identity.write_lines(f)?;
        writeln!(f, "Fuel: {}L", self.fuel_level)?;
        writeln!(f, "Doors: {}", self.num_doors)?;
        write!(f, "Engine: {}", self.engine_type)
    }
}
