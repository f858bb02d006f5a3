//! Vehicle kind tags and energy units

use serde::{Deserialize, Serialize};

use crate::constants::{
    BIKE_FUEL_EFFICIENCY, CAR_FUEL_EFFICIENCY, ELECTRIC_EFFICIENCY, TRUCK_FUEL_EFFICIENCY,
};

/// Closed set of vehicle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Car,
    Truck,
    Bike,
    Electric,
}

impl VehicleKind {
    /// All kinds, in declaration order
    pub const ALL: [VehicleKind; 4] = [
        VehicleKind::Car,
        VehicleKind::Truck,
        VehicleKind::Bike,
        VehicleKind::Electric,
    ];

    /// Display label used in descriptions
    pub fn label(&self) -> &'static str {
        match self {
            VehicleKind::Car => "Car",
            VehicleKind::Truck => "Truck",
            VehicleKind::Bike => "Bike",
            VehicleKind::Electric => "Electric Vehicle",
        }
    }

    /// Subject of engine status lines ("Car engine started.")
    pub fn engine_label(&self) -> &'static str {
        match self {
            VehicleKind::Car => "Car engine",
            VehicleKind::Truck => "Truck engine",
            VehicleKind::Bike => "Bike engine",
            VehicleKind::Electric => "Electric vehicle",
        }
    }

    /// Nominal efficiency rating, independent of any vehicle state
    pub fn fuel_efficiency(&self) -> f64 {
        match self {
            VehicleKind::Car => CAR_FUEL_EFFICIENCY,
            VehicleKind::Truck => TRUCK_FUEL_EFFICIENCY,
            VehicleKind::Bike => BIKE_FUEL_EFFICIENCY,
            VehicleKind::Electric => ELECTRIC_EFFICIENCY,
        }
    }

    pub fn energy_unit(&self) -> EnergyUnit {
        match self {
            VehicleKind::Electric => EnergyUnit::KilowattHours,
            _ => EnergyUnit::Liters,
        }
    }
}

impl std::fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Unit of a vehicle's energy level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyUnit {
    Liters,
    KilowattHours,
}

impl EnergyUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            EnergyUnit::Liters => "L",
            EnergyUnit::KilowattHours => "kWh",
        }
    }
}
