//! Fleet domain: vehicle variants, their shared capability trait, and the
//! energy calculations they rely on.

pub mod constants;
pub mod model;
pub mod service;

pub use model::{
    Bike, Car, ElectricVehicle, EnergyUnit, EngineEvent, EngineState, RefuelReport, Truck,
    Vehicle, VehicleIdentity, VehicleKind,
};
