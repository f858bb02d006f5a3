//! Domain model types

pub mod bike;
pub mod car;
pub mod electric;
pub mod kind;
pub mod truck;
pub mod vehicle;

pub use bike::Bike;
pub use car::Car;
pub use electric::ElectricVehicle;
pub use kind::{EnergyUnit, VehicleKind};
pub use truck::Truck;
pub use vehicle::{EngineEvent, EngineState, RefuelReport, Vehicle, VehicleIdentity};
