//! Nominal ratings per vehicle kind

/// Fuel efficiency rating for cars
pub const CAR_FUEL_EFFICIENCY: f64 = 25.0;

/// Fuel efficiency rating for trucks
pub const TRUCK_FUEL_EFFICIENCY: f64 = 15.0;

/// Fuel efficiency rating for bikes
pub const BIKE_FUEL_EFFICIENCY: f64 = 40.0;

/// Efficiency rating for electric vehicles
pub const ELECTRIC_EFFICIENCY: f64 = 100.0;

/// First production automobile; years before this are implausible
pub const EARLIEST_MODEL_YEAR: i32 = 1886;
