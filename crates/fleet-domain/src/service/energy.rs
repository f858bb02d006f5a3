//! Fuel and charge arithmetic

/// Adds `amount` liters to a tank. No bounds: negative amounts drain it.
pub fn add_fuel(fuel_level: f64, amount: f64) -> f64 {
    fuel_level + amount
}

/// Result of charging a battery
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargeOutcome {
    pub level: f64,
    pub clamped: bool,
}

/// Adds `amount` kWh, capping the result at `battery_capacity`.
///
/// Only the upper bound is enforced; a negative amount may take the level
/// below zero. A NaN sum caps to the ceiling, so the level never ends up
/// above capacity or undefined.
pub fn charge(charge_level: f64, amount: f64, battery_capacity: u32) -> ChargeOutcome {
    let ceiling = f64::from(battery_capacity);
    let raw = charge_level + amount;
    ChargeOutcome {
        level: raw.min(ceiling),
        clamped: raw.is_nan() || raw > ceiling,
    }
}
