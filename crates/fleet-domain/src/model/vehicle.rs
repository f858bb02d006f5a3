//! The capability set every vehicle variant implements

use std::fmt;

use serde::{Deserialize, Serialize};

use super::kind::{EnergyUnit, VehicleKind};

/// Make, model and year, fixed at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleIdentity {
    pub make: String,
    pub model: String,
    pub year: i32,
}

impl VehicleIdentity {
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
        }
    }

    /// Writes the Make/Model/Year lines shared by every description
    pub(crate) fn write_lines(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Make: {}", self.make)?;
        writeln!(f, "Model: {}", self.model)?;
        writeln!(f, "Year: {}", self.year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineState {
    Started,
    Stopped,
}

/// Status emitted by `start_engine` / `stop_engine`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineEvent {
    pub kind: VehicleKind,
    pub state: EngineState,
}

impl fmt::Display for EngineEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.state {
            EngineState::Started => "started",
            EngineState::Stopped => "stopped",
        };
        write!(f, "{} {}.", self.kind.engine_label(), verb)
    }
}

/// Outcome of a refuel or charge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RefuelReport {
    pub kind: VehicleKind,
    /// Amount requested by the caller
    pub amount: f64,
    /// Energy level after the operation
    pub level: f64,
    pub unit: EnergyUnit,
    /// True when the level was capped at capacity
    pub clamped: bool,
}

impl fmt::Display for RefuelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            EnergyUnit::Liters => write!(
                f,
                "Refueling {}... added {} liters, fuel now {} L",
                self.kind.label().to_lowercase(),
                self.amount,
                self.level
            ),
            EnergyUnit::KilowattHours => {
                write!(f, "Charging electric vehicle... charged to {} kWh", self.level)?;
                if self.clamped {
                    write!(f, " (battery full)")?;
                }
                Ok(())
            }
        }
    }
}

/// Behaviour shared by all vehicle variants.
///
/// `Display` renders the multi-line description; `display()` is a
/// convenience for callers that want an owned string.
pub trait Vehicle: fmt::Debug + fmt::Display + Send {
    fn kind(&self) -> VehicleKind;

    fn identity(&self) -> &VehicleIdentity;

    /// Current fuel (liters) or charge (kWh)
    fn energy_level(&self) -> f64;

    /// Adds fuel or charge and reports the resulting level
    fn refuel(&mut self, amount: f64) -> RefuelReport;

    fn start_engine(&self) -> EngineEvent {
        EngineEvent {
            kind: self.kind(),
            state: EngineState::Started,
        }
    }

    fn stop_engine(&self) -> EngineEvent {
        EngineEvent {
            kind: self.kind(),
            state: EngineState::Stopped,
        }
    }

    fn fuel_efficiency(&self) -> f64 {
        self.kind().fuel_efficiency()
    }

    fn energy_unit(&self) -> EnergyUnit {
        self.kind().energy_unit()
    }

    fn display(&self) -> String {
        self.to_string()
    }
}
