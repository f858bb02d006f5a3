//! Input checks applied before values reach the domain
//!
//! The domain accepts any refuel amount and any model year. Callers that
//! want guard rails opt into `InputPolicy::Strict`.

use fleet_domain::constants::EARLIEST_MODEL_YEAR;
use fleet_domain::Vehicle;
use fleet_types::{Error, Result};
use tracing::warn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputPolicy {
    /// Pass everything through, logging a warning for suspicious values
    #[default]
    Permissive,
    /// Reject suspicious values with `Error::InvalidInput`
    Strict,
}

impl InputPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            InputPolicy::Strict
        } else {
            InputPolicy::Permissive
        }
    }

    /// Negative and non-finite amounts are suspicious
    pub fn check_refuel_amount(&self, amount: f64) -> Result<()> {
        if amount.is_finite() && amount >= 0.0 {
            return Ok(());
        }
        self.flag(format!("refuel amount must be a non-negative number, got {}", amount))
    }

    /// Years before the first production automobile are suspicious
    pub fn check_year(&self, year: i32) -> Result<()> {
        if year >= EARLIEST_MODEL_YEAR {
            return Ok(());
        }
        self.flag(format!(
            "model year {} is before {}",
            year, EARLIEST_MODEL_YEAR
        ))
    }

    /// Checks applied when a vehicle is registered
    pub fn check_vehicle(&self, vehicle: &dyn Vehicle) -> Result<()> {
        self.check_year(vehicle.identity().year)?;
        let level = vehicle.energy_level();
        if level.is_finite() && level >= 0.0 {
            return Ok(());
        }
        self.flag(format!("initial energy level must be non-negative, got {}", level))
    }

    fn flag(&self, message: String) -> Result<()> {
        match self {
            InputPolicy::Strict => Err(Error::InvalidInput(message)),
            InputPolicy::Permissive => {
                warn!("{}", message);
                Ok(())
            }
        }
    }
}
