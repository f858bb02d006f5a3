//! Fleet Service - checked use cases over a fleet
//!
//! Wraps the registry with the configured `InputPolicy` and turns a
//! not-found outcome into an error when the caller named a specific target.

use fleet_domain::{EngineEvent, RefuelReport, Vehicle};
use fleet_store::{Fleet, VehicleSummary};
use fleet_types::{Error, Result, VehicleId};

use crate::policy::InputPolicy;

#[derive(Debug, Default)]
pub struct FleetService {
    fleet: Fleet,
    policy: InputPolicy,
}

impl FleetService {
    pub fn new(policy: InputPolicy) -> Self {
        Self {
            fleet: Fleet::new(),
            policy,
        }
    }

    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Check and add a vehicle, returning its handle
    pub fn register(&mut self, vehicle: Box<dyn Vehicle>) -> Result<VehicleId> {
        self.policy.check_vehicle(&*vehicle)?;
        Ok(self.fleet.add_vehicle(vehicle))
    }

    pub fn start_all(&self) -> Vec<EngineEvent> {
        self.fleet.start_engine()
    }

    pub fn stop_all(&self) -> Vec<EngineEvent> {
        self.fleet.stop_engine()
    }

    pub fn refuel_all(&mut self, amount: f64) -> Result<Vec<RefuelReport>> {
        self.policy.check_refuel_amount(amount)?;
        Ok(self.fleet.refuel_all(amount))
    }

    /// Remove by handle; `Error::VehicleNotFound` when it is not held
    pub fn remove(&mut self, id: VehicleId) -> Result<()> {
        if self.fleet.remove_vehicle(id) {
            Ok(())
        } else {
            Err(Error::VehicleNotFound(id))
        }
    }

    /// Remove whatever sits at `index`, returning its former handle
    pub fn remove_at(&mut self, index: usize) -> Result<VehicleId> {
        let id = self.fleet.id_at(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.fleet.len(),
        })?;
        self.remove(id)?;
        Ok(id)
    }

    pub fn display(&self) -> String {
        self.fleet.display_fleet()
    }

    pub fn summaries(&self) -> Vec<VehicleSummary> {
        self.fleet.summaries()
    }

    /// Tear down the fleet, returning how many vehicles were dropped
    pub fn shutdown(&mut self) -> usize {
        self.fleet.clear()
    }
}
