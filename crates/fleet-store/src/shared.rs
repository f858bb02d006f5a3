//! Lock-guarded fleet for callers that share one registry across threads

use std::sync::{Arc, Mutex, MutexGuard};

use fleet_domain::{EngineEvent, RefuelReport, Vehicle};
use fleet_types::{Error, Result, VehicleId};

use crate::fleet::{Fleet, VehicleSummary};

/// Cloneable handle to a single fleet.
///
/// Every structural operation and every iteration runs under one exclusive
/// lock, so adds and removals never interleave with a bulk pass.
#[derive(Debug, Clone, Default)]
pub struct SharedFleet {
    inner: Arc<Mutex<Fleet>>,
}

impl SharedFleet {
    pub fn new(fleet: Fleet) -> Self {
        Self {
            inner: Arc::new(Mutex::new(fleet)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Fleet>> {
        self.inner.lock().map_err(|_| Error::LockPoisoned)
    }

    /// Run `f` with exclusive access to the fleet
    pub fn with<R>(&self, f: impl FnOnce(&mut Fleet) -> R) -> Result<R> {
        let mut fleet = self.lock()?;
        Ok(f(&mut fleet))
    }

    pub fn add_vehicle(&self, vehicle: Box<dyn Vehicle>) -> Result<VehicleId> {
        Ok(self.lock()?.add_vehicle(vehicle))
    }

    pub fn remove_vehicle(&self, id: VehicleId) -> Result<bool> {
        Ok(self.lock()?.remove_vehicle(id))
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }

    pub fn start_engine(&self) -> Result<Vec<EngineEvent>> {
        Ok(self.lock()?.start_engine())
    }

    pub fn stop_engine(&self) -> Result<Vec<EngineEvent>> {
        Ok(self.lock()?.stop_engine())
    }

    pub fn refuel_all(&self, amount: f64) -> Result<Vec<RefuelReport>> {
        Ok(self.lock()?.refuel_all(amount))
    }

    pub fn display_fleet(&self) -> Result<String> {
        Ok(self.lock()?.display_fleet())
    }

    pub fn summaries(&self) -> Result<Vec<VehicleSummary>> {
        Ok(self.lock()?.summaries())
    }

    pub fn clear(&self) -> Result<usize> {
        Ok(self.lock()?.clear())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_domain::{Bike, ElectricVehicle, VehicleIdentity};
    use std::thread;

    fn bike(n: i32) -> Box<dyn Vehicle> {
        Box::new(Bike::new(
            VehicleIdentity::new("Suzuki", "GS150", 2000 + n),
            15.0,
            "Standard",
            150,
        ))
    }

    #[test]
    fn test_concurrent_adds_are_all_kept() {
        let shared = SharedFleet::default();

        thread::scope(|s| {
            for t in 0..4 {
                let shared = shared.clone();
                s.spawn(move || {
                    for n in 0..10 {
                        shared.add_vehicle(bike(t * 10 + n)).unwrap();
                    }
                });
            }
        });

        assert_eq!(shared.len().unwrap(), 40);
    }

    #[test]
    fn test_concurrent_refuel_visits_each_vehicle_once_per_pass() {
        let mut fleet = Fleet::new();
        for n in 0..5 {
            fleet.add_vehicle(bike(n));
        }
        let shared = SharedFleet::new(fleet);

        thread::scope(|s| {
            for _ in 0..3 {
                let shared = shared.clone();
                s.spawn(move || {
                    let reports = shared.refuel_all(1.0).unwrap();
                    assert_eq!(reports.len(), 5);
                });
            }
        });

        let levels: Vec<f64> = shared
            .summaries()
            .unwrap()
            .iter()
            .map(|s| s.energy_level)
            .collect();
        assert_eq!(levels, vec![18.0; 5]);
    }

    #[test]
    fn test_remove_through_shared_handle() {
        let shared = SharedFleet::default();
        let id = shared
            .add_vehicle(Box::new(ElectricVehicle::new(
                VehicleIdentity::new("Tesla", "Model X", 2023),
                100,
                60.0,
            )))
            .unwrap();

        assert!(shared.remove_vehicle(id).unwrap());
        assert!(!shared.remove_vehicle(id).unwrap());
        assert!(shared.is_empty().unwrap());
    }

    #[test]
    fn test_with_gives_exclusive_access() {
        let shared = SharedFleet::default();
        shared.add_vehicle(bike(1)).unwrap();
        let kind = shared
            .with(|fleet| fleet.get_vehicle(0).map(|v| v.kind()))
            .unwrap();
        assert_eq!(kind, Some(fleet_domain::VehicleKind::Bike));
    }
}
