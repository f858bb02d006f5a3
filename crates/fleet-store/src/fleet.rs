//! Ordered registry of owned vehicles

use std::fmt;

use chrono::{DateTime, Utc};
use fleet_domain::{EnergyUnit, EngineEvent, RefuelReport, Vehicle, VehicleKind};
use fleet_types::VehicleId;
use serde::Serialize;
use tracing::{debug, info, warn};

/// One vehicle held by a fleet, with the handle issued when it was added
#[derive(Debug)]
pub struct FleetEntry {
    id: VehicleId,
    added_at: DateTime<Utc>,
    vehicle: Box<dyn Vehicle>,
}

impl FleetEntry {
    pub fn id(&self) -> VehicleId {
        self.id
    }

    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }

    pub fn vehicle(&self) -> &dyn Vehicle {
        self.vehicle.as_ref()
    }

    /// Serializable view of this entry at position `index`
    pub fn summary(&self, index: usize) -> VehicleSummary {
        let identity = self.vehicle.identity();
        VehicleSummary {
            index,
            id: self.id,
            kind: self.vehicle.kind(),
            make: identity.make.clone(),
            model: identity.model.clone(),
            year: identity.year,
            energy_level: self.vehicle.energy_level(),
            energy_unit: self.vehicle.energy_unit(),
            fuel_efficiency: self.vehicle.fuel_efficiency(),
            added_at: self.added_at,
        }
    }
}

/// Flat, serializable description of a fleet member
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleSummary {
    pub index: usize,
    pub id: VehicleId,
    pub kind: VehicleKind,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub energy_level: f64,
    pub energy_unit: EnergyUnit,
    pub fuel_efficiency: f64,
    pub added_at: DateTime<Utc>,
}

/// Exclusive owner of a sequence of vehicles.
///
/// Insertion order is significant and addressable by index. Vehicles are
/// dropped exactly once: either by `remove_vehicle`, `clear`, or when the
/// fleet itself is dropped.
#[derive(Debug, Default)]
pub struct Fleet {
    entries: Vec<FleetEntry>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vehicle and take ownership of it
    pub fn add_vehicle(&mut self, vehicle: Box<dyn Vehicle>) -> VehicleId {
        let id = VehicleId::new();
        debug!(%id, kind = %vehicle.kind(), model = %vehicle.identity().model, "vehicle added");
        self.entries.push(FleetEntry {
            id,
            added_at: Utc::now(),
            vehicle,
        });
        id
    }

    /// Remove and drop the vehicle with the given handle.
    ///
    /// Returns `false` and leaves the fleet untouched when no such vehicle
    /// is held.
    pub fn remove_vehicle(&mut self, id: VehicleId) -> bool {
        match self.position(id) {
            Some(index) => {
                let entry = self.entries.remove(index);
                debug!(%id, index, kind = %entry.vehicle.kind(), "vehicle removed");
                true
            }
            None => {
                warn!(%id, "vehicle not found");
                false
            }
        }
    }

    /// Vehicle at `index`, or `None` when out of range
    pub fn get_vehicle(&self, index: usize) -> Option<&dyn Vehicle> {
        self.entries.get(index).map(|e| e.vehicle.as_ref())
    }

    pub fn get_vehicle_mut(&mut self, index: usize) -> Option<&mut dyn Vehicle> {
        let entry = self.entries.get_mut(index)?;
        let vehicle: &mut dyn Vehicle = entry.vehicle.as_mut();
        Some(vehicle)
    }

    /// Handle of the vehicle at `index`
    pub fn id_at(&self, index: usize) -> Option<VehicleId> {
        self.entries.get(index).map(|e| e.id)
    }

    /// Current index of the vehicle with the given handle
    pub fn position(&self, id: VehicleId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn get_by_id(&self, id: VehicleId) -> Option<&dyn Vehicle> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.vehicle.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FleetEntry> {
        self.entries.iter()
    }

    /// Start every engine in insertion order
    pub fn start_engine(&self) -> Vec<EngineEvent> {
        info!(count = self.entries.len(), "starting all engines");
        self.entries.iter().map(|e| e.vehicle.start_engine()).collect()
    }

    /// Stop every engine in insertion order
    pub fn stop_engine(&self) -> Vec<EngineEvent> {
        info!(count = self.entries.len(), "stopping all engines");
        self.entries.iter().map(|e| e.vehicle.stop_engine()).collect()
    }

    /// Refuel (or charge) every vehicle by `amount`, in insertion order
    pub fn refuel_all(&mut self, amount: f64) -> Vec<RefuelReport> {
        info!(count = self.entries.len(), amount, "refueling all vehicles");
        self.entries
            .iter_mut()
            .map(|e| e.vehicle.refuel(amount))
            .collect()
    }

    /// Full textual description of every member
    pub fn display_fleet(&self) -> String {
        self.to_string()
    }

    pub fn summaries(&self) -> Vec<VehicleSummary> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, e)| e.summary(index))
            .collect()
    }

    /// Drop every vehicle and empty the fleet; returns how many were dropped
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        debug!(count, "fleet cleared");
        count
    }
}

impl fmt::Display for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--- Fleet ---")?;
        for entry in &self.entries {
            write!(f, "\n\n{}", entry.vehicle)?;
        }
        Ok(())
    }
}

impl Drop for Fleet {
    fn drop(&mut self) {
        if !self.entries.is_empty() {
            debug!(count = self.entries.len(), "fleet dropped with vehicles");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_domain::{Bike, Car, ElectricVehicle, EngineState, Truck, VehicleIdentity};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    fn scenario_fleet() -> Fleet {
        let mut fleet = Fleet::new();
        fleet.add_vehicle(Box::new(Car::new(
            VehicleIdentity::new("Honda", "Civic", 2021),
            40.0,
            4,
            "Petrol",
        )));
        fleet.add_vehicle(Box::new(Truck::new(
            VehicleIdentity::new("Volvo", "FH16", 2020),
            100.0,
            20.0,
            "Diesel",
        )));
        fleet.add_vehicle(Box::new(Bike::new(
            VehicleIdentity::new("Suzuki", "GS150", 2022),
            15.0,
            "Standard",
            150,
        )));
        fleet.add_vehicle(Box::new(ElectricVehicle::new(
            VehicleIdentity::new("Tesla", "Model X", 2023),
            100,
            0.0,
        )));
        fleet
    }

    fn levels(fleet: &Fleet) -> Vec<f64> {
        fleet.iter().map(|e| e.vehicle().energy_level()).collect()
    }

    /// Counts how many instances are alive, to check single destruction
    #[derive(Debug)]
    struct Tracked {
        identity: VehicleIdentity,
        alive: Arc<AtomicUsize>,
    }

    impl Tracked {
        fn new(alive: &Arc<AtomicUsize>) -> Self {
            alive.fetch_add(1, Ordering::SeqCst);
            Self {
                identity: VehicleIdentity::new("Test", "Tracked", 2000),
                alive: Arc::clone(alive),
            }
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.alive.fetch_sub(1, Ordering::SeqCst);
        }
    }

    impl fmt::Display for Tracked {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "--- Tracked ---")
        }
    }

    impl Vehicle for Tracked {
        fn kind(&self) -> VehicleKind {
            VehicleKind::Car
        }

        fn identity(&self) -> &VehicleIdentity {
            &self.identity
        }

        fn energy_level(&self) -> f64 {
            0.0
        }

        fn refuel(&mut self, amount: f64) -> RefuelReport {
            RefuelReport {
                kind: VehicleKind::Car,
                amount,
                level: 0.0,
                unit: EnergyUnit::Liters,
                clamped: false,
            }
        }
    }

    #[test]
    fn test_add_increases_len() {
        let mut fleet = Fleet::new();
        assert!(fleet.is_empty());
        fleet.add_vehicle(Box::new(Car::new(
            VehicleIdentity::new("Honda", "Civic", 2021),
            40.0,
            4,
            "Petrol",
        )));
        assert_eq!(fleet.len(), 1);
    }

    #[test]
    fn test_refuel_all_scenario() {
        let mut fleet = scenario_fleet();
        let reports = fleet.refuel_all(10.0);
        assert_eq!(reports.len(), 4);
        assert_eq!(levels(&fleet), vec![50.0, 110.0, 25.0, 10.0]);

        let ev = fleet.get_vehicle_mut(3).unwrap();
        let report = ev.refuel(95.0);
        assert!((report.level - 100.0).abs() < f64::EPSILON);
        assert!(report.clamped);
    }

    #[test]
    fn test_bulk_operations_follow_insertion_order() {
        let mut fleet = scenario_fleet();
        let expected = vec![
            VehicleKind::Car,
            VehicleKind::Truck,
            VehicleKind::Bike,
            VehicleKind::Electric,
        ];

        let started = fleet.start_engine();
        assert_eq!(started.iter().map(|e| e.kind).collect::<Vec<_>>(), expected);
        assert!(started.iter().all(|e| e.state == EngineState::Started));

        let stopped = fleet.stop_engine();
        assert_eq!(stopped.iter().map(|e| e.kind).collect::<Vec<_>>(), expected);
        assert!(stopped.iter().all(|e| e.state == EngineState::Stopped));

        let refueled = fleet.refuel_all(1.0);
        assert_eq!(refueled.iter().map(|r| r.kind).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_remove_index_zero_shifts() {
        let mut fleet = scenario_fleet();
        let first = fleet.id_at(0).unwrap();
        let second = fleet.id_at(1).unwrap();

        assert!(fleet.remove_vehicle(first));
        assert_eq!(fleet.len(), 3);
        assert_eq!(fleet.id_at(0), Some(second));
        assert_eq!(fleet.get_vehicle(0).unwrap().kind(), VehicleKind::Truck);
    }

    #[test]
    fn test_remove_absent_handle_is_noop() {
        let mut fleet = scenario_fleet();
        let before = fleet.summaries();

        assert!(!fleet.remove_vehicle(VehicleId::new()));
        assert_eq!(fleet.len(), 4);
        assert_eq!(fleet.summaries(), before);
    }

    #[test]
    fn test_remove_twice_reports_not_found() {
        let mut fleet = scenario_fleet();
        let id = fleet.id_at(2).unwrap();
        assert!(fleet.remove_vehicle(id));
        assert!(!fleet.remove_vehicle(id));
        assert_eq!(fleet.len(), 3);
    }

    #[test]
    fn test_identical_vehicles_have_distinct_handles() {
        let mut fleet = Fleet::new();
        let make = || {
            Box::new(Car::new(
                VehicleIdentity::new("Honda", "Civic", 2021),
                40.0,
                4,
                "Petrol",
            ))
        };
        let a = fleet.add_vehicle(make());
        let b = fleet.add_vehicle(make());
        assert_ne!(a, b);

        assert!(fleet.remove_vehicle(b));
        assert_eq!(fleet.id_at(0), Some(a));
    }

    #[test]
    fn test_lookup_by_handle() {
        let before = Utc::now();
        let fleet = scenario_fleet();
        let bike_id = fleet.id_at(2).unwrap();

        assert_eq!(fleet.position(bike_id), Some(2));
        assert_eq!(fleet.get_by_id(bike_id).unwrap().kind(), VehicleKind::Bike);
        assert!(fleet.get_by_id(VehicleId::new()).is_none());

        let entry = fleet.iter().find(|e| e.id() == bike_id).unwrap();
        assert!(entry.added_at() >= before);
        assert_eq!(entry.vehicle().identity().model, "GS150");
    }

    /// Records the level of every event emitted while installed
    struct LevelRecorder(Arc<Mutex<Vec<Level>>>);

    impl<S: Subscriber> Layer<S> for LevelRecorder {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            self.0.lock().unwrap().push(*event.metadata().level());
        }
    }

    #[test]
    fn test_remove_absent_handle_warns() {
        let levels = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(LevelRecorder(Arc::clone(&levels)));
        let mut fleet = scenario_fleet();

        tracing::subscriber::with_default(subscriber, || {
            assert!(!fleet.remove_vehicle(VehicleId::new()));
        });

        assert_eq!(*levels.lock().unwrap(), vec![Level::WARN]);
    }

    #[test]
    fn test_get_vehicle_out_of_range() {
        let fleet = scenario_fleet();
        assert!(fleet.get_vehicle(4).is_none());
        assert!(fleet.id_at(100).is_none());
        assert!(Fleet::new().get_vehicle(0).is_none());
    }

    #[test]
    fn test_display_fleet_lists_members_in_order() {
        let fleet = scenario_fleet();
        let text = fleet.display_fleet();
        assert!(text.starts_with("--- Fleet ---"));
        let car = text.find("--- Car ---").unwrap();
        let truck = text.find("--- Truck ---").unwrap();
        let bike = text.find("--- Bike ---").unwrap();
        let ev = text.find("--- Electric Vehicle ---").unwrap();
        assert!(car < truck && truck < bike && bike < ev);
    }

    #[test]
    fn test_summaries() {
        let fleet = scenario_fleet();
        let summaries = fleet.summaries();
        assert_eq!(summaries.len(), 4);
        assert_eq!(summaries[3].index, 3);
        assert_eq!(summaries[3].kind, VehicleKind::Electric);
        assert_eq!(summaries[3].energy_unit, EnergyUnit::KilowattHours);
        assert_eq!(summaries[0].fuel_efficiency, 25.0);
        assert_eq!(summaries[0].make, "Honda");

        let json = serde_json::to_value(&summaries[1]).unwrap();
        assert_eq!(json["kind"], "truck");
        assert_eq!(json["energy_unit"], "liters");
    }

    #[test]
    fn test_each_vehicle_dropped_exactly_once() {
        let alive = Arc::new(AtomicUsize::new(0));
        {
            let mut fleet = Fleet::new();
            let first = fleet.add_vehicle(Box::new(Tracked::new(&alive)));
            fleet.add_vehicle(Box::new(Tracked::new(&alive)));
            fleet.add_vehicle(Box::new(Tracked::new(&alive)));
            assert_eq!(alive.load(Ordering::SeqCst), 3);

            assert!(fleet.remove_vehicle(first));
            assert_eq!(alive.load(Ordering::SeqCst), 2);

            assert!(!fleet.remove_vehicle(first));
            assert_eq!(alive.load(Ordering::SeqCst), 2);
        }
        assert_eq!(alive.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_clear_drops_everything() {
        let alive = Arc::new(AtomicUsize::new(0));
        let mut fleet = Fleet::new();
        fleet.add_vehicle(Box::new(Tracked::new(&alive)));
        fleet.add_vehicle(Box::new(Tracked::new(&alive)));

        assert_eq!(fleet.clear(), 2);
        assert!(fleet.is_empty());
        assert_eq!(alive.load(Ordering::SeqCst), 0);
        assert_eq!(fleet.clear(), 0);
    }
}
