//! Demonstration scenario
//!
//! Builds the four-vehicle roster, then runs: start all, refuel all,
//! stop all, display, remove one position, display again.

use fleet_domain::{
    Bike, Car, ElectricVehicle, EngineEvent, RefuelReport, Truck, Vehicle, VehicleIdentity,
    VehicleKind,
};
use fleet_store::VehicleSummary;
use fleet_types::{Result, VehicleId};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::policy::InputPolicy;
use crate::service::FleetService;

/// The demo fleet, in insertion order
pub fn demo_roster() -> Vec<Box<dyn Vehicle>> {
    vec![
        Box::new(Car::new(
            VehicleIdentity::new("Honda", "Civic", 2021),
            40.0,
            4,
            "Petrol",
        )),
        Box::new(Truck::new(
            VehicleIdentity::new("Volvo", "FH16", 2020),
            100.0,
            20.0,
            "Diesel",
        )),
        Box::new(Bike::new(
            VehicleIdentity::new("Suzuki", "GS150", 2022),
            15.0,
            "Standard",
            150,
        )),
        Box::new(ElectricVehicle::new(
            VehicleIdentity::new("Tesla", "Model X", 2023),
            100,
            60.0,
        )),
    ]
}

/// Knobs for a demo run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoOptions {
    pub refuel_amount: f64,
    pub remove_index: usize,
    pub policy: InputPolicy,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for DemoOptions {
    fn from(config: &Config) -> Self {
        Self {
            refuel_amount: config.refuel_amount,
            remove_index: config.remove_index,
            policy: config.input_policy(),
        }
    }
}

/// One step of the demo transcript
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum DemoStep {
    Started {
        events: Vec<EngineEvent>,
    },
    Refueled {
        amount: f64,
        reports: Vec<RefuelReport>,
    },
    Stopped {
        events: Vec<EngineEvent>,
    },
    Displayed {
        #[serde(skip)]
        text: String,
        vehicles: Vec<VehicleSummary>,
    },
    Removed {
        index: usize,
        id: VehicleId,
        kind: VehicleKind,
    },
    RemoveSkipped {
        index: usize,
        len: usize,
    },
}

/// Full transcript of a demo run
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub steps: Vec<DemoStep>,
    /// Fleet contents after the last step
    pub remaining: Vec<VehicleSummary>,
}

/// Run the demonstration scenario on a fresh fleet
pub fn run_demo(options: &DemoOptions) -> Result<DemoReport> {
    let mut service = FleetService::new(options.policy);
    for vehicle in demo_roster() {
        service.register(vehicle)?;
    }
    info!(vehicles = service.fleet().len(), "demo fleet assembled");

    let mut steps = Vec::new();

    steps.push(DemoStep::Started {
        events: service.start_all(),
    });
    steps.push(DemoStep::Refueled {
        amount: options.refuel_amount,
        reports: service.refuel_all(options.refuel_amount)?,
    });
    steps.push(DemoStep::Stopped {
        events: service.stop_all(),
    });
    steps.push(displayed(&service));

    let index = options.remove_index;
    match service.fleet().get_vehicle(index).map(|v| v.kind()) {
        Some(kind) => {
            let id = service.remove_at(index)?;
            steps.push(DemoStep::Removed { index, id, kind });
        }
        None => {
            let len = service.fleet().len();
            warn!(index, len, "no vehicle to remove");
            steps.push(DemoStep::RemoveSkipped { index, len });
        }
    }
    steps.push(displayed(&service));

    let remaining = service.summaries();
    service.shutdown();

    Ok(DemoReport { steps, remaining })
}

fn displayed(service: &FleetService) -> DemoStep {
    DemoStep::Displayed {
        text: service.display(),
        vehicles: service.summaries(),
    }
}
