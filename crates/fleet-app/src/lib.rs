//! Application service layer - config, input policy, demo scenario

pub mod config;
pub mod demo;
pub mod policy;
pub mod service;

pub use config::Config;
pub use demo::{demo_roster, run_demo, DemoOptions, DemoReport, DemoStep};
pub use policy::InputPolicy;
pub use service::FleetService;
