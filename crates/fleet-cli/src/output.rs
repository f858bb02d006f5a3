//! Output formatting module

use fleet_app::{DemoReport, DemoStep};
use fleet_domain::{EnergyUnit, VehicleKind};
use fleet_types::{OutputFormat, Result};
use serde::Serialize;

/// One row of the efficiency table
#[derive(Debug, Clone, Serialize)]
pub struct EfficiencyRow {
    pub kind: VehicleKind,
    pub rating: f64,
    pub unit: EnergyUnit,
}

pub fn efficiency_rows() -> Vec<EfficiencyRow> {
    VehicleKind::ALL
        .iter()
        .map(|kind| EfficiencyRow {
            kind: *kind,
            rating: kind.fuel_efficiency(),
            unit: kind.energy_unit(),
        })
        .collect()
}

pub fn output_efficiency(output_format: OutputFormat) -> Result<()> {
    let rows = efficiency_rows();
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("Fuel Efficiency");
    println!("===============");
    for row in rows {
        println!("{:<18} {:>6.1}  ({})", row.kind.label(), row.rating, row.unit.symbol());
    }
    Ok(())
}

pub fn output_demo(output_format: OutputFormat, report: &DemoReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    for step in &report.steps {
        println!("{}", render_step(step));
    }
    Ok(())
}

/// Text form of one demo step
pub fn render_step(step: &DemoStep) -> String {
    match step {
        DemoStep::Started { events } | DemoStep::Stopped { events } => events
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
        DemoStep::Refueled { reports, .. } => reports
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
        DemoStep::Displayed { text, .. } => format!("\n{}\n", text),
        DemoStep::Removed { index, kind, .. } => {
            format!("{} at index {} removed from fleet.", kind.label(), index)
        }
        DemoStep::RemoveSkipped { index, len } => {
            format!("Vehicle not found: no index {} in a fleet of {}.", index, len)
        }
    }
}
