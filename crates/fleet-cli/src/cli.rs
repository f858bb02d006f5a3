//! CLI definition using clap

use clap::{Parser, Subcommand};
use fleet_types::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "fleet-manager")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Vehicle fleet simulation: start, refuel, display and retire vehicles")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logging on stderr)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the demonstration scenario on the built-in four-vehicle fleet
    Demo {
        /// Amount added to every vehicle. Uses config value if not specified.
        #[arg(long, short = 'r', allow_negative_numbers = true)]
        refuel: Option<f64>,

        /// Position to remove after the first display. Uses config value if not specified.
        #[arg(long)]
        remove_index: Option<usize>,

        /// Reject negative amounts and implausible years (overrides config)
        #[arg(long)]
        strict: bool,
    },

    /// List the nominal efficiency rating of each vehicle kind
    Efficiency,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set the demo refuel amount
        #[arg(long, allow_negative_numbers = true)]
        set_refuel: Option<f64>,

        /// Set the demo remove index
        #[arg(long)]
        set_remove_index: Option<usize>,

        /// Enable/disable strict input checks
        #[arg(long)]
        set_strict: Option<bool>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
