//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{output_demo, output_efficiency};
use fleet_app::{run_demo, Config, DemoOptions, InputPolicy};
use fleet_types::{OutputFormat, Result};
use tracing::debug;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Demo {
            refuel,
            remove_index,
            strict,
        } => {
            let mut options = DemoOptions::from(&config);
            if let Some(amount) = refuel {
                options.refuel_amount = amount;
            }
            if let Some(index) = remove_index {
                options.remove_index = index;
            }
            if strict {
                options.policy = InputPolicy::Strict;
            }
            cmd_demo(&options, output_format)
        }

        Commands::Efficiency => output_efficiency(output_format),

        Commands::Config {
            show,
            set_output,
            set_refuel,
            set_remove_index,
            set_strict,
            reset,
        } => cmd_config(
            config,
            show,
            set_output,
            set_refuel,
            set_remove_index,
            set_strict,
            reset,
        ),
    }
}

fn cmd_demo(options: &DemoOptions, output_format: OutputFormat) -> Result<()> {
    debug!(?options, "running demo");
    let report = run_demo(options)?;
    output_demo(output_format, &report)
}

fn cmd_config(
    mut config: Config,
    show: bool,
    set_output: Option<OutputFormat>,
    set_refuel: Option<f64>,
    set_remove_index: Option<usize>,
    set_strict: Option<bool>,
    reset: bool,
) -> Result<()> {
    if reset {
        config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults.");
        return Ok(());
    }

    let mut modified = false;

    if let Some(format) = set_output {
        config.output_format = format;
        modified = true;
        println!("Output format set to: {}", format);
    }

    if let Some(amount) = set_refuel {
        config.refuel_amount = amount;
        modified = true;
        println!("Refuel amount set to: {}", amount);
    }

    if let Some(index) = set_remove_index {
        config.remove_index = index;
        modified = true;
        println!("Remove index set to: {}", index);
    }

    if let Some(strict) = set_strict {
        config.strict_input = strict;
        modified = true;
        println!("Strict input: {}", if strict { "enabled" } else { "disabled" });
    }

    if modified {
        config.save()?;
        println!("Configuration saved.");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
