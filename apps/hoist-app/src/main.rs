//! Hoist mechanism sizing CLI.
//!
//! Provides three modes of operation:
//! - `size`: Size the mechanism and print the full report
//! - `chart`: Render the gear ratio comparison chart
//! - `info`: Print workspace crate versions

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::debug;

use hoist_chart::{ComparisonSeries, render_comparison};
use hoist_core::config::ScenarioConfig;
use hoist_core::error::{HoistError, SizingError};
use hoist_sizing::prelude::*;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Motor-driven hoist mechanism sizing tools.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Size the mechanism and print the full report.
    Size {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Load the scenario from a TOML file instead of flag values.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Also render the comparison chart to this path.
        #[arg(long)]
        chart: Option<PathBuf>,
    },

    /// Render the gear ratio comparison chart.
    Chart {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Load the scenario from a TOML file instead of flag values.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output image path (.svg or .png).
        #[arg(short, long, default_value = "gear_ratio_comparison.png")]
        output: PathBuf,
    },

    /// Print crate information.
    Info,
}

/// Sizing scenario flags, defaulting to the reference scenario.
#[derive(Args)]
struct ScenarioArgs {
    /// Mass to lift (kg).
    #[arg(short, long, default_value_t = 2.0)]
    mass: f64,

    /// Motor no-load speed (RPM).
    #[arg(short, long, default_value_t = 6000.0)]
    rpm: f64,

    /// Motor stall torque (Nm).
    #[arg(short = 't', long, default_value_t = 0.17)]
    stall_torque: f64,

    /// Pulley diameter (cm).
    #[arg(short = 'd', long, default_value_t = 2.0)]
    pulley_diameter: f64,

    /// Desired linear speed (m/s).
    #[arg(short, long, default_value_t = 0.8)]
    speed: f64,

    /// Gear train efficiency in (0, 1].
    #[arg(short, long, default_value_t = 0.85)]
    efficiency: f64,
}

impl ScenarioArgs {
    fn to_scenario(&self) -> ScenarioConfig {
        let mut scenario = ScenarioConfig::default();
        scenario.load.mass_kg = self.mass;
        scenario.load.pulley_diameter_cm = self.pulley_diameter;
        scenario.motor.no_load_rpm = self.rpm;
        scenario.motor.stall_torque_nm = self.stall_torque;
        scenario.drive.target_speed_m_s = self.speed;
        scenario.drive.efficiency = self.efficiency;
        scenario
    }
}

impl Default for ScenarioArgs {
    fn default() -> Self {
        Self {
            mass: 2.0,
            rpm: 6000.0,
            stall_torque: 0.17,
            pulley_diameter: 2.0,
            speed: 0.8,
            efficiency: 0.85,
        }
    }
}

// ---------------------------------------------------------------------------
// Scenario resolution
// ---------------------------------------------------------------------------

/// A `--config` file replaces the flag values entirely.
fn resolve_scenario(
    args: &ScenarioArgs,
    config: Option<&Path>,
) -> Result<ScenarioConfig, HoistError> {
    match config {
        Some(path) => {
            debug!(path = %path.display(), "loading scenario from file");
            Ok(ScenarioConfig::from_file(path)?)
        }
        None => {
            let scenario = args.to_scenario();
            scenario.validate()?;
            Ok(scenario)
        }
    }
}

fn build_inputs(scenario: &ScenarioConfig) -> Result<(LiftLoad, Motor, RatioCatalog), SizingError> {
    let load = LiftLoad::new(scenario.load.mass_kg, scenario.load.pulley_radius_m())
        .with_acceleration(scenario.load.acceleration_m_s2)
        .with_friction(scenario.load.friction);
    let motor = Motor::new(scenario.motor.stall_torque_nm, scenario.motor.no_load_rpm);
    let catalog = RatioCatalog::new(scenario.drive.candidate_ratios.clone())?;
    Ok((load, motor, catalog))
}

// ---------------------------------------------------------------------------
// Mode implementations
// ---------------------------------------------------------------------------

fn run_size(
    args: &ScenarioArgs,
    config: Option<&Path>,
    chart: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let scenario = resolve_scenario(args, config)?;
    let (load, motor, catalog) = build_inputs(&scenario)?;

    let outcome = size_mechanism(
        &load,
        &motor,
        scenario.drive.target_speed_m_s,
        scenario.drive.efficiency,
        &catalog,
    )?;
    print_report(&scenario, &outcome);

    if let Some(path) = chart {
        println!();
        println!("Generating gear ratio comparison chart...");
        let series = ComparisonSeries::compute(&load, &motor, &catalog, scenario.drive.efficiency)?;
        render_comparison(&series, path)?;
        println!("Chart saved as: {}", path.display());
    }

    Ok(())
}

fn run_chart(
    args: &ScenarioArgs,
    config: Option<&Path>,
    output: &Path,
) -> Result<(), Box<dyn Error>> {
    let scenario = resolve_scenario(args, config)?;
    let (load, motor, catalog) = build_inputs(&scenario)?;

    let series = ComparisonSeries::compute(&load, &motor, &catalog, scenario.drive.efficiency)?;
    render_comparison(&series, output)?;
    println!("Chart saved as: {}", output.display());

    Ok(())
}

fn print_report(scenario: &ScenarioConfig, outcome: &SizingOutcome) {
    println!("Hoist Mechanism Sizing");
    println!("{}", "-".repeat(30));

    println!();
    println!("Required torque: {:.2} Nm", outcome.required_torque);
    println!("Calculated optimal gear ratio: {:.2}:1", outcome.optimal_ratio);
    println!("Nearest standard gear ratio: {}:1", outcome.selected_ratio);

    println!();
    println!("Final System Specifications:");
    println!("Output RPM: {:.2}", outcome.spec.output_rpm);
    println!("Output Torque: {:.2} Nm", outcome.spec.output_torque);
    println!("Linear Speed: {:.2} m/s", outcome.spec.linear_speed);
    println!("Maximum Mass Capacity: {:.2} kg", outcome.spec.max_mass);

    println!();
    if outcome.can_lift {
        println!(
            "STATUS: OK - the mechanism can lift the {} kg load (capacity margin {:.1}x).",
            scenario.load.mass_kg, outcome.capacity_margin
        );
    } else {
        println!(
            "STATUS: FAIL - the mechanism cannot lift the {} kg load. Consider:",
            scenario.load.mass_kg
        );
        println!("  - Increasing the gear ratio");
        println!("  - Using a motor with higher torque");
        println!("  - Reducing the mass to be lifted");
    }

    println!();
    println!("Keep in mind:");
    println!("- Motor efficiency decreases under load");
    println!("- Actual performance may vary due to friction and other factors");
    println!("- Size the mechanism with a 1.5-2x safety factor");
}

fn run_info() {
    println!("hoist v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("crates:");
    println!("  hoist-core   {}", env!("CARGO_PKG_VERSION"));
    println!("  hoist-sizing {}", env!("CARGO_PKG_VERSION"));
    println!("  hoist-chart  {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("edition: 2024");
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    match tracing::subscriber::set_global_default(subscriber) {
        Ok(()) => debug!("logging initialised"),
        Err(e) => eprintln!("Failed to init logging. {e}"),
    }
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Size {
            scenario,
            config,
            chart,
        }) => run_size(&scenario, config.as_deref(), chart.as_deref()),
        Some(Commands::Chart {
            scenario,
            config,
            output,
        }) => run_chart(&scenario, config.as_deref(), &output),
        Some(Commands::Info) => {
            run_info();
            Ok(())
        }
        None => {
            // Default: size the default scenario
            run_size(&ScenarioArgs::default(), None, None)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
