use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use rocket_engine_simulation::*;

#[derive(Parser, Debug)]
#[command(author, version, about = "First-order rocket engine chamber pressure simulation")]
struct Cli {
    /// TOML file with `[engine]` constants and `[run]` parameters.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Nozzle geometry model.
    #[arg(long, value_enum)]
    model: Option<ModelArg>,

    /// Initial chamber pressure in Pa (defaults to the chamber pressure setpoint).
    #[arg(long)]
    initial_pressure: Option<f64>,

    /// Burn time in seconds.
    #[arg(long)]
    burn_time: Option<f64>,

    /// Exit diameter in m for the fixed nozzle.
    #[arg(long)]
    exit_diameter: Option<f64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModelArg {
    Fixed,
    Variable,
}

impl From<ModelArg> for NozzleModel {
    fn from(model: ModelArg) -> Self {
        match model {
            ModelArg::Fixed => NozzleModel::Fixed,
            ModelArg::Variable => NozzleModel::Variable,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let engine = RocketEngine::from_config(&config).context("invalid engine configuration")?;

    let burn_time = config.burn_time();
    let run = engine
        .simulate(config.initial_pressure(), burn_time)
        .context("simulation rejected its inputs")?;
    let report = PerformanceReport::from_run(&engine, &run, burn_time)
        .context("simulation left the valid pressure domain")?;

    println!("{}", report);
    println!("\nRocket Engine Simulation Completed.");
    info!(steps = run.trace.len(), "report written");

    Ok(())
}

fn load_config(cli: &Cli) -> Result<SimulationConfig> {
    let mut config = match &cli.config {
        Some(path) => SimulationConfig::from_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => SimulationConfig::default(),
    };

    if let Some(model) = cli.model {
        config.run.nozzle = model.into();
    }
    if let Some(pressure) = cli.initial_pressure {
        config.run.initial_pressure = Some(pressure);
    }
    if let Some(burn_time) = cli.burn_time {
        config.run.burn_time = Some(burn_time);
    }
    if let Some(diameter) = cli.exit_diameter {
        config.run.exit_diameter = diameter;
    }

    Ok(config)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
