use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::fs;
use std::path::PathBuf;

use wsnsim::config::SimulationConfig;
use wsnsim::config_loader::{self, CliOverrides};
use wsnsim::orchestrator::run_simulation;
use wsnsim::report::{generate_json_report, generate_text_report};

/// HEED clustering and ant colony routing simulation for wireless sensor networks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the simulation configuration YAML file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory for the simulation reports
    #[arg(short, long, default_value = "wsnsim_output")]
    output: PathBuf,

    /// Number of sensor nodes
    #[arg(long)]
    nodes: Option<usize>,

    /// Side length of the square deployment area
    #[arg(long)]
    area: Option<f64>,

    /// Number of ants per iteration
    #[arg(long)]
    ants: Option<usize>,

    /// Number of ant colony iterations
    #[arg(long)]
    iterations: Option<usize>,

    /// Number of energy simulation rounds
    #[arg(long)]
    rounds: Option<usize>,

    /// Seed for all random draws
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Skip the human-readable summary
    #[arg(long)]
    no_text: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            nodes: self.nodes,
            area: self.area,
            ants: self.ants,
            iterations: self.iterations,
            rounds: self.rounds,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Load configuration before logging so its log level can apply
    let mut config = match &args.config {
        Some(path) => config_loader::load_config(path)?,
        None => SimulationConfig::default(),
    };

    let level = args
        .log_level
        .clone()
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| "info".to_string());
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    info!("Starting WSNSim");
    match &args.config {
        Some(path) => info!("Configuration file: {:?}", path),
        None => info!("No configuration file given, using defaults"),
    }
    info!("Output directory: {:?}", args.output);

    config_loader::apply_cli_overrides(&mut config, &args.overrides())?;

    let report = run_simulation(&config).wrap_err("Simulation failed")?;

    fs::create_dir_all(&args.output)
        .wrap_err_with(|| format!("Failed to create output directory '{}'", args.output.display()))?;

    generate_json_report(&report, &args.output.join("report.json"))?;
    if !args.no_text {
        generate_text_report(&report, &args.output.join("summary.txt"))?;
    }

    match &report.routing.best {
        Some(route) => info!("Best route {:?} with cost {:.2}", route.path, route.cost),
        None => info!("No route found"),
    }
    info!("Final mean energy: {:.2}", report.energy.final_mean());
    info!("Simulation completed successfully");
    Ok(())
}
