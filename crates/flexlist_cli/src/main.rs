//! flexlist - headless overscroll scenario runner
//!
//! Replays scripted touch gestures against a simulated list and reports the
//! pull events and overscroll offsets the controller produced.

mod scenario;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use flexlist_widgets::OverscrollConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::scenario::Scenario;

#[derive(Parser, Debug)]
#[command(name = "flexlist")]
#[command(about = "Replay overscroll gestures against a simulated list")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a scenario file
    Run {
        /// Scenario TOML file
        scenario: PathBuf,

        /// Overscroll config, overriding the scenario's own
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the default overscroll configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Run { scenario, config } => cmd_run(scenario, config),
        Commands::Config => cmd_config(),
    }
}

fn cmd_run(path: PathBuf, config: Option<PathBuf>) -> Result<()> {
    let scenario = Scenario::from_path(&path)?;
    let config = config
        .map(|config_path| {
            OverscrollConfig::from_path(&config_path)
                .with_context(|| format!("Failed to load config {}", config_path.display()))
        })
        .transpose()?;

    tracing::info!("Running {}", path.display());
    let report = scenario::run(&scenario, config)?;

    for (step, event) in &report.pulls {
        println!("step {step}: {event:?}");
    }
    println!(
        "final offset {} (peak {}), {} animation frames",
        report.final_offset, report.max_abs_offset, report.frames
    );

    if !report.passed() {
        for failure in &report.failures {
            tracing::error!("{failure}");
        }
        bail!("{} expectation(s) failed", report.failures.len());
    }

    Ok(())
}

fn cmd_config() -> Result<()> {
    let toml = OverscrollConfig::default().to_toml_string()?;
    print!("{toml}");
    Ok(())
}
