//! # Voyage - Route baseline & emissions comparison
//!
//! This is the main entry point that wires everything together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring            │
//! │    │                                                            │
//! │    ├── Loads: AppConfig (YAML) + CLI overrides                  │
//! │    ├── Creates: JsonFileRouteRepository or                      │
//! │    │            InMemoryRouteRepository (adapter)               │
//! │    ├── Creates: RouteService (use case)                         │
//! │    └── Runs: the requested command                              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage:
//!   voyage routes list [--vessel-type T] [--fuel-type F] [--year Y]
//!   voyage routes baseline <ROUTE_ID>
//!   voyage routes compare
//!   voyage --data routes.json --json routes compare

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use voyage_adapter::{InMemoryRouteRepository, JsonFileRouteRepository};
use voyage_app::commands::RoutesCommand;
use voyage_app::config::AppConfig;
use voyage_app::render::OutputFormat;
use voyage_domain::RouteRepositoryPort;
use voyage_usecase::RouteService;

#[derive(Parser)]
#[command(name = "voyage")]
#[command(about = "Voyage - Route baseline selection and GHG intensity comparison")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Route data file (JSON). Without it the built-in data set is used in memory.
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// GHG intensity target in gCO2e/MJ
    #[arg(long, global = true)]
    target: Option<f64>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Query routes and manage the baseline
    Routes(RoutesCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };

    // Initialize logging; RUST_LOG wins over the config file
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.log_filter.as_deref().unwrap_or("warn"))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let target = cli.target.unwrap_or(config.target_intensity);

    // Adapters (could be swapped for a database, etc.)
    match cli.data.clone().or(config.data_file.clone()) {
        Some(path) => {
            info!(path = %path.display(), "Using JSON file route repository");
            let repo = JsonFileRouteRepository::open(&path)
                .await
                .with_context(|| format!("Failed to open route data {}", path.display()))?;
            execute(&cli.command, repo, true, target, format).await
        }
        None => {
            info!("Using in-memory route repository with built-in data");
            let repo = InMemoryRouteRepository::seeded();
            execute(&cli.command, repo, false, target, format).await
        }
    }
}

async fn execute<R: RouteRepositoryPort>(
    command: &Commands,
    repository: R,
    durable: bool,
    target: f64,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let Commands::Routes(cmd) = command;
    cmd.check_storage(durable)?;

    let service = RouteService::new(repository).with_target_intensity(target)?;
    debug!(target = service.target_intensity(), "Route service ready");

    let output = cmd.run(&service, format).await?;

    print!("{}", output);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
