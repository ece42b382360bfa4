//! voyage routes command

use clap::{Args, Subcommand};
use voyage_domain::{FuelType, RouteFilters, RouteId, RouteRepositoryPort, VesselType};
use voyage_usecase::RouteService;

use crate::render::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct RoutesCommand {
    #[command(subcommand)]
    pub command: RoutesSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum RoutesSubcommand {
    /// List routes, optionally filtered (all filters must match)
    List {
        /// Vessel class, e.g. Container
        #[arg(long)]
        vessel_type: Option<String>,
        /// Fuel class, e.g. LNG
        #[arg(long)]
        fuel_type: Option<String>,
        /// Calendar year
        #[arg(long)]
        year: Option<u16>,
    },
    /// Make a route the comparison baseline
    Baseline {
        /// Route id, e.g. R001
        route_id: String,
    },
    /// Compare every route against the baseline
    Compare,
}

impl RoutesSubcommand {
    /// Filters for `list`; empty for the other subcommands
    pub fn filters(&self) -> RouteFilters {
        match self {
            RoutesSubcommand::List {
                vessel_type,
                fuel_type,
                year,
            } => RouteFilters {
                vessel_type: vessel_type.clone().map(VesselType::new),
                fuel_type: fuel_type.clone().map(FuelType::new),
                year: *year,
            },
            _ => RouteFilters::default(),
        }
    }
}

impl RoutesCommand {
    /// Refuse commands whose effect would be lost with the storage in use
    ///
    /// `durable` is false for the in-memory store, which is dropped when
    /// the process exits.
    pub fn check_storage(&self, durable: bool) -> anyhow::Result<()> {
        if let RoutesSubcommand::Baseline { .. } = self.command {
            anyhow::ensure!(
                durable,
                "Setting a baseline needs a route data file: pass --data <FILE> \
                 or set data_file in the config"
            );
        }
        Ok(())
    }

    /// Run against `service` and return what should be printed
    pub async fn run<R: RouteRepositoryPort>(
        &self,
        service: &RouteService<R>,
        format: OutputFormat,
    ) -> anyhow::Result<String> {
        let output = match &self.command {
            RoutesSubcommand::List { .. } => {
                let routes = service.list_routes(self.command.filters()).await?;
                match format {
                    OutputFormat::Json => render::routes_json(&routes)?,
                    OutputFormat::Text => render::routes_table(&routes),
                }
            }
            RoutesSubcommand::Baseline { route_id } => {
                let route_id = RouteId::new(route_id.as_str());
                service.set_baseline(&route_id).await?;
                match format {
                    OutputFormat::Json => {
                        let body = serde_json::json!({ "baseline": route_id.as_str() });
                        serde_json::to_string_pretty(&body)?
                    }
                    OutputFormat::Text => format!("Baseline set to {}\n", route_id),
                }
            }
            RoutesSubcommand::Compare => {
                let report = service.compare().await?;
                match format {
                    OutputFormat::Json => render::comparison_json(&report)?,
                    OutputFormat::Text => render::comparison_table(&report),
                }
            }
        };

        Ok(output)
    }
}
