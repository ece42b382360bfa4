//! Configuration for the voyage binary
//!
//! Read from a YAML file passed with `--config`. Command-line flags win
//! over anything set here.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use voyage_domain::TARGET_INTENSITY_2025;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct AppConfig {
    /// Route data file. The seeded in-memory store is used when unset.
    pub data_file: Option<PathBuf>,

    /// GHG intensity target in gCO2e/MJ
    pub target_intensity: f64,

    /// tracing filter directive, e.g. `voyage_adapter=debug`
    pub log_filter: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            target_intensity: TARGET_INTENSITY_2025,
            log_filter: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;

        anyhow::ensure!(
            config.target_intensity.is_finite() && config.target_intensity > 0.0,
            "target_intensity must be a positive number, got {}",
            config.target_intensity
        );

        Ok(config)
    }
}
