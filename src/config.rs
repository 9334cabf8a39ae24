//! Configuration management and validation.
//!
//! Provides layered configuration for the report pipeline: built-in
//! defaults, then an optional TOML file, then environment overrides.
//! CLI flags are applied on top by the command layer.

use crate::constants::{artifacts, classifications, ph_stations, stations, zones};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the output directory
pub const ENV_OUTPUT_DIR: &str = "INTERCHANGE_OUTPUT_DIR";

/// Environment variable overriding the directory holding both store files
pub const ENV_DATA_DIR: &str = "INTERCHANGE_DATA_DIR";

/// Normalization and presentation rules of the pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Originating zones whose SAU traffic resolves to SAUS
    pub saus_zones: Vec<String>,

    /// Presentation order of destination zones in the final report
    pub zone_order: Vec<String>,

    /// Presentation order of stations within each destination zone
    pub station_order: HashMap<String, Vec<String>>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            saus_zones: zones::SAUS_ZONES_DEFAULT
                .iter()
                .map(|zone| zone.to_string())
                .collect(),
            zone_order: zones::ZONE_ORDER_DEFAULT
                .iter()
                .map(|zone| zone.to_string())
                .collect(),
            station_order: stations::default_station_order()
                .into_iter()
                .map(|(zone, order)| {
                    (
                        zone.to_string(),
                        order.into_iter().map(|station| station.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }
}

/// Locations of the persistent lookup stores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Wagon classification table file
    pub classifications_file: PathBuf,

    /// PH station reference list file
    pub ph_stations_file: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        let store_dir = default_store_dir();
        Self {
            classifications_file: store_dir.join(classifications::DEFAULT_FILE_NAME),
            ph_stations_file: store_dir.join(ph_stations::DEFAULT_FILE_NAME),
        }
    }
}

/// Output artifact locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving the intermediate and reports subfolders
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."), // current directory
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level when neither RUST_LOG nor a CLI flag applies
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Global configuration for interchange report processing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Normalization and presentation rules
    pub pipeline: PipelineConfig,

    /// Persistent store locations
    pub stores: StoreConfig,

    /// Output artifact locations
    pub output: OutputConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration in layers: defaults, TOML file, environment
    ///
    /// With no explicit file the default config path is used when it exists,
    /// otherwise built-in defaults apply.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = config_file {
            Self::from_file(path)?
        } else if let Some(path) = Self::default_config_path().filter(|path| path.exists()) {
            debug!("Loading configuration from {}", path.display());
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|error| {
            Error::configuration(format!(
                "Cannot read config file '{}': {}",
                path.display(),
                error
            ))
        })?;

        toml::from_str(&contents).map_err(|error| {
            Error::configuration(format!(
                "Invalid config file '{}': {}",
                path.display(),
                error
            ))
        })
    }

    /// Well-known configuration file location, if a config dir exists
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("interchange-processor").join("config.toml"))
    }

    /// Apply environment variable overrides on top of file values
    fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var(ENV_OUTPUT_DIR) {
            if !dir.is_empty() {
                self.output.directory = PathBuf::from(dir);
            }
        }

        if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
            if !dir.is_empty() {
                let dir = PathBuf::from(dir);
                self.stores.classifications_file = dir.join(classifications::DEFAULT_FILE_NAME);
                self.stores.ph_stations_file = dir.join(ph_stations::DEFAULT_FILE_NAME);
            }
        }
    }

    /// Validate configuration consistency
    ///
    /// An empty SAUS zone set is allowed; it resolves every SAU to SAUN.
    pub fn validate(&self) -> Result<()> {
        if self.pipeline.zone_order.is_empty() {
            return Err(Error::configuration("Zone order cannot be empty"));
        }

        if self.stores.classifications_file.as_os_str().is_empty() {
            return Err(Error::configuration(
                "Classifications file path cannot be empty",
            ));
        }

        if self.stores.ph_stations_file.as_os_str().is_empty() {
            return Err(Error::configuration("PH stations file path cannot be empty"));
        }

        const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
        if !LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::configuration(format!(
                "Invalid log level '{}': must be one of {}",
                self.logging.level,
                LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Set the output directory
    pub fn with_output_directory(mut self, directory: PathBuf) -> Self {
        self.output.directory = directory;
        self
    }

    /// Set the classification store file
    pub fn with_classifications_file(mut self, path: PathBuf) -> Self {
        self.stores.classifications_file = path;
        self
    }

    /// Set the PH station store file
    pub fn with_ph_stations_file(mut self, path: PathBuf) -> Self {
        self.stores.ph_stations_file = path;
        self
    }

    /// Directory receiving intermediate artifacts
    pub fn intermediate_dir(&self) -> PathBuf {
        self.output.directory.join(artifacts::INTERMEDIATE_DIR)
    }

    /// Directory receiving final reports
    pub fn reports_dir(&self) -> PathBuf {
        self.output.directory.join(artifacts::REPORTS_DIR)
    }
}

/// Directory holding store files when no explicit path is configured
fn default_store_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("interchange-processor")
}
