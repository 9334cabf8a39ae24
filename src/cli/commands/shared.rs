//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! multiple CLI command implementations.

use crate::cli::args::{ClassificationsArgs, ProcessArgs};
use crate::config::Config;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Processing statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Number of records parsed from the extract
    pub records_parsed: usize,
    /// Number of extract rows skipped by the parser
    pub rows_skipped: usize,
    /// Number of records surviving the pipeline
    pub records_out: usize,
    /// Number of cross-referenced duplicate rows removed
    pub duplicates_removed: usize,
    /// Number of station blocks in the HANDEDOVER section
    pub stations_handed_over: usize,
    /// Number of station blocks in the TAKENOVER section
    pub stations_taken_over: usize,
    /// Artifacts written during the run
    pub artifacts: Vec<PathBuf>,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

impl ProcessingStats {
    /// Number of artifacts written during the run
    pub fn artifact_count(&self) -> usize {
        self.artifacts.len()
    }

    /// Total station blocks across both report sections
    pub fn total_station_blocks(&self) -> usize {
        self.stations_handed_over + self.stations_taken_over
    }
}

/// Set up structured logging for process command
pub fn setup_logging(args: &ProcessArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("interchange_processor={}", log_level)));

    // Set up subscriber based on output format preference
    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Set up structured logging for classifications command
pub fn setup_classifications_logging(args: &ClassificationsArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("interchange_processor={}", log_level)));

    // Standard logging with timestamps
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env -> args)
pub async fn load_configuration(args: &ProcessArgs) -> Result<Config> {
    info!("Loading configuration");

    if let Some(config_path) = &args.config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        info!("No explicit config file, using defaults and environment variables");
    }

    // Load with layered configuration
    let mut config = Config::load_layered(args.config_file.as_deref())?;

    // Apply CLI argument overrides
    apply_cli_overrides(&mut config, args)?;

    // Final validation
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &ProcessArgs) -> Result<()> {
    // Override path settings if explicitly provided
    if let Some(output) = &args.output {
        config.output.directory = output.clone();
    }
    if let Some(classifications_file) = &args.classifications_file {
        config.stores.classifications_file = classifications_file.clone();
    }
    if let Some(ph_stations_file) = &args.ph_stations_file {
        config.stores.ph_stations_file = ph_stations_file.clone();
    }

    // Override logging settings
    config.logging.level = args.get_log_level().to_string();

    Ok(())
}

/// Validate and prepare output directories
pub async fn prepare_directories(config: &Config) -> Result<()> {
    info!("Preparing output directories");

    for directory in [config.intermediate_dir(), config.reports_dir()] {
        if !directory.exists() {
            std::fs::create_dir_all(&directory).map_err(|e| {
                Error::configuration(format!(
                    "Failed to create output directory '{}': {}",
                    directory.display(),
                    e
                ))
            })?;
        }
    }

    info!(
        "Output directory prepared: {}",
        config.output.directory.display()
    );
    Ok(())
}

/// Derive the artifact name stem from the input extract path
pub fn input_stem(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.to_string())
        .ok_or_else(|| {
            Error::configuration(format!(
                "Cannot derive an artifact name from input path: {}",
                path.display()
            ))
        })
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg} [{per_sec}] ETA: {eta}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_processing_stats_default() {
        let stats = ProcessingStats::default();
        assert_eq!(stats.records_parsed, 0);
        assert_eq!(stats.records_out, 0);
        assert_eq!(stats.artifact_count(), 0);
        assert_eq!(stats.total_station_blocks(), 0);
    }

    #[test]
    fn test_processing_stats_totals() {
        let stats = ProcessingStats {
            stations_handed_over: 4,
            stations_taken_over: 3,
            artifacts: vec![
                PathBuf::from("intermediate/extract_processed.csv"),
                PathBuf::from("reports/extract_final_report.csv"),
            ],
            ..Default::default()
        };
        assert_eq!(stats.total_station_blocks(), 7);
        assert_eq!(stats.artifact_count(), 2);
    }

    #[test]
    fn test_input_stem() {
        assert_eq!(input_stem(Path::new("extract.csv")).unwrap(), "extract");
        assert_eq!(
            input_stem(Path::new("/data/in/ic_2024_03_17.csv")).unwrap(),
            "ic_2024_03_17"
        );
        assert!(input_stem(Path::new("/")).is_err());
    }

    #[test]
    fn test_apply_cli_overrides() {
        let mut config = Config::default();
        let args = ProcessArgs {
            output: Some(PathBuf::from("/data/out")),
            classifications_file: Some(PathBuf::from("/data/wagons.csv")),
            ph_stations_file: Some(PathBuf::from("/data/ph.csv")),
            verbose: 1,
            ..Default::default()
        };

        apply_cli_overrides(&mut config, &args).unwrap();

        assert_eq!(config.output.directory, PathBuf::from("/data/out"));
        assert_eq!(
            config.stores.classifications_file,
            PathBuf::from("/data/wagons.csv")
        );
        assert_eq!(config.stores.ph_stations_file, PathBuf::from("/data/ph.csv"));
        assert_eq!(config.logging.level, "info");
    }

    #[tokio::test]
    async fn test_prepare_directories() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::default().with_output_directory(temp_dir.path().join("artifacts"));

        prepare_directories(&config).await.unwrap();

        assert!(config.intermediate_dir().is_dir());
        assert!(config.reports_dir().is_dir());
    }
}
