//! Command-line argument definitions for the interchange processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::constants::report;
use crate::{Error, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the zonal interchange report processor
///
/// Converts the daily interchange extract into the two-section
/// HANDEDOVER/TAKENOVER report, refreshing the intermediate record
/// artifact along the way.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "interchange-processor",
    version,
    about = "Build the daily zonal interchange report from a FOIS extract",
    long_about = "A production tool that cleans the daily FOIS interchange extract, classifies \
                  wagon types against a persistent lookup table, normalizes station identities, \
                  and renders the two-section HANDEDOVER/TAKENOVER report as a CSV grid ready \
                  for spreadsheet review."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the interchange processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Process a daily interchange extract into report artifacts (default command)
    Process(ProcessArgs),
    /// Inspect or extend the persistent wagon classification table
    Classifications(ClassificationsArgs),
}

/// Arguments for the process command (main report generation)
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Path to the daily interchange extract
    ///
    /// A CSV export from FOIS with two preamble rows ahead of the column
    /// header. The file stem names both output artifacts.
    #[arg(value_name = "EXTRACT", help = "Path to the daily interchange extract (CSV)")]
    pub input: PathBuf,

    /// Output directory for generated artifacts
    ///
    /// The intermediate/ and reports/ subdirectories are created beneath it.
    /// If not specified, defaults to the configured output directory.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory for intermediate and report artifacts"
    )]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// TOML configuration file for zone order, station order and store
    /// locations. If not specified, looks for
    /// ~/.config/interchange-processor/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Path to the wagon classification table
    ///
    /// Overrides the configured store location. Seeded with the built-in
    /// table on first use.
    #[arg(
        long = "classifications",
        value_name = "FILE",
        help = "Path to the wagon classification table (CSV)"
    )]
    pub classifications_file: Option<PathBuf>,

    /// Path to the PH station list
    ///
    /// Overrides the configured store location. Seeded with the built-in
    /// list on first use.
    #[arg(
        long = "ph-stations",
        value_name = "FILE",
        help = "Path to the PH station list (CSV)"
    )]
    pub ph_stations_file: Option<PathBuf>,

    /// Report date stamped into the title row
    ///
    /// Accepts DD-MM-YYYY. Defaults to today when omitted.
    #[arg(
        short = 'r',
        long = "report-date",
        value_name = "DATE",
        help = "Report date in DD-MM-YYYY format (defaults to today)"
    )]
    pub report_date: Option<String>,

    /// Skip writing the intermediate record artifact
    ///
    /// Only the final report is produced. Useful for quick reruns when the
    /// intermediate CSV is not needed.
    #[arg(
        long = "skip-intermediate",
        help = "Skip the intermediate record artifact, write only the final report"
    )]
    pub skip_intermediate: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Disable progress bars without changing the log level
    #[arg(long = "no-progress", help = "Disable progress bars")]
    pub no_progress: bool,
}

/// Arguments for the classifications command (wagon table maintenance)
#[derive(Debug, Clone, Parser)]
pub struct ClassificationsArgs {
    /// Path to configuration file
    ///
    /// Used to locate the classification store when no explicit path is given.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Path to the wagon classification table
    #[arg(
        long = "classifications",
        value_name = "FILE",
        help = "Path to the wagon classification table (CSV)"
    )]
    pub classifications_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Maintenance action to perform
    #[command(subcommand)]
    pub action: ClassificationsAction,
}

/// Maintenance actions on the wagon classification table
#[derive(Debug, Clone, Subcommand)]
pub enum ClassificationsAction {
    /// Print the classification table sorted by wagon type code
    List,
    /// Add or replace classification entries and save the table
    Add {
        /// Entries to add as CODE=CLASSIFICATION pairs
        #[arg(
            short = 'm',
            long = "mapping",
            value_name = "CODE=CLASSIFICATION",
            required = true,
            help = "Classification entry to add (repeatable)"
        )]
        mappings: Vec<ClassificationEntry>,
    },
}

/// Wrapper for parsing CODE=CLASSIFICATION pairs
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationEntry {
    pub code: String,
    pub classification: String,
}

impl FromStr for ClassificationEntry {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (code, classification) = s.split_once('=').ok_or_else(|| {
            Error::data_validation(format!(
                "Invalid classification entry '{}': expected CODE=CLASSIFICATION",
                s
            ))
        })?;

        let code = code.trim().to_uppercase();
        let classification = classification.trim().to_uppercase();

        if code.is_empty() || classification.is_empty() {
            return Err(Error::data_validation(format!(
                "Invalid classification entry '{}': code and classification must be non-empty",
                s
            )));
        }

        Ok(ClassificationEntry {
            code,
            classification,
        })
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ProcessArgs {
    /// Validate the process command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        // Validate input extract exists and is a file
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "Input extract does not exist: {}",
                self.input.display()
            )));
        }

        if !self.input.is_file() {
            return Err(Error::configuration(format!(
                "Input extract is not a file: {}",
                self.input.display()
            )));
        }

        // Validate config file exists if specified
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Resolve the report date stamped into the title row
    ///
    /// An explicit `--report-date` must parse as DD-MM-YYYY; without one the
    /// local calendar date is used.
    pub fn get_report_date(&self) -> Result<NaiveDate> {
        match &self.report_date {
            Some(raw) => NaiveDate::parse_from_str(raw, report::DATE_FORMAT).map_err(|error| {
                Error::date_parsing(
                    format!("Invalid report date '{}': expected DD-MM-YYYY", raw),
                    error,
                )
            }),
            None => Ok(chrono::Local::now().date_naive()),
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.no_progress
    }
}

impl ClassificationsArgs {
    /// Validate the classifications command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        // Validate config file exists if specified
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn", // Default level for classifications command
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for ProcessArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: None,
            config_file: None,
            classifications_file: None,
            ph_stations_file: None,
            report_date: None,
            skip_intermediate: false,
            verbose: 0,
            quiet: false,
            no_progress: false,
        }
    }
}
