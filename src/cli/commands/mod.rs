//! Command implementations for the interchange processor CLI
//!
//! This module contains the main command execution logic, progress reporting,
//! and error handling for the CLI interface. Each command is implemented in
//! its own module for better organization and maintainability.

pub mod classifications;
pub mod process;
pub mod shared;

// Re-export the main types and functions for backward compatibility
pub use shared::ProcessingStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the interchange processor
///
/// This function dispatches to the appropriate subcommand handler based on CLI args.
/// Each command is implemented in its own module:
/// - `process`: Extract-to-report workflow with CSV artifacts
/// - `classifications`: Wagon classification table maintenance
pub async fn run(args: Args) -> Result<ProcessingStats> {
    match args.get_command() {
        Commands::Process(process_args) => process::run_process(process_args).await,
        Commands::Classifications(classifications_args) => {
            classifications::run_classifications(classifications_args).await
        }
    }
}
