//! Classifications command implementation for the interchange processor CLI
//!
//! Maintenance entry point for the persistent wagon classification table:
//! list the current table or add entries from the command line. New wagon
//! type codes keep appearing in the extracts, so the table has to grow
//! without a code change.

use super::shared::{ProcessingStats, setup_classifications_logging};
use crate::Result;
use crate::app::services::wagon_classifier::WagonClassifier;
use crate::cli::args::{ClassificationsAction, ClassificationsArgs};
use crate::config::Config;
use std::path::PathBuf;
use tracing::{debug, info};

/// Classifications command runner
///
/// Resolves the store location the same way the process command does
/// (explicit flag, then config file, then defaults), loads the table and
/// performs the requested maintenance action.
pub async fn run_classifications(args: ClassificationsArgs) -> Result<ProcessingStats> {
    setup_classifications_logging(&args)?;

    debug!("Command line arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    let store_path = resolve_store_path(&args)?;
    info!("Using classification table: {}", store_path.display());

    let mut classifier = WagonClassifier::load(&store_path).await?;

    match &args.action {
        ClassificationsAction::List => list_classifications(&classifier),
        ClassificationsAction::Add { mappings } => {
            let entries: Vec<(String, String)> = mappings
                .iter()
                .map(|entry| (entry.code.clone(), entry.classification.clone()))
                .collect();

            classifier.add_classifications(&entries).await?;

            println!(
                "Added {} entries, table now holds {} at {}",
                entries.len(),
                classifier.len(),
                classifier.path().display()
            );
        }
    }

    Ok(ProcessingStats::default())
}

/// Resolve the classification store location from flags and configuration
fn resolve_store_path(args: &ClassificationsArgs) -> Result<PathBuf> {
    if let Some(path) = &args.classifications_file {
        return Ok(path.clone());
    }

    let config = Config::load_layered(args.config_file.as_deref())?;
    Ok(config.stores.classifications_file)
}

/// Print the classification table sorted by wagon type code
fn list_classifications(classifier: &WagonClassifier) {
    let mut entries: Vec<(&String, &String)> = classifier.mappings().iter().collect();
    entries.sort();

    println!(
        "Wagon classification table ({} entries at {}):",
        entries.len(),
        classifier.path().display()
    );
    for (wagon_type, classification) in entries {
        println!("  {:<12} {}", wagon_type, classification);
    }
}
