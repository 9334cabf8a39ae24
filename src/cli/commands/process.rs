//! Process command implementation for the interchange processor CLI
//!
//! This module contains the complete extract-to-report workflow including
//! configuration loading, record pipeline execution, and report writing.

use super::shared::{
    ProcessingStats, input_stem, load_configuration, prepare_directories, setup_logging,
};
use crate::app::services::aggregator::{Aggregator, PhStationStore};
use crate::app::services::extract_parser::ExtractParser;
use crate::app::services::record_pipeline::RecordPipeline;
use crate::app::services::report_writer::ReportWriter;
use crate::app::services::wagon_classifier::WagonClassifier;
use crate::cli::args::ProcessArgs;
use crate::constants::report;
use crate::Result;
use colored::*;
use indicatif::HumanDuration;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Process command runner for the interchange processor
///
/// This function orchestrates the entire report workflow:
/// 1. Set up logging and configuration
/// 2. Load the persistent lookup stores, seeding them on first use
/// 3. Parse the extract and run the record pipeline
/// 4. Aggregate the records and write the report artifacts
pub async fn run_process(args: ProcessArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    // Set up logging
    setup_logging(&args)?;

    info!("Starting interchange processor");
    debug!("Command line arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    // Load configuration with layered approach
    let config = load_configuration(&args).await?;
    debug!("Loaded configuration: {:?}", config);

    // Validate and prepare directories
    prepare_directories(&config).await?;

    // Resolve the report date and artifact stem before any heavy work
    let report_date = args.get_report_date()?;
    let stem = input_stem(&args.input)?;

    if !args.quiet {
        println!(
            "{}",
            "Starting interchange report processing".bright_green().bold()
        );
        println!("  {} {}", "Extract:".bright_cyan(), args.input.display());
        println!(
            "  {} {}",
            "Output:".bright_cyan(),
            config.output.directory.display()
        );
        println!(
            "  {} {}",
            "Report date:".bright_cyan(),
            report_date.format(report::DATE_FORMAT)
        );
    }

    // Load the persistent lookup stores
    let classifier = WagonClassifier::load(&config.stores.classifications_file).await?;
    info!(
        "Wagon classification table ready: {} entries",
        classifier.len()
    );

    let ph_stations = PhStationStore::load(&config.stores.ph_stations_file).await?;
    info!("PH station list ready: {} stations", ph_stations.len());

    // Parse the extract
    let parser = ExtractParser::new();
    let parse_result = parser.parse_file(&args.input).await?;
    info!(
        "Parsed {} records from {} ({} rows skipped)",
        parse_result.records.len(),
        args.input.display(),
        parse_result.stats.rows_skipped
    );

    // Run the record pipeline
    let pipeline = RecordPipeline::new(Arc::new(classifier), &config.pipeline);
    pipeline.validate_records(&parse_result.records)?;

    let pipeline_result = pipeline
        .process_records(parse_result.records, args.show_progress())
        .await?;

    let mut stats = ProcessingStats {
        records_parsed: parse_result.stats.rows_parsed,
        rows_skipped: parse_result.stats.rows_skipped,
        records_out: pipeline_result.stats.records_out,
        duplicates_removed: pipeline_result.stats.duplicates_removed,
        ..Default::default()
    };

    let writer = ReportWriter::new(&config.output.directory);

    // Write the intermediate record artifact
    if args.skip_intermediate {
        info!("Skipping intermediate artifact");
    } else {
        let path = writer
            .write_intermediate(&pipeline_result.records, &stem)
            .await?;
        stats.artifacts.push(path);
    }

    // Aggregate into the two-section report and write it
    let aggregator = Aggregator::new(ph_stations);
    let report_data = aggregator.build_report_data(&pipeline_result.records).await;
    stats.stations_handed_over = report_data.handed_over.station_count();
    stats.stations_taken_over = report_data.taken_over.station_count();

    let path = writer
        .write_final_report(&report_data, report_date, &stem)
        .await?;
    stats.artifacts.push(path);

    stats.processing_time = start_time.elapsed();

    // Generate final run summary
    if !args.quiet {
        print_run_summary(&stats);
    }

    Ok(stats)
}

/// Print the human-readable run summary
fn print_run_summary(stats: &ProcessingStats) {
    let duration = HumanDuration(stats.processing_time);

    println!("\n🎉 Interchange Report Complete!");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📊 Processing Summary:");
    println!("   • Records parsed: {}", stats.records_parsed);
    if stats.rows_skipped > 0 {
        println!("   • Rows skipped: {}", stats.rows_skipped);
    }
    println!("   • Records after pipeline: {}", stats.records_out);
    println!("   • Duplicates removed: {}", stats.duplicates_removed);
    println!(
        "   • Station blocks: {} handed over, {} taken over",
        stats.stations_handed_over, stats.stations_taken_over
    );
    println!("   • Processing time: {}", duration);

    if !stats.artifacts.is_empty() {
        println!("\n📁 Output Files:");
        for artifact in &stats.artifacts {
            println!("   • {}", artifact.display());
        }
    }

    println!();
}
