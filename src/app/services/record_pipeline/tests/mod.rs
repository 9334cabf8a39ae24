//! Comprehensive tests for record pipeline module
//!
//! This module provides unit tests for every pipeline stage plus shared
//! record fixtures.

pub mod processor_tests;
pub mod stats_tests;

// Test helper functions and fixtures
use crate::app::models::{InterchangeRecord, Leg};
use crate::app::services::record_pipeline::RecordPipeline;
use crate::app::services::wagon_classifier::WagonClassifier;
use crate::config::PipelineConfig;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// Create a movement leg from optional string slices; the loco number is
/// never consulted by the pipeline so it stays unset
pub fn create_leg(
    zone: Option<&str>,
    station_to: Option<&str>,
    load_state: Option<&str>,
    wagon_type: Option<&str>,
    loco_type: Option<&str>,
) -> Leg {
    Leg::new(
        zone.map(str::to_string),
        station_to.map(str::to_string),
        load_state.map(str::to_string),
        wagon_type.map(str::to_string),
        None,
        loco_type.map(str::to_string),
    )
}

/// Create an empty movement leg
pub fn create_blank_leg() -> Leg {
    create_leg(None, None, None, None, None)
}

/// Create a record with explicit legs
pub fn create_record(
    zone_to: &str,
    ic_station: &str,
    taken_over: Leg,
    handed_over: Leg,
) -> InterchangeRecord {
    InterchangeRecord::new(
        zone_to.to_string(),
        ic_station.to_string(),
        taken_over,
        handed_over,
    )
}

/// Create a record with both legs fully populated
pub fn create_full_record(zone_to: &str, ic_station: &str) -> InterchangeRecord {
    create_record(
        zone_to,
        ic_station,
        create_leg(Some("WR"), Some("JSME"), Some("L"), Some("BCN"), Some("WDG4")),
        create_leg(Some("CR"), Some("KNW"), Some("E"), Some("BOXN"), Some("WAG9")),
    )
}

/// SAUS zone set matching the default configuration
pub fn default_saus_zones() -> HashSet<String> {
    PipelineConfig::default().saus_zones.into_iter().collect()
}

/// Create a pipeline over the default configuration and seed classifications
pub fn create_test_pipeline() -> RecordPipeline {
    let classifier = Arc::new(WagonClassifier::with_defaults(Path::new(
        "/tmp/test_wagon_classifications.csv",
    )));
    RecordPipeline::new(classifier, &PipelineConfig::default())
}
