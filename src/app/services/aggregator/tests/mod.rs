//! Comprehensive tests for aggregator module
//!
//! This module provides unit tests for the PH station store, the summary
//! data structures and the per-station counting rules, plus shared record
//! fixtures.


// Test helper functions and fixtures
use crate::app::models::{InterchangeRecord, Leg};
use crate::app::services::aggregator::{Aggregator, PhStationStore};
use std::path::Path;

/// Create a movement leg bound for `destination`
pub fn create_movement(
    destination: Option<&str>,
    load_state: Option<&str>,
    wagon_type: Option<&str>,
    loco_type: Option<&str>,
) -> Leg {
    Leg::new(
        Some("WR".to_string()),
        destination.map(str::to_string),
        load_state.map(str::to_string),
        wagon_type.map(str::to_string),
        None,
        loco_type.map(str::to_string),
    )
}

/// Create an empty movement leg
pub fn create_blank_leg() -> Leg {
    Leg::new(None, None, None, None, None, None)
}

/// Create a classified record contributing a taken-over movement at `station`
pub fn create_taken_row(station: &str, classification: &str, leg: Leg) -> InterchangeRecord {
    let mut record = InterchangeRecord::new(
        "CR".to_string(),
        station.to_string(),
        leg,
        create_blank_leg(),
    );
    record.taken_classification = classification.to_string();
    record
}

/// Create a classified record contributing a handed-over movement at `station`
pub fn create_handed_row(station: &str, classification: &str, leg: Leg) -> InterchangeRecord {
    let mut record = InterchangeRecord::new(
        "CR".to_string(),
        station.to_string(),
        create_blank_leg(),
        leg,
    );
    record.handed_classification = classification.to_string();
    record
}

/// Create an aggregator over the default PH station list, no I/O
pub fn create_test_aggregator() -> Aggregator {
    Aggregator::new(PhStationStore::with_defaults(Path::new(
        "/tmp/test_ph_stations.csv",
    )))
}

/// Helper to create a temp directory and a store path inside it
pub fn create_store_path() -> (tempfile::TempDir, std::path::PathBuf) {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("ph_stations.csv");
    (temp_dir, path)
}

/// Helper to write a PH station store file with the given rows
pub fn write_store(path: &Path, header: &str, rows: &[&str]) {
    let mut content = String::from(header);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    std::fs::write(path, content).unwrap();
}
