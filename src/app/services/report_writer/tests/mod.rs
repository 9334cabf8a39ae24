//! Comprehensive tests for report writer module
//!
//! This module provides unit tests for grid assembly and artifact
//! writing, plus shared report data fixtures.


// Test helper functions and fixtures
use chrono::NaiveDate;

use crate::app::models::{InterchangeRecord, Leg};
use crate::app::services::aggregator::{
    CountPair, GrandTotals, ReportData, SectionData, StationSummary,
};

/// Fixed report date used across the tests
pub fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 17).unwrap()
}

/// Create a summary with zero counts and no details
pub fn create_summary(station: &str) -> StationSummary {
    StationSummary::new(station)
}

/// Create a summary with known figures for layout assertions
pub fn create_worked_summary(station: &str) -> StationSummary {
    let mut summary = StationSummary::new(station);
    summary.trains = CountPair::new(2, 1);
    summary.diesel = 1;
    summary.jumbo = CountPair::new(2, 0);
    summary.boxn = CountPair::new(1, 1);
    summary.btpn = CountPair::new(0, 0);
    summary.cont = 3;
    summary
}

/// Wrap summaries into a section with computed totals
pub fn create_section(summaries: Vec<StationSummary>) -> SectionData {
    let totals = GrandTotals::from_summaries(&summaries);
    SectionData { summaries, totals }
}

/// Create a fully processed record for intermediate artifact tests
pub fn create_processed_record() -> InterchangeRecord {
    let mut record = InterchangeRecord::new(
        "CR".to_string(),
        "BSR".to_string(),
        Leg::new(
            Some("WR".to_string()),
            Some("JSME".to_string()),
            Some("L".to_string()),
            Some("BCN".to_string()),
            Some("40012".to_string()),
            Some("WDG4".to_string()),
        ),
        Leg::new(
            Some("CR".to_string()),
            Some("KNW".to_string()),
            Some("E".to_string()),
            Some("BOXN".to_string()),
            None,
            Some("WAG9".to_string()),
        ),
    );
    record.taken_classification = "JUMBO".to_string();
    record.handed_classification = "BOX".to_string();
    record
}
