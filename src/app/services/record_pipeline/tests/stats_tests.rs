//! Tests for pipeline statistics and result structures

use super::*;
use crate::app::services::record_pipeline::stats::{PipelineResult, PipelineStats};

#[test]
fn test_new_stats_are_empty() {
    let stats = PipelineStats::new();

    assert_eq!(stats.records_in, 0);
    assert_eq!(stats.records_out, 0);
    assert_eq!(stats.legs_classified, 0);
    assert_eq!(stats.stations_rewritten, 0);
    assert_eq!(stats.duplicates_removed, 0);
}

#[test]
fn test_retention_rate() {
    let mut stats = PipelineStats::new();
    stats.records_in = 10;
    stats.records_out = 8;

    assert_eq!(stats.retention_rate(), 80.0);
}

#[test]
fn test_retention_rate_with_no_input() {
    let stats = PipelineStats::new();

    assert_eq!(stats.retention_rate(), 100.0);
}

#[test]
fn test_summary_contains_counts() {
    let mut stats = PipelineStats::new();
    stats.records_in = 10;
    stats.records_out = 8;
    stats.legs_classified = 19;
    stats.stations_rewritten = 4;
    stats.duplicates_removed = 2;

    let summary = stats.summary();

    assert!(summary.contains("10 -> 8"));
    assert!(summary.contains("80.0% retained"));
    assert!(summary.contains("Legs classified: 19"));
    assert!(summary.contains("Stations rewritten: 4"));
    assert!(summary.contains("Duplicates removed: 2"));
}

#[test]
fn test_default_matches_new() {
    assert_eq!(PipelineStats::default(), PipelineStats::new());
}

#[test]
fn test_result_exposes_record_count_and_summary() {
    let records = vec![
        create_full_record("CR", "BSR"),
        create_full_record("NW", "BEC"),
    ];
    let mut stats = PipelineStats::new();
    stats.records_in = 2;
    stats.records_out = 2;

    let result = PipelineResult::new(records, stats);

    assert_eq!(result.record_count(), 2);
    assert!(result.summary().contains("2 -> 2"));
}
