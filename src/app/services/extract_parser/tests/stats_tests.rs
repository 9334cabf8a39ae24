//! Tests for extract parsing statistics

use crate::app::services::extract_parser::ParseStats;

#[test]
fn test_empty_stats() {
    let stats = ParseStats::new();
    assert_eq!(stats.total_rows, 0);
    assert_eq!(stats.success_rate(), 0.0);
    assert!(!stats.is_successful());
}

#[test]
fn test_success_rate() {
    let stats = ParseStats {
        total_rows: 200,
        rows_parsed: 190,
        rows_skipped: 10,
        errors: Vec::new(),
    };

    assert_eq!(stats.success_rate(), 95.0);
    assert!(stats.is_successful());
}

#[test]
fn test_low_success_rate_flagged() {
    let stats = ParseStats {
        total_rows: 10,
        rows_parsed: 5,
        rows_skipped: 5,
        errors: vec!["CSV parse error at row 3: bad row".to_string()],
    };

    assert_eq!(stats.success_rate(), 50.0);
    assert!(!stats.is_successful());
}

#[test]
fn test_default_matches_new() {
    let stats = ParseStats::default();
    assert_eq!(stats.total_rows, ParseStats::new().total_rows);
    assert!(stats.errors.is_empty());
}
