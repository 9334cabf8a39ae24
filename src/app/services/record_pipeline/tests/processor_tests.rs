//! Tests for record pipeline orchestration

use super::*;

#[tokio::test]
async fn test_full_pipeline_worked_example() {
    // A loaded BCN rake taken over from CR at CNA, destination zone NW
    let record = create_record(
        "NW",
        "CNA",
        create_leg(Some("CR"), Some("X"), Some("L"), Some("BCN"), None),
        create_blank_leg(),
    );

    let pipeline = create_test_pipeline();
    let result = pipeline.process_records(vec![record], false).await.unwrap();

    assert_eq!(result.record_count(), 1);
    let processed = &result.records[0];
    assert_eq!(processed.ic_station, "AII");
    assert_eq!(processed.ic_station_copy, "AII");
    assert_eq!(processed.taken_classification, "JUMBO");
    assert_eq!(processed.handed_classification, "");
}

#[tokio::test]
async fn test_sau_disambiguation_worked_example() {
    let southern = create_record(
        "DFCR",
        "SAU",
        create_leg(Some("WR"), Some("X"), Some("L"), Some("BCN"), None),
        create_blank_leg(),
    );
    let northern = create_record(
        "DFCR",
        "SAU",
        create_leg(Some("XYZ"), Some("Y"), Some("L"), Some("BCN"), None),
        create_blank_leg(),
    );

    let pipeline = create_test_pipeline();
    let result = pipeline
        .process_records(vec![southern, northern], false)
        .await
        .unwrap();

    let stations: Vec<&str> = result
        .records
        .iter()
        .map(|record| record.ic_station.as_str())
        .collect();
    assert!(stations.contains(&"SAUS"));
    assert!(stations.contains(&"SAUN"));
}

#[tokio::test]
async fn test_unknown_wagon_type_classifies_to_itself() {
    let record = create_record(
        "CR",
        "BSR",
        create_leg(Some("WR"), Some("X"), Some("L"), Some("ZZZZ"), None),
        create_blank_leg(),
    );

    let pipeline = create_test_pipeline();
    let result = pipeline.process_records(vec![record], false).await.unwrap();

    assert_eq!(result.records[0].taken_classification, "ZZZZ");
}

#[tokio::test]
async fn test_pipeline_stats_populated() {
    let records = vec![
        // CNA rewrite on both views, one classified leg
        create_record(
            "NW",
            "CNA",
            create_leg(Some("CR"), Some("X"), Some("L"), Some("BCN"), None),
            create_blank_leg(),
        ),
        // No rewrites, both legs classified
        create_full_record("CR", "BSR"),
    ];

    let pipeline = create_test_pipeline();
    let result = pipeline.process_records(records, false).await.unwrap();

    assert_eq!(result.stats.records_in, 2);
    assert_eq!(result.stats.records_out, 2);
    assert_eq!(result.stats.legs_classified, 3);
    assert_eq!(result.stats.stations_rewritten, 2);
    assert_eq!(result.stats.duplicates_removed, 0);
    assert_eq!(result.stats.retention_rate(), 100.0);
}

#[tokio::test]
async fn test_pipeline_sorts_and_removes_duplicates() {
    let conflicted = create_record(
        "CR",
        "KNW",
        create_leg(Some("WR"), Some("X"), Some("L"), Some("BCN"), None),
        create_leg(Some("CR"), Some("X"), Some("E"), Some("BOXN"), None),
    );
    let records = vec![
        create_full_record("NW", "BEC"),
        conflicted,
        create_full_record("CR", "BSR"),
    ];

    let pipeline = create_test_pipeline();
    let result = pipeline.process_records(records, false).await.unwrap();

    assert_eq!(result.stats.duplicates_removed, 1);
    let keys: Vec<(&str, &str)> = result
        .records
        .iter()
        .map(|record| (record.zone_to.as_str(), record.ic_station.as_str()))
        .collect();
    assert_eq!(keys, [("CR", "BSR"), ("NW", "BEC")]);
}

#[tokio::test]
async fn test_empty_input_yields_empty_result() {
    let pipeline = create_test_pipeline();
    let result = pipeline.process_records(Vec::new(), false).await.unwrap();

    assert_eq!(result.record_count(), 0);
    assert_eq!(result.stats.retention_rate(), 100.0);
}

#[test]
fn test_validate_records_rejects_empty_collection() {
    let pipeline = create_test_pipeline();

    assert!(pipeline.validate_records(&[]).is_err());
}

#[test]
fn test_validate_records_rejects_blank_identities() {
    let pipeline = create_test_pipeline();

    let blank_zone = create_record("  ", "BSR", create_blank_leg(), create_blank_leg());
    assert!(pipeline.validate_records(&[blank_zone]).is_err());

    let blank_station = create_record("CR", "", create_blank_leg(), create_blank_leg());
    assert!(pipeline.validate_records(&[blank_station]).is_err());

    let good = create_full_record("CR", "BSR");
    assert!(pipeline.validate_records(&[good]).is_ok());
}

#[test]
fn test_pipeline_exposes_classifier() {
    let pipeline = create_test_pipeline();

    assert_eq!(pipeline.classifier().classify("BCN"), "JUMBO");
    assert_eq!(pipeline.ordering().zone_priority("CR"), 0);
}
