//! Tests for the main extract parser functionality

use super::*;
use crate::Error;
use crate::app::services::extract_parser::ExtractParser;

#[tokio::test]
async fn test_parse_complete_extract() {
    let temp_file = create_temp_file(&create_test_extract());
    let parser = ExtractParser::new();

    let result = parser.parse_file(temp_file.path()).await.unwrap();

    assert_eq!(result.stats.total_rows, 3);
    assert_eq!(result.stats.rows_parsed, 3);
    assert_eq!(result.stats.rows_skipped, 0);
    assert!(result.stats.errors.is_empty());

    let first = &result.records[0];
    assert_eq!(first.zone_to, "CR");
    assert_eq!(first.ic_station, "BSR");
    assert_eq!(first.ic_station_copy, "BSR");
    assert_eq!(first.taken_over.zone.as_deref(), Some("WR"));
    assert_eq!(first.taken_over.wagon_type.as_deref(), Some("BOXNHL"));
    assert_eq!(first.handed_over.station_to.as_deref(), Some("KNW"));
    assert_eq!(first.handed_over.loco_type.as_deref(), Some("WDG4"));

    // Classifications stay empty until the pipeline fills them
    assert!(first.taken_classification.is_empty());
    assert!(first.handed_classification.is_empty());
}

#[tokio::test]
async fn test_blank_identity_rows_skipped() {
    let content = wrap_in_preamble(
        &extract_header(),
        &[
            "CR,BSR,WR,JSME,L,BOXNHL,30123,WAG9,CR,KNW,E,BCN,40011,WDG4",
            ",BSR,WR,JSME,L,BOXNHL,30123,WAG9,CR,KNW,E,BCN,40011,WDG4",
            "CR,  ,WR,JSME,L,BOXNHL,30123,WAG9,CR,KNW,E,BCN,40011,WDG4",
        ],
    );
    let temp_file = create_temp_file(&content);

    let result = ExtractParser::new()
        .parse_file(temp_file.path())
        .await
        .unwrap();

    assert_eq!(result.stats.total_rows, 3);
    assert_eq!(result.stats.rows_parsed, 1);
    assert_eq!(result.stats.rows_skipped, 2);
    assert_eq!(result.records.len(), 1);
}

#[tokio::test]
async fn test_blank_leg_cells_become_none() {
    let content = wrap_in_preamble(
        &extract_header(),
        &["CR,BSR,,JSME, ,BOXNHL,,WAG9,CR,,E,,40011,"],
    );
    let temp_file = create_temp_file(&content);

    let result = ExtractParser::new()
        .parse_file(temp_file.path())
        .await
        .unwrap();

    let record = &result.records[0];
    assert_eq!(record.taken_over.zone, None);
    assert_eq!(record.taken_over.load_state, None);
    assert_eq!(record.taken_over.loco, None);
    assert_eq!(record.handed_over.station_to, None);
    assert_eq!(record.handed_over.wagon_type, None);
    assert_eq!(record.handed_over.loco_type, None);
}

#[tokio::test]
async fn test_short_rows_skipped_without_aborting() {
    let content = wrap_in_preamble(
        &extract_header(),
        &[
            "CR,BSR",
            "NW,CNA,WR,AII,L,BCN,30124,WDG4G,NW,PNU,L,BTPN,40012,WAG7",
        ],
    );
    let temp_file = create_temp_file(&content);

    let result = ExtractParser::new()
        .parse_file(temp_file.path())
        .await
        .unwrap();

    // The short row still has its identity cells, so it parses with all
    // leg cells absent
    assert_eq!(result.stats.rows_parsed, 2);
    assert_eq!(result.records[0].taken_over.zone, None);
}

#[tokio::test]
async fn test_missing_required_columns_abort() {
    let header = "ZONE TO,IC STTN,TAKEN OVER ZONE FROM,TAKEN OVER STTN TO";
    let content = wrap_in_preamble(header, &["CR,BSR,WR,JSME"]);
    let temp_file = create_temp_file(&content);

    let result = ExtractParser::new().parse_file(temp_file.path()).await;

    match result {
        Err(Error::MissingColumns { columns, .. }) => {
            assert_eq!(columns.len(), 10);
            assert!(columns.contains(&"TAKEN OVER L/E".to_string()));
            assert!(columns.contains(&"HANDED OVER LOCO TYPE".to_string()));
        }
        other => panic!("Expected missing columns error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_file_shorter_than_preamble() {
    let temp_file = create_temp_file("ZONAL INTERCHANGE EXTRACT");

    let result = ExtractParser::new().parse_file(temp_file.path()).await;

    assert!(matches!(result, Err(Error::ExtractFormat { .. })));
}

#[tokio::test]
async fn test_missing_file() {
    let result = ExtractParser::new()
        .parse_file(std::path::Path::new("/nonexistent/extract.csv"))
        .await;

    assert!(matches!(result, Err(Error::FileNotFound { .. })));
}

#[tokio::test]
async fn test_empty_data_section() {
    let content = format!(
        "ZONAL INTERCHANGE EXTRACT\nGenerated 03-05-2024 06:00\n{}\n",
        extract_header()
    );
    let temp_file = create_temp_file(&content);

    let result = ExtractParser::new()
        .parse_file(temp_file.path())
        .await
        .unwrap();

    assert_eq!(result.stats.total_rows, 0);
    assert!(result.records.is_empty());
}
