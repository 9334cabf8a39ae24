//! Test utilities and fixtures for extract parser testing
//!
//! This module provides shared extract content builders and temp-file
//! helpers used across the test modules.

use std::io::Write;
use tempfile::NamedTempFile;

mod parser_tests;
mod stats_tests;

/// Header row carrying every required extract column
pub fn extract_header() -> String {
    [
        "ZONE TO",
        "IC STTN",
        "TAKEN OVER ZONE FROM",
        "TAKEN OVER STTN TO",
        "TAKEN OVER L/E",
        "TAKEN OVER TYPE",
        "TAKEN OVER LOCO",
        "TAKEN OVER LOCO TYPE",
        "HANDED OVER ZONE TO",
        "HANDED OVER STTN TO",
        "HANDED OVER L/E",
        "HANDED OVER TYPE",
        "HANDED OVER LOCO",
        "HANDED OVER LOCO TYPE",
    ]
    .join(",")
}

/// Helper to wrap a header and data rows in the two-line banner preamble
pub fn wrap_in_preamble(header: &str, rows: &[&str]) -> String {
    format!(
        "ZONAL INTERCHANGE EXTRACT\nGenerated 03-05-2024 06:00\n{}\n{}",
        header,
        rows.join("\n")
    )
}

/// Helper to create a complete test extract with three clean rows
pub fn create_test_extract() -> String {
    wrap_in_preamble(
        &extract_header(),
        &[
            "CR,BSR,WR,JSME,L,BOXNHL,30123,WAG9,CR,KNW,E,BCN,40011,WDG4",
            "NW,CNA,WR,AII,L,BCN,30124,WDG4G,NW,PNU,L,BTPN,40012,WAG7",
            "DFCR,SAU,WR,GGM,E,SHRA,30125,WAG9,SEC,MSH,L,BOXN,40013,WDG4",
        ],
    )
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
