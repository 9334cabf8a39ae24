//! Core extract parser implementation
//!
//! This module handles file reading, preamble skipping and row-by-row
//! record construction with per-row error capture.

use std::path::Path;
use tracing::{debug, info, warn};

use super::column_mapping::ColumnMapping;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{InterchangeRecord, Leg};
use crate::constants::{columns, extract};
use crate::{Error, Result};

/// Parser for raw wagon-interchange extracts
///
/// Schema problems (missing required columns) abort the run. Row problems
/// degrade gracefully: rows with blank identity cells are counted and
/// skipped, malformed CSV rows are captured as row errors.
#[derive(Debug, Default)]
pub struct ExtractParser;

impl ExtractParser {
    /// Create a new extract parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a raw extract file and return records with statistics
    pub async fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing extract file: {}", file_path.display());

        if !file_path.exists() {
            return Err(Error::file_not_found(file_path.display().to_string()));
        }

        let file_name = file_path.display().to_string();

        let content = std::fs::read_to_string(file_path).map_err(|error| {
            Error::io(format!("Failed to read extract file {}", file_name), error)
        })?;

        let body = self.skip_preamble(&content, &file_name)?;

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(body.as_bytes());

        let headers = csv_reader
            .headers()
            .map_err(|error| {
                Error::csv_parsing(
                    file_name.as_str(),
                    "Failed to read extract header row",
                    Some(error),
                )
            })?
            .clone();

        let mapping = ColumnMapping::analyze(&headers, &file_name)?;
        debug!("Extract header mapped: {} columns", mapping.column_count());

        let mut stats = ParseStats::new();
        let mut records = Vec::new();

        for result in csv_reader.records() {
            stats.total_rows += 1;

            match result {
                Ok(row) => match build_record(&row, &mapping) {
                    Some(record) => {
                        records.push(record);
                        stats.rows_parsed += 1;
                    }
                    None => {
                        stats.rows_skipped += 1;
                        debug!("Skipped row {}: blank record identity", stats.total_rows);
                    }
                },
                Err(error) => {
                    stats.rows_skipped += 1;
                    stats.errors.push(format!(
                        "CSV parse error at row {}: {}",
                        stats.total_rows, error
                    ));
                }
            }
        }

        info!(
            "Parsed {} records from {} rows ({} skipped)",
            stats.rows_parsed, stats.total_rows, stats.rows_skipped
        );

        if records.is_empty() {
            warn!("Extract contains no usable records");
        }

        Ok(ParseResult { records, stats })
    }

    /// Skip the banner preamble and return the header-plus-data body
    fn skip_preamble<'a>(&self, content: &'a str, file: &str) -> Result<&'a str> {
        let mut offset = 0;

        for _ in 0..extract::PREAMBLE_ROWS {
            match content[offset..].find('\n') {
                Some(position) => offset += position + 1,
                None => {
                    return Err(Error::extract_format(
                        file,
                        format!(
                            "File ends inside the {}-line preamble",
                            extract::PREAMBLE_ROWS
                        ),
                    ));
                }
            }
        }

        Ok(&content[offset..])
    }
}

/// Build a record from a data row
///
/// Rows with a blank ZONE TO or IC STTN cell carry no usable identity and
/// yield `None`. Every leg cell is optional.
fn build_record(row: &csv::StringRecord, mapping: &ColumnMapping) -> Option<InterchangeRecord> {
    let zone_to = mapping.field(row, columns::ZONE_TO)?;
    let ic_station = mapping.field(row, columns::IC_STTN)?;

    let taken_over = Leg::new(
        mapping.field(row, columns::TAKEN_ZONE_FROM).map(str::to_string),
        mapping.field(row, columns::TAKEN_STTN_TO).map(str::to_string),
        mapping
            .field(row, columns::TAKEN_LOAD_STATE)
            .map(str::to_string),
        mapping.field(row, columns::TAKEN_TYPE).map(str::to_string),
        mapping.field(row, columns::TAKEN_LOCO).map(str::to_string),
        mapping
            .field(row, columns::TAKEN_LOCO_TYPE)
            .map(str::to_string),
    );

    let handed_over = Leg::new(
        mapping
            .field(row, columns::HANDED_ZONE_TO)
            .map(str::to_string),
        mapping
            .field(row, columns::HANDED_STTN_TO)
            .map(str::to_string),
        mapping
            .field(row, columns::HANDED_LOAD_STATE)
            .map(str::to_string),
        mapping.field(row, columns::HANDED_TYPE).map(str::to_string),
        mapping.field(row, columns::HANDED_LOCO).map(str::to_string),
        mapping
            .field(row, columns::HANDED_LOCO_TYPE)
            .map(str::to_string),
    );

    Some(InterchangeRecord::new(
        zone_to.to_string(),
        ic_station.to_string(),
        taken_over,
        handed_over,
    ))
}
