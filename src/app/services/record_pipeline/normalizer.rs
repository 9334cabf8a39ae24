//! Station identity rewrite rules
//!
//! This module implements the CNA→AII and SAU→SAUS/SAUN normalization rules.
//! Each record keeps two views of its interchange station: the taken-over
//! view (`ic_station`) resolves SAU against the taken-over leg's zone, the
//! handed-over view (`ic_station_copy`) against the handed-over leg's zone.
//! The two legs of one transfer can belong to different zones, so the same
//! physical SAU station is disambiguated independently per view.

use crate::app::models::InterchangeRecord;
use crate::constants::{stations, zones};
use indicatif::ProgressBar;
use std::collections::HashSet;
use tracing::info;

/// Apply the station rewrite rules to a collection of records
///
/// # Arguments
///
/// * `records` - Records to normalize in place
/// * `saus_zones` - Originating zones whose SAU traffic resolves to SAUS
/// * `progress_bar` - Optional progress bar for tracking progress
///
/// # Returns
///
/// Total number of station fields rewritten
pub fn normalize_records(
    records: &mut [InterchangeRecord],
    saus_zones: &HashSet<String>,
    progress_bar: Option<&ProgressBar>,
) -> usize {
    let mut rewrites = 0;

    for record in records.iter_mut() {
        rewrites += normalize_record(record, saus_zones);

        if let Some(pb) = progress_bar {
            pb.inc(1);
        }
    }

    info!(
        "Normalization complete: {} station rewrites across {} records",
        rewrites,
        records.len()
    );

    rewrites
}

/// Apply the station rewrite rules to a single record
///
/// Rules run in fixed order. The taken-over view gets the CNA rule and then
/// SAU disambiguation against the taken-over zone. The handed-over view
/// restarts from the raw station (a raw SAU must resolve against its own
/// leg, never inherit SAUS/SAUN from the other view), gets the CNA rule
/// again and resolves SAU against the handed-over zone.
///
/// # Returns
///
/// Number of station fields rewritten (0 to 4)
pub fn normalize_record(record: &mut InterchangeRecord, saus_zones: &HashSet<String>) -> usize {
    let raw_station = record.ic_station.clone();
    let mut rewrites = 0;

    // Taken-over view
    if rewrite_cna(&record.zone_to, &mut record.ic_station) {
        rewrites += 1;
    }
    if record.ic_station == stations::SAU {
        record.ic_station =
            disambiguate_sau(record.taken_over.zone.as_deref(), saus_zones).to_string();
        rewrites += 1;
    }

    // Handed-over view, restarted from the raw station
    record.ic_station_copy = raw_station;
    if rewrite_cna(&record.zone_to, &mut record.ic_station_copy) {
        rewrites += 1;
    }
    if record.ic_station_copy == stations::SAU {
        record.ic_station_copy =
            disambiguate_sau(record.handed_over.zone.as_deref(), saus_zones).to_string();
        rewrites += 1;
    }

    rewrites
}

/// Resolve an ambiguous SAU station against a leg zone
///
/// A missing zone resolves to SAUN rather than failing the row.
pub fn disambiguate_sau(zone: Option<&str>, saus_zones: &HashSet<String>) -> &'static str {
    match zone {
        Some(zone) if saus_zones.contains(zone) => stations::SAUS,
        _ => stations::SAUN,
    }
}

/// Rewrite CNA to AII when the destination zone is NW
///
/// Idempotent: an already rewritten station no longer matches.
fn rewrite_cna(zone_to: &str, station: &mut String) -> bool {
    if zone_to == zones::NW && station == stations::CNA {
        *station = stations::AII.to_string();
        true
    } else {
        false
    }
}
