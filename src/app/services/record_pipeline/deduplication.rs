//! Cross-referenced duplicate row elimination
//!
//! A wagon movement that round-trips between the same two stations shows up
//! twice in one extract: once on a taken-over leg and once on a handed-over
//! leg. Counting both would double the movement in the report, so every row
//! contributing such a pair is removed from both sides.

use crate::app::models::InterchangeRecord;
use indicatif::ProgressBar;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// Remove rows whose two legs cross-reference the same station pair
///
/// For each station code S, the set of taken-over destinations over rows
/// where S is the taken-over view is intersected with the set of handed-over
/// destinations over rows where S is the handed-over view. Every row
/// contributing a shared destination on either leg is dropped. Surviving
/// rows keep their prior relative order.
///
/// # Arguments
///
/// * `records` - Sorted records to filter
/// * `progress_bar` - Optional progress bar for tracking progress
///
/// # Returns
///
/// Tuple of (surviving records, number of rows removed)
pub fn remove_cross_referenced(
    mut records: Vec<InterchangeRecord>,
    progress_bar: Option<&ProgressBar>,
) -> (Vec<InterchangeRecord>, usize) {
    let conflicting = conflicting_pairs(&records);

    if conflicting.is_empty() {
        if let Some(pb) = progress_bar {
            pb.inc(records.len() as u64);
        }
        debug!("No cross-referenced station pairs found");
        return (records, 0);
    }

    debug!(
        "Found {} cross-referenced station pairs: {:?}",
        conflicting.len(),
        conflicting
    );

    let before = records.len();
    records.retain(|record| {
        if let Some(pb) = progress_bar {
            pb.inc(1);
        }
        !contributes_conflict(record, &conflicting)
    });
    let removed = before - records.len();

    info!(
        "Duplicate elimination complete: removed {} of {} rows over {} station pairs",
        removed,
        before,
        conflicting.len()
    );

    (records, removed)
}

/// Collect the (station, destination) pairs reached by both legs
///
/// A pair is conflicting when some row reaches the destination on its
/// taken-over leg grouped at that station and some row (possibly the same)
/// reaches it on its handed-over leg grouped at that station.
pub fn conflicting_pairs(records: &[InterchangeRecord]) -> HashSet<(String, String)> {
    let mut taken_destinations: HashMap<&str, HashSet<&str>> = HashMap::new();
    let mut handed_destinations: HashMap<&str, HashSet<&str>> = HashMap::new();

    for record in records {
        if let Some(destination) = record.taken_over.station_to.as_deref() {
            taken_destinations
                .entry(record.ic_station.as_str())
                .or_default()
                .insert(destination);
        }
        if let Some(destination) = record.handed_over.station_to.as_deref() {
            handed_destinations
                .entry(record.ic_station_copy.as_str())
                .or_default()
                .insert(destination);
        }
    }

    let mut pairs = HashSet::new();
    for (station, taken) in &taken_destinations {
        if let Some(handed) = handed_destinations.get(station) {
            for destination in taken.intersection(handed) {
                pairs.insert((station.to_string(), destination.to_string()));
            }
        }
    }

    pairs
}

/// Check whether either leg of a record contributes a conflicting pair
fn contributes_conflict(
    record: &InterchangeRecord,
    conflicting: &HashSet<(String, String)>,
) -> bool {
    let taken_hit = record
        .taken_over
        .station_to
        .as_deref()
        .is_some_and(|destination| {
            conflicting.contains(&(record.ic_station.clone(), destination.to_string()))
        });

    let handed_hit = record
        .handed_over
        .station_to
        .as_deref()
        .is_some_and(|destination| {
            conflicting.contains(&(record.ic_station_copy.clone(), destination.to_string()))
        });

    taken_hit || handed_hit
}
