//! Per-station counting and detail tallies
//!
//! Aggregation runs once per report role over the full record set. Each
//! role groups records on its own station view, so a record whose two
//! views diverged during normalization is counted under different
//! stations in the two sections.

use tracing::{debug, info};

use crate::app::models::{InterchangeRecord, Role};
use crate::app::services::record_pipeline::stations_in_order;
use crate::constants::{categories, is_known_category};

use super::ph_stations::PhStationStore;
use super::summary::{
    CountPair, DetailColumns, GrandTotals, ReportData, SectionData, StationSummary,
};

/// Aggregates pipeline output into per-station report summaries
#[derive(Debug, Clone)]
pub struct Aggregator {
    ph_stations: PhStationStore,
}

impl Aggregator {
    /// Create a new aggregator over a loaded PH station list
    pub fn new(ph_stations: PhStationStore) -> Self {
        Self { ph_stations }
    }

    /// Build both report sections from the pipeline's record set
    pub async fn build_report_data(&self, records: &[InterchangeRecord]) -> ReportData {
        info!("Aggregating {} records into report sections", records.len());

        let handed_over = self.summarize_section(records, Role::HandedOver);
        let taken_over = self.summarize_section(records, Role::TakenOver);

        info!(
            "Aggregation complete: {} handed-over and {} taken-over stations",
            handed_over.station_count(),
            taken_over.station_count()
        );

        ReportData {
            handed_over,
            taken_over,
        }
    }

    /// The PH station list backing the taken-over BOXN split
    pub fn ph_stations(&self) -> &PhStationStore {
        &self.ph_stations
    }

    /// Summarize every station of one role, in first-occurrence order
    fn summarize_section(&self, records: &[InterchangeRecord], role: Role) -> SectionData {
        let stations = stations_in_order(records, role);
        let mut summaries = Vec::with_capacity(stations.len());

        for station in stations {
            let rows: Vec<&InterchangeRecord> = records
                .iter()
                .filter(|record| record.grouping_station(role) == station)
                .collect();
            summaries.push(self.summarize_station(station, &rows, role));
        }

        let totals = GrandTotals::from_summaries(&summaries);

        SectionData { summaries, totals }
    }

    fn summarize_station(
        &self,
        station: String,
        rows: &[&InterchangeRecord],
        role: Role,
    ) -> StationSummary {
        debug!("Summarizing {} {} rows for {}", rows.len(), role, station);

        let mut summary = StationSummary::new(station);

        summary.trains = trains_pair(rows, role);
        summary.diesel = diesel_count(rows, role);
        summary.jumbo = loaded_empty_pair(rows, role, categories::JUMBO);
        summary.boxn = match role {
            Role::HandedOver => loaded_empty_pair(rows, role, categories::BOX),
            Role::TakenOver => self.ph_oth_pair(rows),
        };
        summary.btpn = loaded_empty_pair(rows, role, categories::BTPN);
        summary.cont = container_count(rows, role);
        summary.details = collect_details(rows, role);

        summary
    }

    /// Split the taken-over BOXN bucket into PH and OTH counts
    ///
    /// PH counts loaded rows bound for a listed station. Every other
    /// destination, a missing one included, lands in OTH when the row is
    /// loaded or empty. Empty rows to a listed station count nowhere.
    fn ph_oth_pair(&self, rows: &[&InterchangeRecord]) -> CountPair {
        let mut pair = CountPair::default();

        for row in rows {
            if row.classification(Role::TakenOver) != categories::BOX {
                continue;
            }

            let leg = row.leg(Role::TakenOver);
            let listed = leg
                .station_to
                .as_deref()
                .is_some_and(|destination| self.ph_stations.contains(destination));

            if listed {
                if leg.is_loaded() {
                    pair.left += 1;
                }
            } else if leg.is_loaded_or_empty() {
                pair.right += 1;
            }
        }

        pair
    }
}

// =============================================================================
// Summary Figures
// =============================================================================

/// Count rows with a destination and rows with a loco type
fn trains_pair(rows: &[&InterchangeRecord], role: Role) -> CountPair {
    let mut pair = CountPair::default();

    for row in rows {
        let leg = row.leg(role);
        if leg.station_to.is_some() {
            pair.left += 1;
        }
        if leg.loco_type.is_some() {
            pair.right += 1;
        }
    }

    pair
}

/// Count rows hauled by a diesel locomotive
fn diesel_count(rows: &[&InterchangeRecord], role: Role) -> u32 {
    rows.iter()
        .filter(|row| row.leg(role).is_diesel_loco())
        .count() as u32
}

/// Count loaded and empty rows of one exact classification
fn loaded_empty_pair(rows: &[&InterchangeRecord], role: Role, classification: &str) -> CountPair {
    let mut pair = CountPair::default();

    for row in rows {
        if row.classification(role) != classification {
            continue;
        }

        let leg = row.leg(role);
        if leg.is_loaded() {
            pair.left += 1;
        } else if leg.is_empty_state() {
            pair.right += 1;
        }
    }

    pair
}

/// Count container rows, loaded and empty together
fn container_count(rows: &[&InterchangeRecord], role: Role) -> u32 {
    rows.iter()
        .filter(|row| {
            row.classification(role) == categories::CONT && row.leg(role).is_loaded_or_empty()
        })
        .count() as u32
}

// =============================================================================
// Detail Lists
// =============================================================================

/// Build all eight detail lists of one station
fn collect_details(rows: &[&InterchangeRecord], role: Role) -> DetailColumns {
    DetailColumns {
        jumbo: category_details(rows, role, &[categories::JUMBO], false),
        boxn: category_details(rows, role, &categories::BOXN_BUCKET, false),
        btpn: category_details(rows, role, &[categories::BTPN], false),
        btpg: category_details(rows, role, &[categories::BTPG], false),
        cont: category_details(rows, role, &[categories::CONT], true),
        shra: category_details(rows, role, &[categories::SHRA], false),
        others: others_details(rows, role),
        empties: empties_details(rows, role),
    }
}

/// Destination tallies for a category bucket, in first-occurrence order
///
/// Containers list empty rows alongside loaded ones; every other category
/// lists loaded rows only. Rows without a destination are skipped.
fn category_details(
    rows: &[&InterchangeRecord],
    role: Role,
    bucket: &[&str],
    include_empty: bool,
) -> Vec<String> {
    let mut destinations = Vec::new();

    for row in rows {
        if !bucket.contains(&row.classification(role)) {
            continue;
        }

        let leg = row.leg(role);
        let state_matches = if include_empty {
            leg.is_loaded_or_empty()
        } else {
            leg.is_loaded()
        };
        if !state_matches {
            continue;
        }

        if let Some(destination) = leg.station_to.as_deref() {
            destinations.push(destination);
        }
    }

    ordered_counts(&destinations)
        .into_iter()
        .map(|(destination, count)| {
            if count == 1 {
                destination.to_string()
            } else {
                format!("{}({})", destination, count)
            }
        })
        .collect()
}

/// Tallies of loaded rows whose classification has no dedicated column
///
/// Grouped by classification first, then by destination, each level in
/// first-occurrence order. A blank classification renders as `[STTN]`.
fn others_details(rows: &[&InterchangeRecord], role: Role) -> Vec<String> {
    let mut groups: Vec<(&str, Vec<(&str, usize)>)> = Vec::new();

    for row in rows {
        let classification = row.classification(role);
        if is_known_category(classification) {
            continue;
        }

        let leg = row.leg(role);
        if !leg.is_loaded() {
            continue;
        }
        let Some(destination) = leg.station_to.as_deref() else {
            continue;
        };

        let index = match groups
            .iter()
            .position(|(existing, _)| *existing == classification)
        {
            Some(index) => index,
            None => {
                groups.push((classification, Vec::new()));
                groups.len() - 1
            }
        };
        let group = &mut groups[index].1;

        match group.iter_mut().find(|(existing, _)| *existing == destination) {
            Some((_, count)) => *count += 1,
            None => group.push((destination, 1)),
        }
    }

    let mut details = Vec::new();
    for (classification, destinations) in groups {
        for (destination, count) in destinations {
            if count == 1 {
                details.push(format!("{}[{}]", classification, destination));
            } else {
                details.push(format!("{}[{}]-{}", classification, destination, count));
            }
        }
    }

    details
}

/// Tallies of empty rows by raw wagon type, containers excluded
fn empties_details(rows: &[&InterchangeRecord], role: Role) -> Vec<String> {
    let mut wagon_types = Vec::new();

    for row in rows {
        if row.classification(role) == categories::CONT {
            continue;
        }

        let leg = row.leg(role);
        if !leg.is_empty_state() {
            continue;
        }

        if let Some(wagon_type) = leg.wagon_type.as_deref() {
            wagon_types.push(wagon_type);
        }
    }

    ordered_counts(&wagon_types)
        .into_iter()
        .map(|(wagon_type, count)| {
            if count == 1 {
                wagon_type.to_string()
            } else {
                format!("{}-{}", wagon_type, count)
            }
        })
        .collect()
}

/// Tally values preserving first-occurrence order
fn ordered_counts<'a>(values: &[&'a str]) -> Vec<(&'a str, usize)> {
    let mut counts: Vec<(&'a str, usize)> = Vec::new();

    for value in values {
        match counts.iter_mut().find(|(existing, _)| existing == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }

    counts
}
