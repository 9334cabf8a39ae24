//! Zone and station priority ordering
//!
//! The report lists zones and stations in a configured precedence, not
//! alphabetically. This module sorts the record set by that precedence and
//! derives the first-occurrence station lists the aggregator and report
//! writer iterate over.

use crate::app::models::{InterchangeRecord, Role};
use crate::config::PipelineConfig;
use crate::constants::stations;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Configured zone and per-zone station precedence
///
/// Unlisted zones rank after every listed zone; unlisted stations within a
/// zone rank at a fixed sentinel, so ties between them fall back to extract
/// order under the stable sort.
#[derive(Debug, Clone)]
pub struct StationPriorityOrder {
    zone_order: Vec<String>,
    station_order: HashMap<String, Vec<String>>,
}

impl StationPriorityOrder {
    /// Build the priority order from pipeline configuration
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            zone_order: config.zone_order.clone(),
            station_order: config.station_order.clone(),
        }
    }

    /// Sort rank of a destination zone
    pub fn zone_priority(&self, zone: &str) -> usize {
        self.zone_order
            .iter()
            .position(|candidate| candidate == zone)
            .unwrap_or(self.zone_order.len())
    }

    /// Sort rank of a station within a zone
    pub fn station_priority(&self, zone: &str, station: &str) -> usize {
        self.station_order
            .get(zone)
            .and_then(|order| order.iter().position(|candidate| candidate == station))
            .unwrap_or(stations::UNLISTED_PRIORITY)
    }

    /// Sort records by zone, then station priority of both identity views
    ///
    /// The handed-over view leads because the rendered report lists
    /// handed-over stations in the outer order. The sort is stable, so rows
    /// beyond the configured orders keep their extract order.
    pub fn sort(&self, records: &mut [InterchangeRecord]) {
        records.sort_by_key(|record| {
            (
                self.zone_priority(&record.zone_to),
                self.station_priority(&record.zone_to, &record.ic_station_copy),
                self.station_priority(&record.zone_to, &record.ic_station),
            )
        });

        debug!(
            "Sorted {} records across {} configured zones",
            records.len(),
            self.zone_order.len()
        );
    }
}

/// First-occurrence order of distinct grouping stations for one role
///
/// This, not the sort key, defines the literal station iteration order of
/// the aggregator and the report writer.
pub fn stations_in_order(records: &[InterchangeRecord], role: Role) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut ordered = Vec::new();

    for record in records {
        let station = record.grouping_station(role);
        if seen.insert(station) {
            ordered.push(station.to_string());
        }
    }

    ordered
}
