//! Aggregation of pipeline records into report sections
//!
//! This module turns the surviving record set into the per-station
//! summaries and grand totals both report sections are rendered from. Each
//! record is counted twice, once under its handed-over station view and
//! once under its taken-over view.
//!
//! # Architecture
//!
//! The module is organized into logical components:
//! - [`compute`] - Main Aggregator struct, counting and detail tallies
//! - [`summary`] - Section, station and totals data structures
//! - [`ph_stations`] - Persistent PH station reference list
//!
//! # Aggregation Steps
//!
//! Each section is built the same way:
//!
//! 1. **Grouping**: Records group on the role's station view, stations kept
//!    in first-occurrence order
//! 2. **Summary figures**: Trains, diesel, category pairs and container
//!    counts per station; the taken-over BOXN pair splits into PH and OTH
//!    against the station list
//! 3. **Detail lists**: Destination tallies per report category, plus the
//!    OTHERS and EMPTIES columns
//! 4. **Totals**: Section grand totals summed over every station
//!
//! # Example Usage
//!
//! ```rust
//! use interchange_processor::app::services::aggregator::{Aggregator, PhStationStore};
//!
//! # async fn example(records: Vec<interchange_processor::app::models::InterchangeRecord>) -> interchange_processor::Result<()> {
//! // Set up the PH station list
//! let ph_stations = PhStationStore::with_defaults(std::path::Path::new(
//!     "/data/ph_stations.csv",
//! ));
//!
//! // Aggregate both sections
//! let aggregator = Aggregator::new(ph_stations);
//! let report_data = aggregator.build_report_data(&records).await;
//!
//! println!(
//!     "Aggregated {} handed-over and {} taken-over stations",
//!     report_data.handed_over.station_count(),
//!     report_data.taken_over.station_count()
//! );
//! # Ok(())
//! # }
//! ```

pub mod compute;
pub mod ph_stations;
pub mod summary;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use compute::Aggregator;
pub use ph_stations::PhStationStore;
pub use summary::{
    CountPair, DetailColumns, GrandTotals, ReportData, SectionData, StationSummary,
};
