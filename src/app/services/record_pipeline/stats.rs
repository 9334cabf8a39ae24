//! Pipeline statistics and result structures
//!
//! This module provides types for tracking what each pipeline stage did to
//! the record set, for logging and the run summary.

use crate::app::models::InterchangeRecord;

/// Statistics for one record pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineStats {
    /// Number of records entering the pipeline
    pub records_in: usize,
    /// Number of leg wagon types assigned a classification (blank cells excluded)
    pub legs_classified: usize,
    /// Number of station identity rewrites applied by the normalizer
    pub stations_rewritten: usize,
    /// Number of cross-referenced rows removed
    pub duplicates_removed: usize,
    /// Number of records surviving all stages
    pub records_out: usize,
}

impl PipelineStats {
    /// Create new empty pipeline statistics
    pub fn new() -> Self {
        Self {
            records_in: 0,
            legs_classified: 0,
            stations_rewritten: 0,
            duplicates_removed: 0,
            records_out: 0,
        }
    }

    /// Share of input records that survived, as a percentage
    pub fn retention_rate(&self) -> f64 {
        if self.records_in == 0 {
            100.0
        } else {
            (self.records_out as f64 / self.records_in as f64) * 100.0
        }
    }

    /// Get summary of pipeline statistics for logging
    pub fn summary(&self) -> String {
        format!(
            "Pipeline summary: {} -> {} records ({:.1}% retained) | \
             Legs classified: {} | Stations rewritten: {} | Duplicates removed: {}",
            self.records_in,
            self.records_out,
            self.retention_rate(),
            self.legs_classified,
            self.stations_rewritten,
            self.duplicates_removed
        )
    }
}

impl Default for PipelineStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a record pipeline run
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// Classified, normalized, ordered and deduplicated records
    pub records: Vec<InterchangeRecord>,
    /// Stage statistics for the run
    pub stats: PipelineStats,
}

impl PipelineResult {
    /// Create a new pipeline result
    pub fn new(records: Vec<InterchangeRecord>, stats: PipelineStats) -> Self {
        Self { records, stats }
    }

    /// Get the number of surviving records
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        self.stats.summary()
    }
}
