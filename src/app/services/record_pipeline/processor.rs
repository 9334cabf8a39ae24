//! Main record pipeline implementation and stage orchestration
//!
//! This module contains the RecordPipeline struct coordinating wagon
//! classification, station normalization, priority ordering and duplicate
//! elimination over parsed interchange records.

use crate::Result;
use crate::app::models::InterchangeRecord;
use crate::app::services::wagon_classifier::WagonClassifier;
use crate::config::PipelineConfig;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

use super::{
    deduplication::remove_cross_referenced,
    normalizer::normalize_records,
    ordering::StationPriorityOrder,
    stats::{PipelineResult, PipelineStats},
};

/// Record pipeline for interchange extract rows
///
/// Takes parsed records (typically from the extract parser) and applies
/// classification, normalization, ordering and duplicate elimination in
/// fixed order. Classification runs first so both classification columns
/// see raw wagon types before any station rewrite.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use interchange_processor::app::services::record_pipeline::RecordPipeline;
/// use interchange_processor::app::services::wagon_classifier::WagonClassifier;
/// use interchange_processor::config::PipelineConfig;
///
/// # async fn example(records: Vec<interchange_processor::app::models::InterchangeRecord>) -> interchange_processor::Result<()> {
/// let classifier = Arc::new(WagonClassifier::with_defaults(std::path::Path::new(
///     "/data/wagon_classifications.csv",
/// )));
/// let pipeline = RecordPipeline::new(classifier, &PipelineConfig::default());
///
/// let result = pipeline.process_records(records, false).await?;
/// println!("{} records survive", result.record_count());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RecordPipeline {
    /// Wagon classifier backing both classification columns
    classifier: Arc<WagonClassifier>,
    /// Configured zone and station precedence
    ordering: StationPriorityOrder,
    /// Originating zones whose SAU traffic resolves to SAUS
    saus_zones: HashSet<String>,
}

impl RecordPipeline {
    /// Create a new record pipeline
    ///
    /// # Arguments
    ///
    /// * `classifier` - Loaded wagon classification table
    /// * `config` - Pipeline rules (SAUS zones, zone and station orders)
    pub fn new(classifier: Arc<WagonClassifier>, config: &PipelineConfig) -> Self {
        Self {
            classifier,
            ordering: StationPriorityOrder::new(config),
            saus_zones: config.saus_zones.iter().cloned().collect(),
        }
    }

    /// Process a collection of records through the full pipeline
    ///
    /// Applies the complete transformation:
    /// 1. Wagon classification of both legs
    /// 2. Station identity normalization (CNA and SAU rules)
    /// 3. Zone and station priority sort
    /// 4. Cross-referenced duplicate elimination
    ///
    /// # Arguments
    ///
    /// * `records` - Parsed records to process
    /// * `show_progress` - Whether to show progress bars for pipeline stages
    ///
    /// # Returns
    ///
    /// A `PipelineResult` containing the surviving records and statistics
    pub async fn process_records(
        &self,
        records: Vec<InterchangeRecord>,
        show_progress: bool,
    ) -> Result<PipelineResult> {
        let mut stats = PipelineStats::new();
        stats.records_in = records.len();

        info!("Starting record pipeline for {} records", records.len());

        let mut records = records;

        // Step 1: Classify both leg wagon types against the wagon table
        let classify_pb = if show_progress {
            let pb =
                Self::create_stage_progress_bar(records.len() as u64, "Classifying wagon types");
            Some(pb)
        } else {
            None
        };

        stats.legs_classified = self.classify_records(&mut records, classify_pb.as_ref());

        if let Some(pb) = classify_pb {
            pb.finish_with_message(format!(
                "Classification complete: {} legs classified",
                stats.legs_classified
            ));
        }

        // Step 2: Rewrite station identities (CNA rule, SAU disambiguation)
        let normalize_pb = if show_progress {
            let pb =
                Self::create_stage_progress_bar(records.len() as u64, "Normalizing stations");
            Some(pb)
        } else {
            None
        };

        stats.stations_rewritten =
            normalize_records(&mut records, &self.saus_zones, normalize_pb.as_ref());

        if let Some(pb) = normalize_pb {
            pb.finish_with_message(format!(
                "Normalization complete: {} rewrites",
                stats.stations_rewritten
            ));
        }

        // Step 3: Sort by configured zone and station precedence
        self.ordering.sort(&mut records);

        // Step 4: Remove cross-referenced duplicate rows
        let dedup_pb = if show_progress {
            let pb =
                Self::create_stage_progress_bar(records.len() as u64, "Duplicate elimination");
            Some(pb)
        } else {
            None
        };

        let (records, removed) = remove_cross_referenced(records, dedup_pb.as_ref());
        stats.duplicates_removed = removed;
        stats.records_out = records.len();

        if let Some(pb) = dedup_pb {
            pb.finish_with_message(format!(
                "Duplicate elimination complete: {} records remaining",
                records.len()
            ));
        }

        info!("{}", stats.summary());

        Ok(PipelineResult::new(records, stats))
    }

    /// Validate records before processing
    ///
    /// Catches obvious precondition violations early: an empty record set
    /// and blank identity fields the parser should have dropped.
    pub fn validate_records(&self, records: &[InterchangeRecord]) -> Result<()> {
        if records.is_empty() {
            return Err(crate::Error::data_validation(
                "Cannot process an empty record collection",
            ));
        }

        for (index, record) in records.iter().enumerate() {
            if record.zone_to.trim().is_empty() {
                return Err(crate::Error::data_validation(format!(
                    "Record at index {} has a blank destination zone",
                    index
                )));
            }

            if record.ic_station.trim().is_empty() {
                return Err(crate::Error::data_validation(format!(
                    "Record at index {} has a blank interchange station",
                    index
                )));
            }
        }

        Ok(())
    }

    /// Get the wagon classifier used by this pipeline
    pub fn classifier(&self) -> &WagonClassifier {
        &self.classifier
    }

    /// Get the station priority order used by this pipeline
    pub fn ordering(&self) -> &StationPriorityOrder {
        &self.ordering
    }

    /// Assign both classification columns from the raw leg wagon types
    fn classify_records(
        &self,
        records: &mut [InterchangeRecord],
        progress_bar: Option<&ProgressBar>,
    ) -> usize {
        let mut classified = 0;

        for record in records.iter_mut() {
            record.taken_classification = self
                .classifier
                .classify(record.taken_over.wagon_type.as_deref().unwrap_or(""));
            record.handed_classification = self
                .classifier
                .classify(record.handed_over.wagon_type.as_deref().unwrap_or(""));

            if !record.taken_classification.is_empty() {
                classified += 1;
            }
            if !record.handed_classification.is_empty() {
                classified += 1;
            }

            if let Some(pb) = progress_bar {
                pb.inc(1);
            }
        }

        classified
    }

    /// Create a progress bar for pipeline stages
    fn create_stage_progress_bar(total: u64, operation: &str) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg} [{per_sec}] ETA: {eta}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb.set_message(operation.to_string());
        pb
    }
}
