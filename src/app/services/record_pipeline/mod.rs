//! Record pipeline for parsed interchange records
//!
//! This module transforms parsed extract rows into the record set the
//! aggregator and report writer consume. It assigns wagon classifications,
//! rewrites ambiguous station identities, sorts by the configured zone and
//! station precedence, and removes cross-referenced duplicate rows.
//!
//! # Architecture
//!
//! The module is organized into logical components:
//! - [`processor`] - Main RecordPipeline struct and stage orchestration
//! - [`normalizer`] - CNA and SAU station identity rewrite rules
//! - [`ordering`] - Zone and station priority sorting
//! - [`deduplication`] - Cross-referenced duplicate row elimination
//! - [`stats`] - Pipeline statistics and result structures
//!
//! # Processing Stages
//!
//! The pipeline applies four stages in fixed order:
//!
//! 1. **Classification**: Both leg wagon types resolve to categories through
//!    the wagon classifier (raw codes, before any station rewrite)
//! 2. **Normalization**: CNA→AII and SAU→SAUS/SAUN rewrites produce the
//!    taken-over and handed-over grouping views of the interchange station
//! 3. **Ordering**: Stable sort by zone priority, then handed-over view,
//!    then taken-over view station priority
//! 4. **Duplicate Elimination**: Rows whose two legs cross-reference the
//!    same station pair are removed from both sides
//!
//! # Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use interchange_processor::app::services::record_pipeline::RecordPipeline;
//! use interchange_processor::app::services::wagon_classifier::WagonClassifier;
//! use interchange_processor::config::PipelineConfig;
//!
//! # async fn example(records: Vec<interchange_processor::app::models::InterchangeRecord>) -> interchange_processor::Result<()> {
//! // Set up dependencies
//! let classifier = Arc::new(WagonClassifier::with_defaults(std::path::Path::new(
//!     "/data/wagon_classifications.csv",
//! )));
//! let config = PipelineConfig::default();
//!
//! // Create pipeline
//! let pipeline = RecordPipeline::new(classifier, &config);
//!
//! // Run all stages
//! let result = pipeline.process_records(records, false).await?;
//!
//! // Check results
//! println!("Pipeline summary: {}", result.summary());
//! println!("{} records survive", result.record_count());
//! # Ok(())
//! # }
//! ```

pub mod deduplication;
pub mod normalizer;
pub mod ordering;
pub mod processor;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use ordering::StationPriorityOrder;
pub use processor::RecordPipeline;
pub use stats::{PipelineResult, PipelineStats};

// Re-export stage functions that might be useful externally
pub use deduplication::{conflicting_pairs, remove_cross_referenced};
pub use normalizer::{disambiguate_sau, normalize_record};
pub use ordering::stations_in_order;
