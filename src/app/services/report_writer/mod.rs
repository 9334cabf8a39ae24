//! Final report and intermediate artifact writing
//!
//! This module renders aggregated section data into the two-section
//! report grid and writes both pipeline artifacts as CSV files under the
//! output directory.
//!
//! # Architecture
//!
//! The module is organized into logical components:
//! - [`grid`] - Report grid assembly from aggregated section data
//! - [`writer`] - Main ReportWriter struct and atomic CSV writing
//!
//! # Report Layout
//!
//! The grid is thirty columns wide, the taken-over section mirroring the
//! handed-over one fifteen columns to the right:
//!
//! 1. **Header rows**: Title with the report date, section names, summary
//!    captions and the detail sub-captions
//! 2. **Station blocks**: One block per station pair, sections advancing
//!    in lockstep; summary figures on the first row, details stacked below
//! 3. **Grand totals**: One row directly below the last block
//! 4. **Stock table**: Skeleton for manual entry, three rows further down
//!
//! # Example Usage
//!
//! ```rust
//! use interchange_processor::app::services::report_writer::ReportWriter;
//!
//! # async fn example(
//! #     records: Vec<interchange_processor::app::models::InterchangeRecord>,
//! #     data: interchange_processor::app::services::aggregator::ReportData,
//! # ) -> interchange_processor::Result<()> {
//! let writer = ReportWriter::new(std::path::Path::new("./output"));
//!
//! // Record set first, rendered report second
//! let intermediate = writer.write_intermediate(&records, "interchange_extract").await?;
//! let report = writer
//!     .write_final_report(&data, chrono::Local::now().date_naive(), "interchange_extract")
//!     .await?;
//!
//! println!("Wrote {} and {}", intermediate.display(), report.display());
//! # Ok(())
//! # }
//! ```

pub mod grid;
pub mod writer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use grid::{ReportGrid, build_report_grid};
pub use writer::ReportWriter;
