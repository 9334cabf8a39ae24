//! Parser for raw wagon-interchange extract files
//!
//! This module turns a raw interchange extract into typed records. The
//! extract format is rigid: a fixed banner preamble, a header row that must
//! carry every required column, then one data row per interchange movement.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - File handling, preamble skipping and record construction
//! - [`column_mapping`] - Header validation and column index resolution
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use interchange_processor::app::services::extract_parser::ExtractParser;
//!
//! # async fn example() -> interchange_processor::Result<()> {
//! let parser = ExtractParser::new();
//! let result = parser.parse_file(std::path::Path::new("extract.csv")).await?;
//!
//! println!("Parsed {} records from {} rows",
//!          result.stats.rows_parsed,
//!          result.stats.total_rows);
//! # Ok(())
//! # }
//! ```

pub mod column_mapping;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::ColumnMapping;
pub use parser::ExtractParser;
pub use stats::{ParseResult, ParseStats};
