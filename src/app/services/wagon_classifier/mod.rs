//! Wagon type classification with a persistent lookup table
//!
//! This module maps raw wagon type codes to report categories. The table
//! lives in a two-column CSV store; a missing store is seeded with the
//! built-in defaults, and unknown codes fall back to themselves so new
//! wagon types surface in the report instead of disappearing.
//!
//! ## Architecture
//!
//! - [`classifier`] - Table loading, lookup, merging and atomic persistence
//!
//! ## Usage
//!
//! ```rust
//! use interchange_processor::app::services::wagon_classifier::WagonClassifier;
//!
//! let classifier =
//!     WagonClassifier::with_defaults(std::path::Path::new("wagon_classifications.csv"));
//!
//! assert_eq!(classifier.classify("BCN"), "JUMBO");
//! assert_eq!(classifier.classify("UNKNOWN"), "UNKNOWN");
//! ```

pub mod classifier;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use classifier::WagonClassifier;
