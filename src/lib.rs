//! Interchange Processor Library
//!
//! A Rust library for turning railway wagon-interchange CSV extracts into
//! zonal handed-over/taken-over interchange reports.
//!
//! This library provides tools for:
//! - Parsing raw interchange extracts with preamble skipping and header validation
//! - Classifying wagon types through a persistent lookup table
//! - Normalizing ambiguous station codes (CNA, SAU) according to zone rules
//! - Ordering records by zonal presentation rules and removing cross-referenced duplicates
//! - Aggregating per-station summary and detail figures for both report sections
//! - Rendering the two-section report grid and the intermediate artifact

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod extract_parser;
        pub mod record_pipeline;
        pub mod report_writer;
        pub mod wagon_classifier;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{InterchangeRecord, Leg, Role};
pub use config::Config;

/// Result type alias for the interchange processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for interchange processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Extract format error
    #[error("Extract format error in file '{file}': {message}")]
    ExtractFormat { file: String, message: String },

    /// Required extract columns are absent
    #[error("Missing required columns in file '{file}': {}", .columns.join(", "))]
    MissingColumns { file: String, columns: Vec<String> },

    /// Report writing error
    #[error("Report writing error: {message}")]
    ReportWriting {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Wagon classification store error
    #[error("Classification store error: {message}")]
    ClassificationStore { message: String },

    /// PH station store error
    #[error("PH station store error: {message}")]
    PhStationStore { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Date parsing error
    #[error("Date parsing error: {message}")]
    DateParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an extract format error
    pub fn extract_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExtractFormat {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a missing columns error
    pub fn missing_columns(file: impl Into<String>, columns: Vec<String>) -> Self {
        Self::MissingColumns {
            file: file.into(),
            columns,
        }
    }

    /// Create a report writing error
    pub fn report_writing(
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::ReportWriting {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a classification store error
    pub fn classification_store(message: impl Into<String>) -> Self {
        Self::ClassificationStore {
            message: message.into(),
        }
    }

    /// Create a PH station store error
    pub fn ph_station_store(message: impl Into<String>) -> Self {
        Self::PhStationStore {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a date parsing error
    pub fn date_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateParsing {
            message: "Date parsing failed".to_string(),
            source: error,
        }
    }
}
