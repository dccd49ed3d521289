//! Herd Analyzer Library
//!
//! A Rust library for turning irregular, multi-format livestock weighing
//! spreadsheets into per-animal growth metrics, cohort statistics and
//! chart-ready derived datasets.
//!
//! This library provides tools for:
//! - Decoding loosely-typed CSV weighing sheets into raw key/value rows
//! - Normalizing raw rows (header cleaning, synonym resolution, multi-format
//!   date parsing) into validated weighing events
//! - Reconstructing per-animal timelines and sequential daily-gain figures
//! - Filtering cohorts by location, age bracket, sex and exact age month
//! - Computing descriptive statistics, quartiles, outliers and tiers
//! - Deriving box-plot and heat-map geometry for a rendering layer
//! - Exporting flat per-animal records for tabular consumers

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod analytics;
        pub mod analyzer;
        pub mod exporter;
        pub mod geometry;
        pub mod ingest;
        pub mod record_normalizer;
        pub mod timeline;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AnimalSummary, RawRow, RawValue, Sex, WeighingEvent};
pub use config::AnalysisConfig;

/// Result type alias for the herd analyzer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for weighing-sheet processing operations
///
/// Only decode-level failures are fatal: a file that cannot be read or
/// parsed leaves nothing to process. Row-level data problems (bad dates,
/// non-numeric weights, thin histories) are routine and are counted by the
/// pipeline stages instead of surfacing here.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV decoding error (malformed source bytes)
    #[error("CSV decoding error in '{file}': {message}")]
    CsvDecoding {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Configuration error (bad CLI arguments, unknown filter values)
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Report serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV decoding error with context
    pub fn csv_decoding(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvDecoding {
            file: file.into(),
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

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a report serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
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
        Self::CsvDecoding {
            file: "unknown".to_string(),
            message: "CSV decoding failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "Report serialization failed".to_string(),
            source: error,
        }
    }
}
