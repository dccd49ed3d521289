//! Record normalization for raw weighing-sheet rows
//!
//! This module turns loosely-typed rows, as decoded from a spreadsheet or
//! delimited file, into validated [`WeighingEvent`](crate::WeighingEvent)s.
//! It owns the messy edge of the pipeline: header cleaning, column-name
//! synonym resolution and multi-format date disambiguation.
//!
//! # Architecture
//!
//! - [`field_resolver`] - canonical field lookup across known column
//!   spellings
//! - [`date_parser`] - ordered date-parsing strategies (spreadsheet serials,
//!   delimited patterns, guarded generic fallback)
//! - [`normalizer`] - row-by-row validation and event construction
//! - [`stats`] - normalization counters and summary reporting
//!
//! # Data-quality philosophy
//!
//! Rows with an unparseable date or a non-numeric weight are an expected,
//! routine condition in field-collected weighing sheets. They are dropped
//! silently: counted in [`NormalizationStats`] and logged at debug level,
//! never surfaced as errors.

pub mod date_parser;
pub mod field_resolver;
pub mod normalizer;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use date_parser::DateParser;
pub use normalizer::RecordNormalizer;
pub use stats::NormalizationStats;

// Re-export utility functions that might be useful externally
pub use field_resolver::{clean_row_keys, resolve, resolve_number, resolve_text};
