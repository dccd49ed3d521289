//! Normalization statistics for the row-cleaning stage
//!
//! Dropped rows are an expected data-quality condition, so instead of
//! raising errors the normalizer counts what happened to every input row
//! and reports it here.

use serde::Serialize;

/// Counters for one normalization run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizationStats {
    /// Total number of input rows
    pub total_rows: usize,
    /// Rows dropped because no date strategy matched
    pub unparseable_date: usize,
    /// Rows dropped because the weight cell was absent or non-numeric
    pub invalid_weight: usize,
    /// Rows that had no animal identifier and were assigned the fallback id
    pub missing_animal_id: usize,
    /// Valid weighing events emitted
    pub events: usize,
}

impl NormalizationStats {
    /// Create new empty normalization statistics
    pub fn new() -> Self {
        Self {
            total_rows: 0,
            unparseable_date: 0,
            invalid_weight: 0,
            missing_animal_id: 0,
            events: 0,
        }
    }

    /// Number of rows dropped for any reason
    pub fn dropped(&self) -> usize {
        self.unparseable_date + self.invalid_weight
    }

    /// Fraction of input rows that became events, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            100.0
        } else {
            (self.events as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Normalization: {} rows -> {} events ({:.1}% usable) | \
             bad dates: {} | bad weights: {} | missing ids: {}",
            self.total_rows,
            self.events,
            self.success_rate(),
            self.unparseable_date,
            self.invalid_weight,
            self.missing_animal_id
        )
    }
}

impl Default for NormalizationStats {
    fn default() -> Self {
        Self::new()
    }
}
