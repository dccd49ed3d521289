//! Data models for weighing record analysis
//!
//! This module contains the core data structures flowing through the
//! pipeline: loosely-typed raw rows as decoded from a spreadsheet, the
//! validated weighing events produced by normalization, and the per-animal
//! growth summary derived from each reconstructed timeline.

use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Raw input rows
// =============================================================================

/// A single loosely-typed cell value as decoded from a tabular source
///
/// Weighing sheets arrive with no schema: the same column may hold text in
/// one file and numbers in the next. The decoder sniffs each cell into one
/// of these three shapes and all further interpretation happens during
/// normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Free text (may still encode a number or a date)
    Text(String),
    /// A value that parsed cleanly as a number
    Number(f64),
    /// An empty cell
    Empty,
}

impl RawValue {
    /// True if the cell carries no usable content
    pub fn is_empty(&self) -> bool {
        match self {
            RawValue::Empty => true,
            RawValue::Text(s) => s.trim().is_empty(),
            RawValue::Number(_) => false,
        }
    }

    /// Interpret the cell as a finite number, if possible
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            RawValue::Number(n) => Some(*n),
            RawValue::Text(s) => s.trim().parse::<f64>().ok(),
            RawValue::Empty => None,
        };
        value.filter(|v| v.is_finite())
    }

    /// Render the cell as trimmed display text
    ///
    /// Whole numbers print without a fractional part so that numeric animal
    /// identifiers round-trip as "123" rather than "123.0".
    pub fn display(&self) -> String {
        match self {
            RawValue::Text(s) => s.trim().to_string(),
            RawValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                format!("{}", *n as i64)
            }
            RawValue::Number(n) => format!("{}", n),
            RawValue::Empty => String::new(),
        }
    }
}

/// One decoded spreadsheet row: arbitrary string keys to scalar cells
///
/// Keys are kept exactly as found in the file; trimming and upper-casing is
/// the normalizer's first step.
pub type RawRow = HashMap<String, RawValue>;

// =============================================================================
// Weighing events
// =============================================================================

/// Animal sex as recorded on a weighing row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
    Unknown,
}

impl Sex {
    /// Parse a raw sex cell: trimmed, case-insensitive `M`/`F`
    ///
    /// Anything else (including the `N/A` placeholder) maps to `Unknown`.
    pub fn parse(code: &str) -> Self {
        match code.trim().to_uppercase().as_str() {
            "M" => Sex::Male,
            "F" => Sex::Female,
            _ => Sex::Unknown,
        }
    }

    /// Single-letter code used in filters and exports
    pub fn code(&self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
            Sex::Unknown => "N/A",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single validated weighing of one animal
///
/// Produced by the record normalizer; rows whose date cannot be parsed or
/// whose weight is not a finite number never become events. Immutable once
/// produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeighingEvent {
    /// Animal identifier, trimmed ("UNKNOWN" when the sheet has none)
    pub animal_id: String,
    /// Calendar date of the weighing
    pub date: NaiveDate,
    /// Measured weight in kilograms
    pub weight_kg: f64,
    /// Pasture/location name ("N/A" when absent)
    pub location: String,
    /// Recorded sex
    pub sex: Sex,
    /// Animal age in whole months at the time of the record (0 when absent
    /// or non-numeric)
    pub age_months: u32,
}

// =============================================================================
// Per-animal growth summary
// =============================================================================

/// The canonical derived growth record for one animal
///
/// One summary exists per animal with at least two chronologically distinct
/// valid weighings. Location, sex and age come from the most recent event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalSummary {
    /// Animal identifier
    pub animal_id: String,
    /// Location from the most recent weighing
    pub location: String,
    /// Sex from the most recent weighing
    pub sex: Sex,
    /// Age in months from the most recent weighing
    pub age_months: u32,
    /// Mean of per-interval daily gains, rounded to 4 decimals (kg/day)
    pub avg_daily_gain_kg: f64,
    /// Number of valid weighings in the timeline
    pub weighing_count: usize,
    /// Weight at the first retained weighing (kg)
    pub initial_weight_kg: f64,
    /// Weight at the last retained weighing (kg)
    pub final_weight_kg: f64,
    /// Final minus initial weight (kg)
    pub total_gain_kg: f64,
    /// Days spanned from first to last retained weighing
    pub period_days: i64,
}

impl AnimalSummary {
    /// Validate the structural invariants of a summary
    pub fn validate(&self) -> Result<()> {
        if self.weighing_count < 2 {
            return Err(Error::data_validation(format!(
                "Animal '{}' summary has {} weighings; at least 2 are required",
                self.animal_id, self.weighing_count
            )));
        }

        if self.period_days < 0 {
            return Err(Error::data_validation(format!(
                "Animal '{}' summary spans a negative period ({} days)",
                self.animal_id, self.period_days
            )));
        }

        if self.animal_id.trim().is_empty() {
            return Err(Error::data_validation(
                "Animal summary has an empty identifier".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_value_as_number() {
        assert_eq!(RawValue::Number(130.0).as_number(), Some(130.0));
        assert_eq!(RawValue::Text(" 130.5 ".to_string()).as_number(), Some(130.5));
        assert_eq!(RawValue::Text("heavy".to_string()).as_number(), None);
        assert_eq!(RawValue::Number(f64::NAN).as_number(), None);
        assert_eq!(RawValue::Empty.as_number(), None);
    }

    #[test]
    fn test_raw_value_display() {
        assert_eq!(RawValue::Number(123.0).display(), "123");
        assert_eq!(RawValue::Number(1.25).display(), "1.25");
        assert_eq!(RawValue::Text("  A17 ".to_string()).display(), "A17");
        assert_eq!(RawValue::Empty.display(), "");
    }

    #[test]
    fn test_sex_parse() {
        assert_eq!(Sex::parse("M"), Sex::Male);
        assert_eq!(Sex::parse(" f "), Sex::Female);
        assert_eq!(Sex::parse("N/A"), Sex::Unknown);
        assert_eq!(Sex::parse(""), Sex::Unknown);
    }

    #[test]
    fn test_animal_summary_validation() {
        let summary = AnimalSummary {
            animal_id: "A1".to_string(),
            location: "North".to_string(),
            sex: Sex::Male,
            age_months: 12,
            avg_daily_gain_kg: 1.0,
            weighing_count: 2,
            initial_weight_kg: 100.0,
            final_weight_kg: 130.0,
            total_gain_kg: 30.0,
            period_days: 30,
        };
        assert!(summary.validate().is_ok());

        let mut single = summary.clone();
        single.weighing_count = 1;
        assert!(single.validate().is_err());

        let mut negative = summary.clone();
        negative.period_days = -1;
        assert!(negative.validate().is_err());
    }
}
