//! Canonical field resolution over cleaned rows
//!
//! Weighing sheets spell their columns many ways (`Animal`, `ANIMAL `,
//! `sexo`, `SX`, ...). Rather than probing rows ad hoc, each logical field
//! has a static synonym list in [`crate::constants::fields`] and every
//! lookup goes through the single resolver here.

use crate::app::models::{RawRow, RawValue};

/// Clean a raw row's keys: trim surrounding whitespace and upper-case
///
/// All synonym tables are written in upper case, so resolution after this
/// step is effectively case-insensitive. When two raw keys collapse to the
/// same cleaned key, one of the values wins.
pub fn clean_row_keys(row: RawRow) -> RawRow {
    row.into_iter()
        .map(|(key, value)| (key.trim().to_uppercase(), value))
        .collect()
}

/// Return the first non-empty value among the synonyms of a logical field
///
/// Returns `None` when no synonym is present or every present cell is
/// empty. Callers must treat absence as a per-field condition, not a row
/// failure.
pub fn resolve<'a>(row: &'a RawRow, synonyms: &[&str]) -> Option<&'a RawValue> {
    synonyms
        .iter()
        .find_map(|key| row.get(*key).filter(|value| !value.is_empty()))
}

/// Resolve a logical field to trimmed display text
pub fn resolve_text(row: &RawRow, synonyms: &[&str]) -> Option<String> {
    resolve(row, synonyms).map(RawValue::display)
}

/// Resolve a logical field to a finite number
pub fn resolve_number(row: &RawRow, synonyms: &[&str]) -> Option<f64> {
    resolve(row, synonyms).and_then(RawValue::as_number)
}
