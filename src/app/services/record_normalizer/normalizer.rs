//! Row-by-row normalization into weighing events
//!
//! Each raw row is cleaned, its fields resolved through the synonym tables,
//! and either emitted as a [`WeighingEvent`] or dropped with its fate
//! counted in [`NormalizationStats`]. Optional fields degrade to defaults;
//! only an unparseable date or a non-numeric weight disqualifies a row.

use indicatif::ProgressBar;
use tracing::{debug, info};

use crate::app::models::{RawRow, Sex, WeighingEvent};
use crate::constants::{MISSING_TEXT, UNKNOWN_ANIMAL_ID, fields};

use super::date_parser::DateParser;
use super::field_resolver::{clean_row_keys, resolve, resolve_number, resolve_text};
use super::stats::NormalizationStats;

/// Normalizer for raw weighing-sheet rows
#[derive(Debug, Default)]
pub struct RecordNormalizer {
    date_parser: DateParser,
}

impl RecordNormalizer {
    /// Create a normalizer with freshly compiled date patterns
    pub fn new() -> Self {
        Self {
            date_parser: DateParser::new(),
        }
    }

    /// Normalize a batch of raw rows into weighing events
    ///
    /// Invalid rows are dropped silently; the returned statistics record
    /// how many rows fell to each condition.
    pub fn normalize(
        &self,
        rows: Vec<RawRow>,
        progress: Option<&ProgressBar>,
    ) -> (Vec<WeighingEvent>, NormalizationStats) {
        let mut stats = NormalizationStats::new();
        stats.total_rows = rows.len();

        let mut events = Vec::with_capacity(rows.len());
        for (index, row) in rows.into_iter().enumerate() {
            if let Some(event) = self.normalize_row(index, row, &mut stats) {
                events.push(event);
            }
            if let Some(pb) = progress {
                pb.inc(1);
            }
        }

        stats.events = events.len();
        info!("{}", stats.summary());

        (events, stats)
    }

    /// Normalize a single row, or record why it was dropped
    fn normalize_row(
        &self,
        index: usize,
        row: RawRow,
        stats: &mut NormalizationStats,
    ) -> Option<WeighingEvent> {
        let row = clean_row_keys(row);

        let animal_id = match resolve_text(&row, fields::ANIMAL_ID) {
            Some(id) => id,
            None => {
                stats.missing_animal_id += 1;
                UNKNOWN_ANIMAL_ID.to_string()
            }
        };

        let date = match resolve(&row, fields::DATE).and_then(|v| self.date_parser.parse(v)) {
            Some(date) => date,
            None => {
                stats.unparseable_date += 1;
                debug!("Row {} dropped: no parseable date", index);
                return None;
            }
        };

        let weight_kg = match resolve_number(&row, fields::WEIGHT) {
            Some(weight) => weight,
            None => {
                stats.invalid_weight += 1;
                debug!("Row {} dropped: weight is absent or non-numeric", index);
                return None;
            }
        };

        let location =
            resolve_text(&row, fields::LOCATION).unwrap_or_else(|| MISSING_TEXT.to_string());

        let sex = resolve_text(&row, fields::SEX)
            .map(|code| Sex::parse(&code))
            .unwrap_or(Sex::Unknown);

        // Fractional ages truncate; absent or non-numeric ages coerce to 0
        let age_months = resolve_number(&row, fields::AGE_MONTHS)
            .map(|age| if age > 0.0 { age as u32 } else { 0 })
            .unwrap_or(0);

        Some(WeighingEvent {
            animal_id,
            date,
            weight_kg,
            location,
            sex,
            age_months,
        })
    }
}
