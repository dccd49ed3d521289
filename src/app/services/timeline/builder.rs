//! Per-animal timeline construction and daily-gain derivation
//!
//! For an animal with *n* sorted events there are *n−1* candidate
//! intervals. Intervals with non-positive elapsed days (same-day or
//! duplicated weighings) are skipped as a data-quality condition; an animal
//! whose intervals are all skipped yields no summary. Each animal's group
//! is independent, so this stage could be parallelized per animal without
//! shared-write hazards.

use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

use crate::app::models::{AnimalSummary, WeighingEvent};
use crate::constants::{GAIN_DECIMALS, round_to};

/// Counters for one timeline-building run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineStats {
    /// Distinct animal identifiers seen in the event stream
    pub animals_seen: usize,
    /// Animals excluded with fewer than two valid events
    pub insufficient_history: usize,
    /// Animals excluded because no interval had positive elapsed days
    pub no_positive_interval: usize,
    /// Animal summaries produced
    pub summarised: usize,
}

impl TimelineStats {
    /// Create new empty timeline statistics
    pub fn new() -> Self {
        Self {
            animals_seen: 0,
            insufficient_history: 0,
            no_positive_interval: 0,
            summarised: 0,
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Timelines: {} animals -> {} summaries | \
             insufficient history: {} | no positive interval: {}",
            self.animals_seen, self.summarised, self.insufficient_history, self.no_positive_interval
        )
    }
}

impl Default for TimelineStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Build per-animal growth summaries from a stream of weighing events
///
/// Events are grouped by exact (already trimmed) animal id. Groups keep the
/// first-appearance order of their animal in the input; within a group the
/// sort by date is stable, so same-day events keep their original row
/// order.
pub fn build_timelines(events: &[WeighingEvent]) -> (Vec<AnimalSummary>, TimelineStats) {
    let mut stats = TimelineStats::new();

    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&WeighingEvent>> = HashMap::new();
    for event in events {
        let group = groups.entry(event.animal_id.as_str()).or_default();
        if group.is_empty() {
            order.push(event.animal_id.as_str());
        }
        group.push(event);
    }

    stats.animals_seen = order.len();

    let mut summaries = Vec::with_capacity(order.len());
    for animal_id in order {
        let mut records = match groups.remove(animal_id) {
            Some(records) => records,
            None => continue,
        };

        if records.len() < 2 {
            stats.insufficient_history += 1;
            continue;
        }

        records.sort_by_key(|event| event.date);

        let gains = interval_gains(&records);
        if gains.is_empty() {
            stats.no_positive_interval += 1;
            debug!(
                "Animal '{}' excluded: {} weighings but no interval with positive elapsed days",
                animal_id,
                records.len()
            );
            continue;
        }

        let first = records[0];
        let last = records[records.len() - 1];
        let mean_gain = gains.iter().sum::<f64>() / gains.len() as f64;

        summaries.push(AnimalSummary {
            animal_id: animal_id.to_string(),
            location: last.location.clone(),
            sex: last.sex,
            age_months: last.age_months,
            avg_daily_gain_kg: round_to(mean_gain, GAIN_DECIMALS),
            weighing_count: records.len(),
            initial_weight_kg: first.weight_kg,
            final_weight_kg: last.weight_kg,
            total_gain_kg: last.weight_kg - first.weight_kg,
            period_days: (last.date - first.date).num_days(),
        });
    }

    stats.summarised = summaries.len();
    info!("{}", stats.summary());

    (summaries, stats)
}

/// Daily gains over intervals with positive elapsed days
fn interval_gains(sorted: &[&WeighingEvent]) -> Vec<f64> {
    sorted
        .windows(2)
        .filter_map(|pair| {
            let days = (pair[1].date - pair[0].date).num_days();
            if days > 0 {
                Some((pair[1].weight_kg - pair[0].weight_kg) / days as f64)
            } else {
                None
            }
        })
        .collect()
}

// =============================================================================
// Per-animal weighing history
// =============================================================================

/// One weighing in an animal's chronological history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryPoint {
    /// Date of the weighing (ISO format via serde)
    pub date: chrono::NaiveDate,
    /// Measured weight (kg)
    pub weight_kg: f64,
    /// Gain since the previous weighing (0 for the first)
    pub period_gain_kg: f64,
    /// Gain since the first weighing (0 for the first)
    pub cumulative_gain_kg: f64,
    /// Days elapsed since the first weighing
    pub days_since_start: i64,
}

/// Chronological weighing history for one animal
///
/// Uses the same validated events as the summaries, so an animal that was
/// excluded from summarisation can still show its (thin) history.
pub fn animal_history(events: &[WeighingEvent], animal_id: &str) -> Vec<HistoryPoint> {
    let mut records: Vec<&WeighingEvent> = events
        .iter()
        .filter(|event| event.animal_id == animal_id)
        .collect();
    records.sort_by_key(|event| event.date);

    let mut history = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let first = records[0];
        let previous = if index > 0 { records[index - 1] } else { record };
        history.push(HistoryPoint {
            date: record.date,
            weight_kg: record.weight_kg,
            period_gain_kg: record.weight_kg - previous.weight_kg,
            cumulative_gain_kg: record.weight_kg - first.weight_kg,
            days_since_start: (record.date - first.date).num_days(),
        });
    }

    history
}
