//! Comparative statistics across categorical partitions
//!
//! Partitions a filtered cohort by sex or age bracket and computes the
//! per-partition daily-gain figures. Partitions with zero members are
//! omitted from the output, never emitted as zero-filled rows.

use serde::Serialize;

use crate::app::models::{AnimalSummary, Sex};
use crate::constants::{AgeBracket, GAIN_DECIMALS, round_to};

use super::statistics::{mean_of, population_std_dev};

/// Statistics for one categorical partition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparativeGroup {
    /// Partition key ("Males", "Females" or a bracket label)
    pub key: String,
    /// Member count
    pub count: usize,
    /// Mean daily gain (kg/day)
    pub mean: f64,
    /// Population standard deviation (kg/day)
    pub std_dev: f64,
    /// Smallest member daily gain (omitted for bracket partitions)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Largest member daily gain (omitted for bracket partitions)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// Partition a filtered cohort by sex
///
/// Only the recorded sexes `M` and `F` form partitions; unknown-sex animals
/// do not appear here.
pub fn compare_by_sex(filtered: &[AnimalSummary]) -> Vec<ComparativeGroup> {
    [(Sex::Male, "Males"), (Sex::Female, "Females")]
        .iter()
        .filter_map(|(sex, label)| {
            let gains: Vec<f64> = filtered
                .iter()
                .filter(|summary| summary.sex == *sex)
                .map(|summary| summary.avg_daily_gain_kg)
                .collect();
            group_from_gains(label, &gains, true)
        })
        .collect()
}

/// Partition a filtered cohort by age bracket
pub fn compare_by_age_bracket(
    filtered: &[AnimalSummary],
    brackets: &[AgeBracket],
) -> Vec<ComparativeGroup> {
    brackets
        .iter()
        .filter_map(|bracket| {
            let gains: Vec<f64> = filtered
                .iter()
                .filter(|summary| bracket.contains(summary.age_months))
                .map(|summary| summary.avg_daily_gain_kg)
                .collect();
            group_from_gains(bracket.label, &gains, false)
        })
        .collect()
}

/// Build one group, or `None` when the partition is empty
fn group_from_gains(key: &str, gains: &[f64], with_extremes: bool) -> Option<ComparativeGroup> {
    if gains.is_empty() {
        return None;
    }

    let mean = mean_of(gains);
    let std_dev = population_std_dev(gains, mean);
    let (min, max) = if with_extremes {
        (
            gains.iter().copied().reduce(f64::min),
            gains.iter().copied().reduce(f64::max),
        )
    } else {
        (None, None)
    };

    Some(ComparativeGroup {
        key: key.to_string(),
        count: gains.len(),
        mean: round_to(mean, GAIN_DECIMALS),
        std_dev: round_to(std_dev, GAIN_DECIMALS),
        min,
        max,
    })
}
