//! Descriptive statistics over a filtered cohort
//!
//! All figures derive from the daily-gain values of the current filtered
//! set and are recomputed whenever the filter changes. An empty filtered
//! set yields `None` — the explicit "no data" state — rather than
//! NaN-laden degenerate statistics.
//!
//! Quartiles use the simple index method `sorted[floor(n * q)]`, not an
//! interpolated quantile; downstream consumers depend on reproducing these
//! exact values. The standard deviation is the population form (divide by
//! n).

use serde::Serialize;

use crate::app::models::AnimalSummary;
use crate::constants::{CV_DECIMALS, DistributionBand, GAIN_DECIMALS, round_to};

/// One counted band of the daily-gain distribution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionBucket {
    /// Display label
    pub label: String,
    /// Lower bound, inclusive
    pub lower_bound: f64,
    /// Upper bound, exclusive
    pub upper_bound: f64,
    /// Display color (hex)
    pub color: String,
    /// Number of animals whose daily gain falls in the band
    pub count: usize,
}

/// Descriptive statistics for a non-empty filtered cohort
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticalSummary {
    /// Arithmetic mean of daily gains (kg/day)
    pub mean: f64,
    /// Median daily gain (kg/day)
    pub median: f64,
    /// Population standard deviation (kg/day)
    pub std_dev: f64,
    /// Coefficient of variation, percent
    pub coefficient_of_variation: f64,
    /// First quartile, `sorted[floor(n * 0.25)]`
    pub q1: f64,
    /// Third quartile, `sorted[floor(n * 0.75)]`
    pub q3: f64,
    /// Interquartile range
    pub iqr: f64,
    /// Smallest daily gain in the set
    pub min: f64,
    /// Largest daily gain in the set
    pub max: f64,
    /// Animals outside the Tukey fence `q1/q3 ± 1.5·iqr`
    pub outliers: Vec<AnimalSummary>,
    /// Five-band daily-gain distribution
    pub distribution: Vec<DistributionBucket>,
}

/// Compute descriptive statistics over a filtered cohort
///
/// Returns `None` on an empty set; callers surface that as "no data".
pub fn compute_statistics(
    filtered: &[AnimalSummary],
    bands: &[DistributionBand],
) -> Option<StatisticalSummary> {
    if filtered.is_empty() {
        return None;
    }

    let gains = sorted_gains(filtered);
    let n = gains.len();

    let mean = mean_of(&gains);
    let median = median_of(&gains);
    let std_dev = population_std_dev(&gains, mean);
    let coefficient_of_variation = (std_dev / mean) * 100.0;

    let (q1, q3) = quartiles(&gains);
    let iqr = q3 - q1;

    // Outlier fences use the raw (unrounded) quartiles
    let lower_fence = q1 - 1.5 * iqr;
    let upper_fence = q3 + 1.5 * iqr;
    let outliers: Vec<AnimalSummary> = filtered
        .iter()
        .filter(|summary| {
            summary.avg_daily_gain_kg < lower_fence || summary.avg_daily_gain_kg > upper_fence
        })
        .cloned()
        .collect();

    let distribution = bands
        .iter()
        .map(|band| DistributionBucket {
            label: band.label.to_string(),
            lower_bound: band.lower,
            upper_bound: band.upper,
            color: band.color.to_string(),
            count: filtered
                .iter()
                .filter(|summary| band.contains(summary.avg_daily_gain_kg))
                .count(),
        })
        .collect();

    Some(StatisticalSummary {
        mean: round_to(mean, GAIN_DECIMALS),
        median: round_to(median, GAIN_DECIMALS),
        std_dev: round_to(std_dev, GAIN_DECIMALS),
        coefficient_of_variation: round_to(coefficient_of_variation, CV_DECIMALS),
        q1: round_to(q1, GAIN_DECIMALS),
        q3: round_to(q3, GAIN_DECIMALS),
        iqr: round_to(iqr, GAIN_DECIMALS),
        min: gains[0],
        max: gains[n - 1],
        outliers,
        distribution,
    })
}

// =============================================================================
// Performance tiers
// =============================================================================

/// Count and share of one performance tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierCount {
    pub count: usize,
    /// Share of the filtered set, percent (1 decimal)
    pub percent: f64,
}

/// The four-tier performance partition of a filtered cohort
///
/// Tiers are assigned by a mutually exclusive ladder so every animal lands
/// in exactly one tier, even in skewed sets where the mean exceeds q3.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformanceTiers {
    /// Daily gain above q3
    pub excellent: TierCount,
    /// Daily gain from the mean up to and including q3
    pub good: TierCount,
    /// Daily gain from q1 up to (but excluding) the mean
    pub regular: TierCount,
    /// Daily gain below q1
    pub poor: TierCount,
}

/// Classify a filtered cohort into performance tiers
pub fn performance_tiers(
    filtered: &[AnimalSummary],
    stats: &StatisticalSummary,
) -> PerformanceTiers {
    let mut excellent = 0usize;
    let mut good = 0usize;
    let mut regular = 0usize;
    let mut poor = 0usize;

    for summary in filtered {
        let gain = summary.avg_daily_gain_kg;
        if gain > stats.q3 {
            excellent += 1;
        } else if gain >= stats.mean {
            good += 1;
        } else if gain >= stats.q1 {
            regular += 1;
        } else {
            poor += 1;
        }
    }

    let total = filtered.len();
    PerformanceTiers {
        excellent: tier_count(excellent, total),
        good: tier_count(good, total),
        regular: tier_count(regular, total),
        poor: tier_count(poor, total),
    }
}

fn tier_count(count: usize, total: usize) -> TierCount {
    let percent = if total == 0 {
        0.0
    } else {
        round_to(count as f64 / total as f64 * 100.0, 1)
    };
    TierCount { count, percent }
}

// =============================================================================
// Shared numeric helpers
// =============================================================================

/// Daily-gain values of a cohort, sorted ascending
pub(crate) fn sorted_gains(filtered: &[AnimalSummary]) -> Vec<f64> {
    let mut gains: Vec<f64> = filtered
        .iter()
        .map(|summary| summary.avg_daily_gain_kg)
        .collect();
    gains.sort_by(f64::total_cmp);
    gains
}

/// Arithmetic mean of a non-empty slice
pub(crate) fn mean_of(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median of a non-empty sorted slice (average of the two central values
/// for even counts)
pub(crate) fn median_of(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Population standard deviation (divide by n, not n−1)
pub(crate) fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// First and third quartiles of a non-empty sorted slice, by the simple
/// index method
pub(crate) fn quartiles(sorted: &[f64]) -> (f64, f64) {
    let n = sorted.len() as f64;
    let q1 = sorted[(n * 0.25).floor() as usize];
    let q3 = sorted[(n * 0.75).floor() as usize];
    (q1, q3)
}
