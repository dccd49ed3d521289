//! Box-plot geometry derivation
//!
//! Computes per-group quartile statistics and maps them onto a shared
//! pixel scale. Whiskers here are clamped to the actual data extremes
//! (`max(data_min, q1 − 1.5·iqr)` / `min(data_max, q3 + 1.5·iqr)`) — this
//! intentionally differs from the unclamped Tukey fence used for outlier
//! *flagging* in the statistics engine, because a whisker must never be
//! drawn beyond a real observation.

use serde::Serialize;

use crate::app::models::{AnimalSummary, Sex};
use crate::app::services::analytics::statistics::{median_of, quartiles};
use crate::config::ChartLayout;
use crate::constants::chart;

use super::scale::LinearScale;

/// A named group of values to be drawn as one box
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxPlotGroup {
    /// Display name ("Males", "Females", ...)
    pub name: String,
    /// Raw daily-gain values of the group's members
    pub values: Vec<f64>,
    /// Box fill color (hex)
    pub color: String,
}

/// Quartile statistics and clamped whiskers for one group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxPlotStats {
    /// Group display name
    pub group_name: String,
    /// First quartile
    pub q1: f64,
    /// Median
    pub median: f64,
    /// Third quartile
    pub q3: f64,
    /// Lower whisker: larger of the data minimum and `q1 − 1.5·iqr`
    pub whisker_low: f64,
    /// Upper whisker: smaller of the data maximum and `q3 + 1.5·iqr`
    pub whisker_high: f64,
    /// Values falling outside the whisker span
    pub outlier_values: Vec<f64>,
}

/// An outlier marker in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutlierPoint {
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

/// One fully positioned box with whiskers and outlier markers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxPlotBox {
    /// Raw statistics behind the drawing
    pub stats: BoxPlotStats,
    /// Box fill color (hex)
    pub color: String,
    /// Horizontal center of the group slot
    pub x_center: f64,
    /// Left edge of the box
    pub box_left: f64,
    /// Right edge of the box
    pub box_right: f64,
    pub y_q1: f64,
    pub y_median: f64,
    pub y_q3: f64,
    pub y_whisker_low: f64,
    pub y_whisker_high: f64,
    /// Outlier markers, one per value outside the whisker span
    pub outliers: Vec<OutlierPoint>,
}

/// One labelled tick on the shared value axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisTick {
    pub value: f64,
    pub y: f64,
}

/// A complete box-plot figure ready for a rendering surface
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxPlotFigure {
    /// Outer dimensions and margins
    pub layout: ChartLayout,
    /// Positioned boxes, one per input group
    pub boxes: Vec<BoxPlotBox>,
    /// Value-axis ticks at fixed range fractions
    pub ticks: Vec<AxisTick>,
}

/// Group a filtered cohort's daily gains by sex for box plotting
///
/// Only the recorded sexes `M` and `F` produce groups, in that order;
/// a sex with no members is omitted.
pub fn sex_groups(filtered: &[AnimalSummary]) -> Vec<BoxPlotGroup> {
    [
        (Sex::Male, "Males", chart::MALE_BOX_COLOR),
        (Sex::Female, "Females", chart::FEMALE_BOX_COLOR),
    ]
    .iter()
    .filter_map(|(sex, name, color)| {
        let values: Vec<f64> = filtered
            .iter()
            .filter(|summary| summary.sex == *sex)
            .map(|summary| summary.avg_daily_gain_kg)
            .collect();
        if values.is_empty() {
            None
        } else {
            Some(BoxPlotGroup {
                name: name.to_string(),
                values,
                color: color.to_string(),
            })
        }
    })
    .collect()
}

/// Compute quartiles, clamped whiskers and outliers for one group
///
/// Returns `None` for an empty group. Values are sorted internally, so the
/// result is invariant to input ordering.
pub fn compute_group_stats(name: &str, values: &[f64]) -> Option<BoxPlotStats> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let (q1, q3) = quartiles(&sorted);
    let median = median_of(&sorted);
    let iqr = q3 - q1;

    let whisker_low = sorted[0].max(q1 - 1.5 * iqr);
    let whisker_high = sorted[sorted.len() - 1].min(q3 + 1.5 * iqr);

    let outlier_values: Vec<f64> = sorted
        .iter()
        .copied()
        .filter(|value| *value < whisker_low || *value > whisker_high)
        .collect();

    Some(BoxPlotStats {
        group_name: name.to_string(),
        q1,
        median,
        q3,
        whisker_low,
        whisker_high,
        outlier_values,
    })
}

/// Build the positioned box-plot figure for a set of groups
///
/// All groups share one value scale derived from the global min/max across
/// every group, padded 10% on each side. Each group occupies an evenly
/// spaced horizontal slot. Returns `None` when no group has values — the
/// "no data" state.
pub fn build_box_plot(groups: &[BoxPlotGroup], layout: &ChartLayout) -> Option<BoxPlotFigure> {
    let groups: Vec<&BoxPlotGroup> = groups.iter().filter(|g| !g.values.is_empty()).collect();
    if groups.is_empty() {
        return None;
    }

    let all_values: Vec<f64> = groups.iter().flat_map(|g| g.values.iter().copied()).collect();
    let data_min = all_values.iter().copied().reduce(f64::min)?;
    let data_max = all_values.iter().copied().reduce(f64::max)?;

    let scale = LinearScale::padded(
        data_min,
        data_max,
        layout.inner_height(),
        chart::SCALE_PADDING,
    );

    let slot_width = layout.inner_width() / groups.len() as f64;
    let box_width = chart::BOX_MAX_WIDTH_PX.min(slot_width * chart::BOX_SLOT_FRACTION);

    let mut boxes = Vec::with_capacity(groups.len());
    for (index, group) in groups.iter().enumerate() {
        let stats = match compute_group_stats(&group.name, &group.values) {
            Some(stats) => stats,
            None => continue,
        };

        let x_center = (index as f64 + 0.5) * slot_width;
        let outliers = stats
            .outlier_values
            .iter()
            .map(|&value| OutlierPoint {
                value,
                x: x_center,
                y: scale.to_pixel(value),
            })
            .collect();

        boxes.push(BoxPlotBox {
            color: group.color.clone(),
            x_center,
            box_left: x_center - box_width / 2.0,
            box_right: x_center + box_width / 2.0,
            y_q1: scale.to_pixel(stats.q1),
            y_median: scale.to_pixel(stats.median),
            y_q3: scale.to_pixel(stats.q3),
            y_whisker_low: scale.to_pixel(stats.whisker_low),
            y_whisker_high: scale.to_pixel(stats.whisker_high),
            outliers,
            stats,
        });
    }

    let ticks = chart::TICK_RATIOS
        .iter()
        .map(|&ratio| {
            let value = scale.value_at(ratio);
            AxisTick {
                value,
                y: scale.to_pixel(value),
            }
        })
        .collect();

    Some(BoxPlotFigure {
        layout: *layout,
        boxes,
        ticks,
    })
}
