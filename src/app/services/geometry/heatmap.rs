//! Heat-map geometry derivation
//!
//! Builds a sparse grid of mean daily gain keyed by `(location, age
//! bracket)`. A cell exists only where at least one animal contributes;
//! absent cells must not be rendered as zero. Cell colors interpolate
//! linearly between two configured endpoints over the present cells' value
//! range.

use serde::Serialize;

use crate::app::models::AnimalSummary;
use crate::config::{ChartLayout, Rgb};
use crate::constants::{AgeBracket, chart};

/// One present cell of the sparse grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    /// Row key: age bracket machine value ("0-8", "9-12", ...)
    pub row_category: String,
    /// Column key: location name
    pub column_category: String,
    /// Mean daily gain of the contributing animals (kg/day)
    pub value: f64,
}

/// A positioned, colored cell rectangle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCellRect {
    /// The underlying sparse cell
    pub cell: HeatmapCell,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Position of the cell value in the color range, `0..=1`
    pub ratio: f64,
    /// Interpolated fill color (hex)
    pub color: String,
}

/// One swatch of the color legend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendSwatch {
    pub ratio: f64,
    pub value: f64,
    pub color: String,
}

/// A complete heat-map figure ready for a rendering surface
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapFigure {
    /// Outer dimensions and margins
    pub layout: ChartLayout,
    /// Column categories (locations) in first-appearance order
    pub column_categories: Vec<String>,
    /// Row categories (bracket values) in bracket-table order
    pub row_categories: Vec<String>,
    /// Smallest present cell value
    pub min_value: f64,
    /// Largest present cell value
    pub max_value: f64,
    /// Positioned cells (sparse: only present cells appear)
    pub cells: Vec<HeatmapCellRect>,
    /// Color legend swatches at fixed range fractions
    pub legend: Vec<LegendSwatch>,
}

/// Build the sparse cell set for a filtered cohort
///
/// Rows come from the *bounded* brackets only — the open-ended top bracket
/// is deliberately left off the grid. Columns are the locations present in
/// the cohort, in first-appearance order.
pub fn build_heatmap_cells(
    filtered: &[AnimalSummary],
    brackets: &[AgeBracket],
) -> Vec<HeatmapCell> {
    let mut locations: Vec<&str> = Vec::new();
    for summary in filtered {
        if !locations.contains(&summary.location.as_str()) {
            locations.push(summary.location.as_str());
        }
    }

    let mut cells = Vec::new();
    for location in locations {
        for bracket in brackets.iter().filter(|b| b.is_bounded()) {
            let gains: Vec<f64> = filtered
                .iter()
                .filter(|summary| {
                    summary.location == location && bracket.contains(summary.age_months)
                })
                .map(|summary| summary.avg_daily_gain_kg)
                .collect();

            if !gains.is_empty() {
                cells.push(HeatmapCell {
                    row_category: bracket.value.to_string(),
                    column_category: location.to_string(),
                    value: gains.iter().sum::<f64>() / gains.len() as f64,
                });
            }
        }
    }

    cells
}

/// Build the positioned heat-map figure from a sparse cell set
///
/// Returns `None` when no cell is present — the "no data" state. A
/// single-valued cell set (zero color span) pins every ratio to 0.5 so the
/// figure stays finite.
pub fn build_heatmap(
    cells: Vec<HeatmapCell>,
    layout: &ChartLayout,
    low: Rgb,
    high: Rgb,
) -> Option<HeatmapFigure> {
    if cells.is_empty() {
        return None;
    }

    let mut column_categories: Vec<String> = Vec::new();
    let mut row_categories: Vec<String> = Vec::new();
    for cell in &cells {
        if !column_categories.contains(&cell.column_category) {
            column_categories.push(cell.column_category.clone());
        }
        if !row_categories.contains(&cell.row_category) {
            row_categories.push(cell.row_category.clone());
        }
    }

    let min_value = cells.iter().map(|c| c.value).reduce(f64::min)?;
    let max_value = cells.iter().map(|c| c.value).reduce(f64::max)?;
    let span = max_value - min_value;

    let cell_width = layout.inner_width() / column_categories.len() as f64;
    let cell_height = layout.inner_height() / row_categories.len() as f64;

    let rects = cells
        .into_iter()
        .map(|cell| {
            let column = column_categories
                .iter()
                .position(|c| *c == cell.column_category)
                .unwrap_or(0);
            let row = row_categories
                .iter()
                .position(|r| *r == cell.row_category)
                .unwrap_or(0);
            let ratio = if span == 0.0 {
                0.5
            } else {
                (cell.value - min_value) / span
            };

            HeatmapCellRect {
                x: column as f64 * cell_width,
                y: row as f64 * cell_height,
                width: cell_width,
                height: cell_height,
                ratio,
                color: lerp_color(low, high, ratio).to_hex(),
                cell,
            }
        })
        .collect();

    let legend = chart::TICK_RATIOS
        .iter()
        .map(|&ratio| LegendSwatch {
            ratio,
            value: min_value + span * ratio,
            color: lerp_color(low, high, ratio).to_hex(),
        })
        .collect();

    Some(HeatmapFigure {
        layout: *layout,
        column_categories,
        row_categories,
        min_value,
        max_value,
        cells: rects,
        legend,
    })
}

/// Linear interpolation between two colors, channel by channel
fn lerp_color(low: Rgb, high: Rgb, ratio: f64) -> Rgb {
    let t = ratio.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    Rgb::new(
        channel(low.r, high.r),
        channel(low.g, high.g),
        channel(low.b, high.b),
    )
}
