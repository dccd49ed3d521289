//! Tests for heat-map cells, colors and positioning

use crate::app::models::{AnimalSummary, Sex};
use crate::app::services::geometry::{build_heatmap, build_heatmap_cells};
use crate::config::{Rgb, default_heatmap_layout};
use crate::constants::AGE_BRACKETS;

fn summary(animal_id: &str, location: &str, age_months: u32, gain: f64) -> AnimalSummary {
    AnimalSummary {
        animal_id: animal_id.to_string(),
        location: location.to_string(),
        sex: Sex::Male,
        age_months,
        avg_daily_gain_kg: gain,
        weighing_count: 2,
        initial_weight_kg: 100.0,
        final_weight_kg: 130.0,
        total_gain_kg: 30.0,
        period_days: 30,
    }
}

const WHITE: Rgb = Rgb::new(255, 255, 255);
const BLUE: Rgb = Rgb::new(0, 128, 255);

#[test]
fn test_cells_are_sparse() {
    let summaries = vec![
        summary("A1", "North", 4, 1.0),
        summary("A2", "North", 4, 1.2),
        summary("A3", "South", 10, 0.8),
    ];
    let cells = build_heatmap_cells(&summaries, AGE_BRACKETS);

    // Only two (location, bracket) pairs have members; nothing else exists
    assert_eq!(cells.len(), 2);

    let north = cells
        .iter()
        .find(|c| c.column_category == "North")
        .unwrap();
    assert_eq!(north.row_category, "0-8");
    assert_eq!(north.value, 1.1);

    let south = cells
        .iter()
        .find(|c| c.column_category == "South")
        .unwrap();
    assert_eq!(south.row_category, "9-12");
    assert_eq!(south.value, 0.8);
}

#[test]
fn test_unbounded_bracket_is_not_plotted() {
    let summaries = vec![summary("A1", "North", 30, 1.0)];
    let cells = build_heatmap_cells(&summaries, AGE_BRACKETS);
    assert!(cells.is_empty());
}

#[test]
fn test_empty_cohort_yields_no_figure() {
    let cells = build_heatmap_cells(&[], AGE_BRACKETS);
    let layout = default_heatmap_layout();
    assert!(build_heatmap(cells, &layout, WHITE, BLUE).is_none());
}

#[test]
fn test_color_endpoints() {
    let summaries = vec![
        summary("A1", "North", 4, 0.5),
        summary("A2", "South", 4, 1.5),
    ];
    let cells = build_heatmap_cells(&summaries, AGE_BRACKETS);
    let layout = default_heatmap_layout();
    let figure = build_heatmap(cells, &layout, WHITE, BLUE).unwrap();

    assert_eq!(figure.min_value, 0.5);
    assert_eq!(figure.max_value, 1.5);

    let coldest = figure.cells.iter().find(|c| c.cell.value == 0.5).unwrap();
    let hottest = figure.cells.iter().find(|c| c.cell.value == 1.5).unwrap();
    assert_eq!(coldest.color, "#ffffff");
    assert_eq!(hottest.color, "#0080ff");
}

#[test]
fn test_degenerate_range_pins_ratio_to_midpoint() {
    // All cells share one value: no division by zero, no NaN
    let summaries = vec![
        summary("A1", "North", 4, 1.0),
        summary("A2", "South", 4, 1.0),
    ];
    let cells = build_heatmap_cells(&summaries, AGE_BRACKETS);
    let layout = default_heatmap_layout();
    let figure = build_heatmap(cells, &layout, WHITE, BLUE).unwrap();

    for cell in &figure.cells {
        assert!(cell.ratio.is_finite());
        assert_eq!(cell.ratio, 0.5);
    }
}

#[test]
fn test_grid_positions_follow_category_order() {
    let summaries = vec![
        summary("A1", "North", 4, 1.0),
        summary("A2", "North", 10, 1.1),
        summary("A3", "South", 4, 0.9),
    ];
    let cells = build_heatmap_cells(&summaries, AGE_BRACKETS);
    let layout = default_heatmap_layout();
    let figure = build_heatmap(cells, &layout, WHITE, BLUE).unwrap();

    assert_eq!(figure.column_categories, vec!["North", "South"]);
    assert_eq!(figure.row_categories, vec!["0-8", "9-12"]);

    let cell_width = layout.inner_width() / 2.0;
    let cell_height = layout.inner_height() / 2.0;

    let south_cell = figure
        .cells
        .iter()
        .find(|c| c.cell.column_category == "South")
        .unwrap();
    assert_eq!(south_cell.x, cell_width);
    assert_eq!(south_cell.y, 0.0);

    let north_912 = figure
        .cells
        .iter()
        .find(|c| c.cell.column_category == "North" && c.cell.row_category == "9-12")
        .unwrap();
    assert_eq!(north_912.x, 0.0);
    assert_eq!(north_912.y, cell_height);
}

#[test]
fn test_legend_spans_value_range() {
    let summaries = vec![
        summary("A1", "North", 4, 0.5),
        summary("A2", "South", 4, 1.5),
    ];
    let cells = build_heatmap_cells(&summaries, AGE_BRACKETS);
    let layout = default_heatmap_layout();
    let figure = build_heatmap(cells, &layout, WHITE, BLUE).unwrap();

    assert_eq!(figure.legend.len(), 5);
    assert_eq!(figure.legend[0].value, 0.5);
    assert_eq!(figure.legend[4].value, 1.5);
    assert_eq!(figure.legend[0].color, "#ffffff");
    assert_eq!(figure.legend[4].color, "#0080ff");
}
