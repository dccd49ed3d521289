//! Analysis and chart configuration.
//!
//! The statistics and geometry engines take their band tables, bracket
//! tables and color endpoints from here rather than from literals buried in
//! the math, so alternative tables can be injected without touching the
//! engines. Defaults reproduce the fixed tables in [`crate::constants`].

use crate::constants::{self, AgeBracket, DistributionBand, chart};
use serde::{Deserialize, Serialize};

/// RGB color triple used for interpolated chart fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Render as a `#rrggbb` hex string
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

/// Pixel margins around a chart's plotting area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Outer dimensions and margins of one chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    /// Total width in pixels
    pub width: f64,
    /// Total height in pixels
    pub height: f64,
    /// Margins reserved for axes and labels
    pub margin: Margins,
}

impl ChartLayout {
    /// Width of the plotting area inside the margins
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Height of the plotting area inside the margins
    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }
}

/// Default layout for box-plot figures
pub fn default_box_plot_layout() -> ChartLayout {
    ChartLayout {
        width: 500.0,
        height: 350.0,
        margin: Margins {
            top: 20.0,
            right: 30.0,
            bottom: 40.0,
            left: 40.0,
        },
    }
}

/// Default layout for heat-map figures
pub fn default_heatmap_layout() -> ChartLayout {
    ChartLayout {
        width: 700.0,
        height: 400.0,
        margin: Margins {
            top: 40.0,
            right: 100.0,
            bottom: 60.0,
            left: 100.0,
        },
    }
}

/// Immutable configuration shared by the statistics and geometry engines
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisConfig {
    /// Daily-gain distribution bands (must tile the number line)
    pub bands: Vec<DistributionBand>,

    /// Age bracket table used for filtering, comparison and the heat-map
    pub brackets: Vec<AgeBracket>,

    /// Heat-map color at the lowest present cell value
    pub heat_low: Rgb,

    /// Heat-map color at the highest present cell value
    pub heat_high: Rgb,

    /// Box-plot chart layout
    pub box_plot_layout: ChartLayout,

    /// Heat-map chart layout
    pub heatmap_layout: ChartLayout,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            bands: constants::DISTRIBUTION_BANDS.to_vec(),
            brackets: constants::AGE_BRACKETS.to_vec(),
            heat_low: chart::HEAT_LOW.into(),
            heat_high: chart::HEAT_HIGH.into(),
            box_plot_layout: default_box_plot_layout(),
            heatmap_layout: default_heatmap_layout(),
        }
    }
}
