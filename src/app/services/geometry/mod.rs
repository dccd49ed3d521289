//! Chart geometry derivation
//!
//! Pure transforms from aggregated numeric groups to axis-scaled, drawable
//! primitives. The rendering surface that turns these into pixels is a
//! consumer of this module, not part of it.
//!
//! - [`scale`] - shared linear value-to-pixel scale
//! - [`box_plot`] - per-group quartile boxes, clamped whiskers and outlier
//!   points on a shared scale
//! - [`heatmap`] - sparse location-by-age-bracket grid with interpolated
//!   cell colors

pub mod box_plot;
pub mod heatmap;
pub mod scale;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use box_plot::{BoxPlotFigure, BoxPlotGroup, BoxPlotStats, build_box_plot, sex_groups};
pub use heatmap::{HeatmapCell, HeatmapFigure, build_heatmap, build_heatmap_cells};
pub use scale::LinearScale;
