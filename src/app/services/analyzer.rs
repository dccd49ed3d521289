//! Analysis pipeline orchestration
//!
//! The [`GrowthAnalyzer`] owns the summaries produced by one ingest run and
//! derives the complete report for any filter state. Every derived
//! structure is recomputed wholesale on each call — there is no caching
//! layer and none is needed, since every engine is a pure function of the
//! filtered set.

use indicatif::ProgressBar;
use serde::Serialize;
use tracing::info;

use crate::app::models::{AnimalSummary, RawRow, WeighingEvent};
use crate::app::services::analytics::{
    ComparativeGroup, FilterCriteria, PerformanceTiers, StatisticalSummary, apply_filters,
    compare_by_age_bracket, compare_by_sex, compute_statistics, performance_tiers,
};
use crate::app::services::exporter::{ExportRecord, build_export_records};
use crate::app::services::geometry::{
    BoxPlotFigure, HeatmapFigure, build_box_plot, build_heatmap, build_heatmap_cells, sex_groups,
};
use crate::app::services::record_normalizer::{NormalizationStats, RecordNormalizer};
use crate::app::services::timeline::{HistoryPoint, TimelineStats, animal_history, build_timelines};
use crate::config::AnalysisConfig;
use crate::constants::{GAIN_DECIMALS, round_to};

/// Combined statistics from one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineStats {
    /// Row normalization counters
    pub normalization: NormalizationStats,
    /// Timeline construction counters
    pub timeline: TimelineStats,
}

/// The complete derived report for one filter state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Number of animals matching the active filters
    pub total_animals: usize,
    /// Mean daily gain of the filtered cohort (0 when empty)
    pub mean_daily_gain_kg: f64,
    /// Animals with daily gain at or above the cohort mean
    pub above_average: usize,
    /// Animals with daily gain below the cohort mean
    pub below_average: usize,
    /// The filtered summaries themselves
    pub animals: Vec<AnimalSummary>,
    /// Descriptive statistics (`None` = no data)
    pub statistics: Option<StatisticalSummary>,
    /// Performance tier partition (`None` = no data)
    pub tiers: Option<PerformanceTiers>,
    /// Per-sex comparison groups
    pub by_sex: Vec<ComparativeGroup>,
    /// Per-age-bracket comparison groups
    pub by_age_bracket: Vec<ComparativeGroup>,
    /// Box-plot figure over the sex groups (`None` = no data)
    pub box_plot: Option<BoxPlotFigure>,
    /// Heat-map figure over location x bracket (`None` = no data)
    pub heatmap: Option<HeatmapFigure>,
}

/// Growth analyzer: one ingested dataset, any number of filter states
#[derive(Debug)]
pub struct GrowthAnalyzer {
    events: Vec<WeighingEvent>,
    summaries: Vec<AnimalSummary>,
    config: AnalysisConfig,
}

impl GrowthAnalyzer {
    /// Run normalization and timeline construction over decoded raw rows
    pub fn from_rows(
        rows: Vec<RawRow>,
        config: AnalysisConfig,
        progress: Option<&ProgressBar>,
    ) -> (Self, PipelineStats) {
        let normalizer = RecordNormalizer::new();
        let (events, normalization) = normalizer.normalize(rows, progress);
        let (summaries, timeline) = build_timelines(&events);

        info!(
            "Pipeline ready: {} events, {} animal summaries",
            events.len(),
            summaries.len()
        );

        (
            Self {
                events,
                summaries,
                config,
            },
            PipelineStats {
                normalization,
                timeline,
            },
        )
    }

    /// Build an analyzer directly from summaries (mainly for tests)
    pub fn from_summaries(summaries: Vec<AnimalSummary>, config: AnalysisConfig) -> Self {
        Self {
            events: Vec::new(),
            summaries,
            config,
        }
    }

    /// All animal summaries, unfiltered
    pub fn summaries(&self) -> &[AnimalSummary] {
        &self.summaries
    }

    /// Distinct locations across all summaries, in first-appearance order
    pub fn locations(&self) -> Vec<String> {
        let mut locations = Vec::new();
        for summary in &self.summaries {
            if !locations.contains(&summary.location) {
                locations.push(summary.location.clone());
            }
        }
        locations
    }

    /// Derive the complete report for one filter state
    pub fn report(&self, criteria: &FilterCriteria) -> AnalysisReport {
        let filtered = apply_filters(&self.summaries, criteria);

        let mean = if filtered.is_empty() {
            0.0
        } else {
            round_to(
                filtered.iter().map(|s| s.avg_daily_gain_kg).sum::<f64>() / filtered.len() as f64,
                GAIN_DECIMALS,
            )
        };
        let above_average = filtered
            .iter()
            .filter(|s| s.avg_daily_gain_kg >= mean)
            .count();

        let statistics = compute_statistics(&filtered, &self.config.bands);
        let tiers = statistics
            .as_ref()
            .map(|stats| performance_tiers(&filtered, stats));
        let by_sex = compare_by_sex(&filtered);
        let by_age_bracket = compare_by_age_bracket(&filtered, &self.config.brackets);
        let box_plot = build_box_plot(&sex_groups(&filtered), &self.config.box_plot_layout);
        let heatmap = build_heatmap(
            build_heatmap_cells(&filtered, &self.config.brackets),
            &self.config.heatmap_layout,
            self.config.heat_low,
            self.config.heat_high,
        );

        AnalysisReport {
            total_animals: filtered.len(),
            mean_daily_gain_kg: mean,
            above_average,
            below_average: filtered.len() - above_average,
            animals: filtered,
            statistics,
            tiers,
            by_sex,
            by_age_bracket,
            box_plot,
            heatmap,
        }
    }

    /// Chronological weighing history for one animal
    pub fn history(&self, animal_id: &str) -> Vec<HistoryPoint> {
        animal_history(&self.events, animal_id)
    }

    /// Flat export rows for one filter state
    pub fn export_records(&self, criteria: &FilterCriteria) -> Vec<ExportRecord> {
        build_export_records(&apply_filters(&self.summaries, criteria))
    }
}
