//! The analyze command: full cohort report on one weighing sheet

use colored::*;
use serde::Serialize;
use tracing::info;

use crate::Result;
use crate::app::services::analyzer::{AnalysisReport, GrowthAnalyzer, PipelineStats};
use crate::app::services::ingest;
use crate::app::services::timeline::HistoryPoint;
use crate::cli::args::{AnalyzeArgs, OutputFormat};
use crate::config::AnalysisConfig;

use super::create_progress_bar;

/// JSON payload for the analyze command
#[derive(Debug, Serialize)]
struct AnalyzePayload<'a> {
    pipeline: &'a PipelineStats,
    report: &'a AnalysisReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    history: Option<&'a AnimalHistory>,
}

/// One animal's history section
#[derive(Debug, Serialize)]
struct AnimalHistory {
    animal_id: String,
    weighings: Vec<HistoryPoint>,
}

/// Execute the analyze command
pub async fn run(args: AnalyzeArgs) -> Result<()> {
    let criteria = args.criteria()?;
    let rows = ingest::read_rows(&args.input).await?;

    let progress = if args.show_progress() && args.output_format == OutputFormat::Human {
        Some(create_progress_bar(rows.len() as u64, "Normalizing rows"))
    } else {
        None
    };

    let (analyzer, pipeline) =
        GrowthAnalyzer::from_rows(rows, AnalysisConfig::default(), progress.as_ref());

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    info!(
        "Analysis ready: {} summaries from {} rows",
        analyzer.summaries().len(),
        pipeline.normalization.total_rows
    );

    let report = analyzer.report(&criteria);
    let history = args.animal.as_ref().map(|animal_id| AnimalHistory {
        animal_id: animal_id.clone(),
        weighings: analyzer.history(animal_id),
    });

    match args.output_format {
        OutputFormat::Json => {
            let payload = AnalyzePayload {
                pipeline: &pipeline,
                report: &report,
                history: history.as_ref(),
            };
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Human => {
            print_report(&report, &pipeline);
            if let Some(history) = &history {
                print_history(history);
            }
        }
    }

    Ok(())
}

/// Print the human-readable cohort report
fn print_report(report: &AnalysisReport, pipeline: &PipelineStats) {
    println!("\n{}", "Weighing Analysis Summary".bright_green().bold());
    println!("{}", "=".repeat(50));

    println!(
        "Rows: {} decoded, {} dropped | Animals: {} seen, {} summarised",
        pipeline.normalization.total_rows.to_string().bright_white().bold(),
        pipeline.normalization.dropped(),
        pipeline.timeline.animals_seen,
        pipeline.timeline.summarised
    );

    if report.total_animals == 0 {
        println!(
            "\n{}",
            "No animals match the active filters (no data)".bright_yellow().bold()
        );
        return;
    }

    println!(
        "Filtered cohort: {} animals | mean {} kg/day | {} at/above mean, {} below",
        report.total_animals.to_string().bright_white().bold(),
        report.mean_daily_gain_kg.to_string().bright_white().bold(),
        report.above_average,
        report.below_average
    );

    if let Some(stats) = &report.statistics {
        if !stats.outliers.is_empty() {
            let ids: Vec<&str> = stats
                .outliers
                .iter()
                .take(3)
                .map(|summary| summary.animal_id.as_str())
                .collect();
            let more = stats.outliers.len().saturating_sub(3);
            let suffix = if more > 0 {
                format!(" and {} more", more)
            } else {
                String::new()
            };
            println!(
                "\n{} {} animal(s) with atypical performance: {}{}",
                "Attention:".bright_yellow().bold(),
                stats.outliers.len(),
                ids.join(", "),
                suffix
            );
        }

        println!("\n{}", "Descriptive Statistics (kg/day)".bright_green().bold());
        println!("  Mean:      {:>10}    Median: {:>10}", stats.mean, stats.median);
        println!("  Min:       {:>10}    Max:    {:>10}", stats.min, stats.max);
        println!(
            "  Std dev:   {:>10}    CV:     {:>9}%",
            stats.std_dev, stats.coefficient_of_variation
        );
        println!(
            "  Q1:        {:>10}    Q3:     {:>10}    IQR: {:>8}",
            stats.q1, stats.q3, stats.iqr
        );

        println!("\n{}", "Daily-Gain Distribution".bright_green().bold());
        for bucket in &stats.distribution {
            println!("  {:<22} {:>5}", bucket.label, bucket.count);
        }
    }

    if let Some(tiers) = &report.tiers {
        println!("\n{}", "Performance Tiers".bright_green().bold());
        println!(
            "  Excellent: {:>4} ({}%)   Good: {:>4} ({}%)",
            tiers.excellent.count, tiers.excellent.percent, tiers.good.count, tiers.good.percent
        );
        println!(
            "  Regular:   {:>4} ({}%)   Poor: {:>4} ({}%)",
            tiers.regular.count, tiers.regular.percent, tiers.poor.count, tiers.poor.percent
        );
    }

    if !report.by_sex.is_empty() {
        println!("\n{}", "Comparison by Sex".bright_green().bold());
        for group in &report.by_sex {
            println!(
                "  {:<10} n={:<4} mean={:<8} std={:<8} min={:<8} max={:<8}",
                group.key,
                group.count,
                group.mean,
                group.std_dev,
                group.min.unwrap_or_default(),
                group.max.unwrap_or_default()
            );
        }
    }

    if !report.by_age_bracket.is_empty() {
        println!("\n{}", "Comparison by Age Bracket".bright_green().bold());
        for group in &report.by_age_bracket {
            println!(
                "  {:<14} n={:<4} mean={:<8} std={:<8}",
                group.key, group.count, group.mean, group.std_dev
            );
        }
    }
}

/// Print one animal's weighing history
fn print_history(history: &AnimalHistory) {
    println!(
        "\n{} {}",
        "Weighing History:".bright_green().bold(),
        history.animal_id.bright_white().bold()
    );

    if history.weighings.is_empty() {
        println!("  {}", "No weighings found for this animal".bright_yellow());
        return;
    }

    println!(
        "  {:<12} {:>10} {:>14} {:>18} {:>12}",
        "Date", "Weight", "Period gain", "Cumulative gain", "Days"
    );
    for point in &history.weighings {
        println!(
            "  {:<12} {:>10.2} {:>+14.1} {:>+18.1} {:>12}",
            point.date.format("%Y-%m-%d"),
            point.weight_kg,
            point.period_gain_kg,
            point.cumulative_gain_kg,
            point.days_since_start
        );
    }
}
