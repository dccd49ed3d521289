//! Tests for per-animal timeline construction

use crate::app::models::{Sex, WeighingEvent};
use crate::app::services::timeline::{animal_history, build_timelines};
use chrono::NaiveDate;

fn event(animal_id: &str, date: (i32, u32, u32), weight_kg: f64) -> WeighingEvent {
    WeighingEvent {
        animal_id: animal_id.to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        weight_kg,
        location: "North".to_string(),
        sex: Sex::Male,
        age_months: 12,
    }
}

#[test]
fn test_two_weighings_thirty_days_apart() {
    let events = vec![
        event("A1", (2024, 1, 1), 100.0),
        event("A1", (2024, 1, 31), 130.0),
    ];
    let (summaries, stats) = build_timelines(&events);

    assert_eq!(summaries.len(), 1);
    let summary = &summaries[0];
    assert_eq!(summary.animal_id, "A1");
    assert_eq!(summary.period_days, 30);
    assert_eq!(summary.avg_daily_gain_kg, 1.0);
    assert_eq!(summary.total_gain_kg, 30.0);
    assert_eq!(summary.initial_weight_kg, 100.0);
    assert_eq!(summary.final_weight_kg, 130.0);
    assert_eq!(summary.weighing_count, 2);
    assert!(summary.validate().is_ok());

    assert_eq!(stats.animals_seen, 1);
    assert_eq!(stats.summarised, 1);
}

#[test]
fn test_single_event_animal_is_excluded() {
    let events = vec![event("A1", (2024, 1, 1), 100.0)];
    let (summaries, stats) = build_timelines(&events);

    assert!(summaries.is_empty());
    assert_eq!(stats.insufficient_history, 1);
}

#[test]
fn test_same_day_duplicate_is_excluded() {
    // Two events on the same date leave no interval with positive days
    let events = vec![
        event("A1", (2024, 1, 1), 100.0),
        event("A1", (2024, 1, 1), 105.0),
    ];
    let (summaries, stats) = build_timelines(&events);

    assert!(summaries.is_empty());
    assert_eq!(stats.no_positive_interval, 1);
}

#[test]
fn test_same_day_interval_is_skipped_not_fatal() {
    // The zero-day interval is skipped; the remaining interval still counts
    let events = vec![
        event("A1", (2024, 1, 1), 100.0),
        event("A1", (2024, 1, 1), 102.0),
        event("A1", (2024, 1, 21), 142.0),
    ];
    let (summaries, _) = build_timelines(&events);

    assert_eq!(summaries.len(), 1);
    let summary = &summaries[0];
    assert_eq!(summary.weighing_count, 3);
    // Only the 20-day interval contributes: (142 - 102) / 20
    assert_eq!(summary.avg_daily_gain_kg, 2.0);
    assert_eq!(summary.period_days, 20);
}

#[test]
fn test_unsorted_input_is_ordered_by_date() {
    let events = vec![
        event("A1", (2024, 3, 1), 160.0),
        event("A1", (2024, 1, 1), 100.0),
        event("A1", (2024, 2, 1), 131.0),
    ];
    let (summaries, _) = build_timelines(&events);

    let summary = &summaries[0];
    assert_eq!(summary.initial_weight_kg, 100.0);
    assert_eq!(summary.final_weight_kg, 160.0);
    assert_eq!(summary.period_days, 60);
    // Gains: 1.0 over 31 days, 1.0 over 29 days (131->160 = 29/29)
    assert_eq!(summary.avg_daily_gain_kg, 1.0);
}

#[test]
fn test_summary_metadata_comes_from_most_recent_event() {
    let mut early = event("A1", (2024, 1, 1), 100.0);
    early.location = "South".to_string();
    early.sex = Sex::Unknown;
    early.age_months = 10;

    let mut late = event("A1", (2024, 2, 1), 131.0);
    late.location = "North".to_string();
    late.sex = Sex::Female;
    late.age_months = 11;

    let (summaries, _) = build_timelines(&[early, late]);
    let summary = &summaries[0];
    assert_eq!(summary.location, "North");
    assert_eq!(summary.sex, Sex::Female);
    assert_eq!(summary.age_months, 11);
}

#[test]
fn test_groups_keep_first_appearance_order() {
    let events = vec![
        event("B2", (2024, 1, 1), 200.0),
        event("A1", (2024, 1, 1), 100.0),
        event("B2", (2024, 1, 31), 230.0),
        event("A1", (2024, 1, 31), 130.0),
    ];
    let (summaries, _) = build_timelines(&events);

    let ids: Vec<&str> = summaries.iter().map(|s| s.animal_id.as_str()).collect();
    assert_eq!(ids, vec!["B2", "A1"]);
}

#[test]
fn test_mean_gain_is_rounded_to_four_decimals() {
    // 10 kg over 3 days = 3.3333... kg/day
    let events = vec![
        event("A1", (2024, 1, 1), 100.0),
        event("A1", (2024, 1, 4), 110.0),
    ];
    let (summaries, _) = build_timelines(&events);
    assert_eq!(summaries[0].avg_daily_gain_kg, 3.3333);
}

#[test]
fn test_history_gains_and_days() {
    let events = vec![
        event("A1", (2024, 1, 1), 100.0),
        event("A1", (2024, 1, 11), 112.0),
        event("A1", (2024, 1, 31), 130.0),
        event("B2", (2024, 1, 1), 500.0),
    ];
    let history = animal_history(&events, "A1");

    assert_eq!(history.len(), 3);
    assert_eq!(history[0].period_gain_kg, 0.0);
    assert_eq!(history[0].cumulative_gain_kg, 0.0);
    assert_eq!(history[0].days_since_start, 0);

    assert_eq!(history[1].period_gain_kg, 12.0);
    assert_eq!(history[1].cumulative_gain_kg, 12.0);
    assert_eq!(history[1].days_since_start, 10);

    assert_eq!(history[2].period_gain_kg, 18.0);
    assert_eq!(history[2].cumulative_gain_kg, 30.0);
    assert_eq!(history[2].days_since_start, 30);

    // Cumulative gain at the last point equals final minus initial weight
    assert_eq!(
        history[2].cumulative_gain_kg,
        events[2].weight_kg - events[0].weight_kg
    );
}

#[test]
fn test_history_of_unknown_animal_is_empty() {
    let events = vec![event("A1", (2024, 1, 1), 100.0)];
    assert!(animal_history(&events, "Z9").is_empty());
}
