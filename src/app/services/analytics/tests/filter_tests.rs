//! Tests for conjunctive cohort filtering

use super::summary;
use crate::app::models::Sex;
use crate::app::services::analytics::{FilterCriteria, apply_filters};
use crate::constants::{find_bracket, month_selector};

#[test]
fn test_unfiltered_criteria_match_everything() {
    let summaries = vec![summary("A1", 1.0), summary("A2", 0.5)];
    let criteria = FilterCriteria::unfiltered();
    assert!(criteria.is_unfiltered());
    assert_eq!(apply_filters(&summaries, &criteria).len(), 2);
}

#[test]
fn test_location_filter_is_exact() {
    let mut south = summary("A2", 0.5);
    south.location = "South".to_string();
    let summaries = vec![summary("A1", 1.0), south];

    let criteria = FilterCriteria {
        location: Some("South".to_string()),
        ..Default::default()
    };
    let filtered = apply_filters(&summaries, &criteria);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].animal_id, "A2");
}

#[test]
fn test_sex_filter() {
    let mut female = summary("A2", 0.5);
    female.sex = Sex::Female;
    let summaries = vec![summary("A1", 1.0), female];

    let criteria = FilterCriteria {
        sex: Some(Sex::Female),
        ..Default::default()
    };
    let filtered = apply_filters(&summaries, &criteria);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].animal_id, "A2");
}

#[test]
fn test_bracket_excludes_upper_bound_month_selector_includes_it() {
    // An animal aged exactly 12 months sits on the 9-12 bracket's upper
    // bound: the bracket (upper-exclusive) rejects it, the exact-month
    // selector (inclusive) accepts it. This asymmetry is intentional.
    let twelve = summary("A1", 1.0);
    assert_eq!(twelve.age_months, 12);
    let summaries = vec![twelve];

    let bracket_criteria = FilterCriteria {
        age_bracket: Some(*find_bracket("9-12").unwrap()),
        ..Default::default()
    };
    assert!(apply_filters(&summaries, &bracket_criteria).is_empty());

    let month_criteria = FilterCriteria {
        exact_age_month: month_selector("12"),
        ..Default::default()
    };
    assert_eq!(apply_filters(&summaries, &month_criteria).len(), 1);
}

#[test]
fn test_unbounded_bracket_has_no_upper_limit() {
    let mut old = summary("A1", 1.0);
    old.age_months = 31;
    let criteria = FilterCriteria {
        age_bracket: Some(*find_bracket("24+").unwrap()),
        ..Default::default()
    };
    assert_eq!(apply_filters(&[old], &criteria).len(), 1);
}

#[test]
fn test_criteria_combine_conjunctively() {
    let mut match_all = summary("A1", 1.0);
    match_all.sex = Sex::Female;
    match_all.age_months = 10;

    let mut wrong_sex = summary("A2", 1.0);
    wrong_sex.age_months = 10;

    let criteria = FilterCriteria {
        location: Some("North".to_string()),
        age_bracket: Some(*find_bracket("9-12").unwrap()),
        sex: Some(Sex::Female),
        exact_age_month: None,
    };
    let filtered = apply_filters(&[match_all, wrong_sex], &criteria);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].animal_id, "A1");
}

#[test]
fn test_filtering_does_not_mutate_source() {
    let summaries = vec![summary("A1", 1.0)];
    let criteria = FilterCriteria {
        location: Some("Elsewhere".to_string()),
        ..Default::default()
    };
    let filtered = apply_filters(&summaries, &criteria);
    assert!(filtered.is_empty());
    assert_eq!(summaries.len(), 1);
}
