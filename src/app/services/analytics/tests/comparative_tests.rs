//! Tests for per-sex and per-bracket comparative statistics

use super::summary;
use crate::app::models::Sex;
use crate::app::services::analytics::{compare_by_age_bracket, compare_by_sex};
use crate::constants::AGE_BRACKETS;

#[test]
fn test_compare_by_sex_omits_empty_partitions() {
    // All-male cohort: no Females row at all
    let summaries = vec![summary("A1", 1.0), summary("A2", 0.8)];
    let groups = compare_by_sex(&summaries);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].key, "Males");
    assert_eq!(groups[0].count, 2);
    assert_eq!(groups[0].mean, 0.9);
}

#[test]
fn test_compare_by_sex_restricted_to_recorded_sexes() {
    let mut female = summary("A2", 0.6);
    female.sex = Sex::Female;
    let mut unknown = summary("A3", 2.0);
    unknown.sex = Sex::Unknown;
    let summaries = vec![summary("A1", 1.0), female, unknown];

    let groups = compare_by_sex(&summaries);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].key, "Males");
    assert_eq!(groups[1].key, "Females");
    // The unknown-sex animal appears in neither partition
    assert_eq!(groups[0].count + groups[1].count, 2);
}

#[test]
fn test_sex_groups_carry_extremes() {
    let summaries = vec![summary("A1", 0.5), summary("A2", 1.5)];
    let groups = compare_by_sex(&summaries);

    assert_eq!(groups[0].min, Some(0.5));
    assert_eq!(groups[0].max, Some(1.5));
}

#[test]
fn test_compare_by_age_bracket() {
    let mut young = summary("A1", 0.6);
    young.age_months = 4;
    let mut mid = summary("A2", 1.0);
    mid.age_months = 10;
    let mut mid2 = summary("A3", 1.2);
    mid2.age_months = 11;

    let groups = compare_by_age_bracket(&[young, mid, mid2], AGE_BRACKETS);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].key, "0-8 months");
    assert_eq!(groups[0].count, 1);
    assert_eq!(groups[1].key, "9-12 months");
    assert_eq!(groups[1].count, 2);
    assert_eq!(groups[1].mean, 1.1);
    // Bracket partitions omit the extremes
    assert_eq!(groups[1].min, None);
    assert_eq!(groups[1].max, None);
}

#[test]
fn test_empty_cohort_produces_no_groups() {
    assert!(compare_by_sex(&[]).is_empty());
    assert!(compare_by_age_bracket(&[], AGE_BRACKETS).is_empty());
}
