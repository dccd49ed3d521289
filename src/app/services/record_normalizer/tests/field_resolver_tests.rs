//! Tests for synonym-based field resolution

use crate::app::models::{RawRow, RawValue};
use crate::app::services::record_normalizer::{clean_row_keys, resolve, resolve_number, resolve_text};
use crate::constants::fields;

fn row(entries: &[(&str, RawValue)]) -> RawRow {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn test_clean_row_keys() {
    let raw = row(&[
        ("  Animal ", RawValue::Text("A1".to_string())),
        ("peso", RawValue::Number(100.0)),
    ]);
    let cleaned = clean_row_keys(raw);
    assert!(cleaned.contains_key("ANIMAL"));
    assert!(cleaned.contains_key("PESO"));
    assert!(!cleaned.contains_key("  Animal "));
}

#[test]
fn test_resolve_first_non_empty_synonym() {
    let cleaned = clean_row_keys(row(&[
        ("DATA", RawValue::Empty),
        ("DATA_PESAGEM", RawValue::Text("01/01/2024".to_string())),
    ]));
    let value = resolve(&cleaned, fields::DATE).unwrap();
    assert_eq!(*value, RawValue::Text("01/01/2024".to_string()));
}

#[test]
fn test_resolve_case_insensitive_via_cleaning() {
    let cleaned = clean_row_keys(row(&[("sexo", RawValue::Text("m".to_string()))]));
    assert_eq!(resolve_text(&cleaned, fields::SEX), Some("m".to_string()));
}

#[test]
fn test_resolve_absent_field() {
    let cleaned = clean_row_keys(row(&[("PESO", RawValue::Number(100.0))]));
    assert!(resolve(&cleaned, fields::ANIMAL_ID).is_none());
    assert!(resolve_text(&cleaned, fields::LOCATION).is_none());
}

#[test]
fn test_resolve_number_from_text_cell() {
    let cleaned = clean_row_keys(row(&[("PESO", RawValue::Text(" 130.5 ".to_string()))]));
    assert_eq!(resolve_number(&cleaned, fields::WEIGHT), Some(130.5));

    let bad = clean_row_keys(row(&[("PESO", RawValue::Text("heavy".to_string()))]));
    assert_eq!(resolve_number(&bad, fields::WEIGHT), None);
}

#[test]
fn test_blank_text_counts_as_empty() {
    let cleaned = clean_row_keys(row(&[("LOCAL", RawValue::Text("   ".to_string()))]));
    assert!(resolve(&cleaned, fields::LOCATION).is_none());
}
