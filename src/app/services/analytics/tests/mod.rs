//! Tests for cohort filtering and statistical aggregation

pub mod comparative_tests;
pub mod filter_tests;

use crate::app::models::{AnimalSummary, Sex};

/// Build a minimal valid summary for filter/statistics tests
pub fn summary(animal_id: &str, gain: f64) -> AnimalSummary {
    AnimalSummary {
        animal_id: animal_id.to_string(),
        location: "North".to_string(),
        sex: Sex::Male,
        age_months: 12,
        avg_daily_gain_kg: gain,
        weighing_count: 2,
        initial_weight_kg: 100.0,
        final_weight_kg: 130.0,
        total_gain_kg: 30.0,
        period_days: 30,
    }
}
