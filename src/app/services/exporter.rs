//! Flat per-animal export records
//!
//! Turns a filtered cohort into one row per animal for tabular consumers,
//! with an above/below-average status column computed against the cohort's
//! own mean. The default output filename encodes the active filters so
//! repeated exports with different criteria never collide.

use serde::Serialize;
use std::io::Write;

use crate::Result;
use crate::app::models::AnimalSummary;
use crate::app::services::analytics::FilterCriteria;

/// One flat export row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRecord {
    pub animal: String,
    pub location: String,
    pub sex: &'static str,
    pub age_months: u32,
    pub daily_gain_kg: f64,
    pub initial_weight_kg: f64,
    pub final_weight_kg: f64,
    pub total_gain_kg: f64,
    pub period_days: i64,
    pub weighings: usize,
    /// "Above average" or "Below average" relative to the cohort mean
    pub status: &'static str,
}

/// Build export rows for a filtered cohort
///
/// The status column compares each animal's daily gain against the mean of
/// this same cohort; at-the-mean counts as above.
pub fn build_export_records(filtered: &[AnimalSummary]) -> Vec<ExportRecord> {
    if filtered.is_empty() {
        return Vec::new();
    }

    let mean = filtered
        .iter()
        .map(|summary| summary.avg_daily_gain_kg)
        .sum::<f64>()
        / filtered.len() as f64;

    filtered
        .iter()
        .map(|summary| ExportRecord {
            animal: summary.animal_id.clone(),
            location: summary.location.clone(),
            sex: summary.sex.code(),
            age_months: summary.age_months,
            daily_gain_kg: summary.avg_daily_gain_kg,
            initial_weight_kg: summary.initial_weight_kg,
            final_weight_kg: summary.final_weight_kg,
            total_gain_kg: summary.total_gain_kg,
            period_days: summary.period_days,
            weighings: summary.weighing_count,
            status: if summary.avg_daily_gain_kg >= mean {
                "Above average"
            } else {
                "Below average"
            },
        })
        .collect()
}

/// Write export rows as CSV with a header row
pub fn write_csv<W: Write>(records: &[ExportRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Default export filename encoding the active filter criteria
///
/// `weight_analysis[_<location>][_<bracket>m][_<sex>].csv`
pub fn export_filename(criteria: &FilterCriteria) -> String {
    let mut name = String::from("weight_analysis");
    if let Some(location) = &criteria.location {
        name.push('_');
        name.push_str(&location.replace(' ', "-"));
    }
    if let Some(bracket) = &criteria.age_bracket {
        name.push('_');
        name.push_str(bracket.value);
        name.push('m');
    }
    if let Some(sex) = criteria.sex {
        name.push('_');
        name.push_str(sex.code());
    }
    name.push_str(".csv");
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::Sex;
    use crate::constants::find_bracket;

    fn summary(animal_id: &str, gain: f64) -> AnimalSummary {
        AnimalSummary {
            animal_id: animal_id.to_string(),
            location: "North".to_string(),
            sex: Sex::Male,
            age_months: 12,
            avg_daily_gain_kg: gain,
            weighing_count: 3,
            initial_weight_kg: 100.0,
            final_weight_kg: 145.0,
            total_gain_kg: 45.0,
            period_days: 45,
        }
    }

    #[test]
    fn test_status_against_cohort_mean() {
        let records = build_export_records(&[summary("A1", 1.2), summary("A2", 0.6)]);
        assert_eq!(records[0].status, "Above average");
        assert_eq!(records[1].status, "Below average");
    }

    #[test]
    fn test_total_gain_round_trip() {
        let records = build_export_records(&[summary("A1", 1.0)]);
        let record = &records[0];
        assert_eq!(
            record.total_gain_kg,
            record.final_weight_kg - record.initial_weight_kg
        );
    }

    #[test]
    fn test_empty_cohort_exports_nothing() {
        assert!(build_export_records(&[]).is_empty());
    }

    #[test]
    fn test_csv_output_has_header_and_rows() {
        let records = build_export_records(&[summary("A1", 1.0)]);
        let mut buffer = Vec::new();
        write_csv(&records, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "animal,location,sex,age_months,daily_gain_kg,initial_weight_kg,\
             final_weight_kg,total_gain_kg,period_days,weighings,status"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("A1,North,M,12,1.0,100.0,145.0,45.0,45,3,"));
    }

    #[test]
    fn test_filename_encodes_criteria() {
        assert_eq!(export_filename(&FilterCriteria::unfiltered()), "weight_analysis.csv");

        let criteria = FilterCriteria {
            location: Some("North Field".to_string()),
            age_bracket: find_bracket("9-12").copied(),
            sex: Some(Sex::Female),
            exact_age_month: None,
        };
        assert_eq!(
            export_filename(&criteria),
            "weight_analysis_North-Field_9-12m_F.csv"
        );
    }
}
