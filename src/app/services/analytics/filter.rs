//! Conjunctive cohort filtering
//!
//! A [`FilterCriteria`] is a pure value object; applying it clones matching
//! summaries and never mutates the source collection. All active criteria
//! must match (AND).
//!
//! Note the deliberate bound asymmetry: the age-bracket criterion is
//! `[min, max)` (see [`AgeBracket`]) while the exact-month criterion is
//! `[min, max]` inclusive (see [`MonthSelector`]). Selecting month 12
//! matches an animal aged exactly 12 months, but the `9-12` bracket does
//! not.

use serde::Serialize;

use crate::app::models::{AnimalSummary, Sex};
use crate::constants::{AgeBracket, MonthSelector};

/// Filter criteria over an animal-summary collection
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterCriteria {
    /// Exact location match
    pub location: Option<String>,
    /// Age bracket, `[min, max)` semantics
    pub age_bracket: Option<AgeBracket>,
    /// Exact sex match
    pub sex: Option<Sex>,
    /// Exact age month, `[min, max]` semantics
    pub exact_age_month: Option<MonthSelector>,
}

impl FilterCriteria {
    /// Criteria that match every summary
    pub fn unfiltered() -> Self {
        Self::default()
    }

    /// True if no criterion is active
    pub fn is_unfiltered(&self) -> bool {
        self.location.is_none()
            && self.age_bracket.is_none()
            && self.sex.is_none()
            && self.exact_age_month.is_none()
    }

    /// True if a summary satisfies every active criterion
    pub fn matches(&self, summary: &AnimalSummary) -> bool {
        if let Some(location) = &self.location {
            if summary.location != *location {
                return false;
            }
        }

        if let Some(bracket) = &self.age_bracket {
            if !bracket.contains(summary.age_months) {
                return false;
            }
        }

        if let Some(sex) = self.sex {
            if summary.sex != sex {
                return false;
            }
        }

        if let Some(month) = &self.exact_age_month {
            if !month.contains(summary.age_months) {
                return false;
            }
        }

        true
    }
}

/// Apply filter criteria to a summary collection
pub fn apply_filters(summaries: &[AnimalSummary], criteria: &FilterCriteria) -> Vec<AnimalSummary> {
    summaries
        .iter()
        .filter(|summary| criteria.matches(summary))
        .cloned()
        .collect()
}
