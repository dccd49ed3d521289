//! Cohort filtering and statistical aggregation
//!
//! Everything in this module is a pure function from an animal-summary
//! collection (plus criteria/config) to a derived value object. Nothing is
//! cached: a filter change means wholesale recomputation, which keeps every
//! result trivially consistent with the current criteria.
//!
//! - [`filter`] - conjunctive predicate composition over summaries
//! - [`statistics`] - descriptive statistics, quartiles, Tukey-fence
//!   outliers, distribution buckets and performance tiers
//! - [`comparative`] - per-sex and per-age-bracket partition statistics

pub mod comparative;
pub mod filter;
pub mod statistics;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use comparative::{ComparativeGroup, compare_by_age_bracket, compare_by_sex};
pub use filter::{FilterCriteria, apply_filters};
pub use statistics::{
    DistributionBucket, PerformanceTiers, StatisticalSummary, TierCount, compute_statistics,
    performance_tiers,
};
