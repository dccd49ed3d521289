//! Timeline reconstruction and growth derivation
//!
//! Groups validated weighing events by animal, orders each group
//! chronologically and derives the per-animal growth summary: sequential
//! daily gains, total gain and observed period. Animals with fewer than two
//! chronologically distinct weighings carry no growth information and are
//! excluded, not errored.

pub mod builder;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use builder::{HistoryPoint, TimelineStats, animal_history, build_timelines};
