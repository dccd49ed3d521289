//! Application constants for the herd analyzer
//!
//! This module contains the static vocabulary of the weighing-sheet domain:
//! field synonym tables, age bracket and month selector definitions,
//! daily-gain distribution bands, chart color values and the spreadsheet
//! date-serial convention.

use serde::Serialize;

// =============================================================================
// Field Synonym Tables
// =============================================================================

/// Known column-name synonyms per logical field
///
/// Row keys are trimmed and upper-cased before resolution, so every synonym
/// is listed in its canonical upper-case form. Order matters: the first
/// synonym with a non-empty value wins.
pub mod fields {
    /// Animal identifier column
    pub const ANIMAL_ID: &[&str] = &["ANIMAL"];

    /// Weighing date column
    pub const DATE: &[&str] = &["DATA", "DATA_PESAGEM"];

    /// Weight column (kilograms)
    pub const WEIGHT: &[&str] = &["PESO"];

    /// Pasture/location column
    pub const LOCATION: &[&str] = &["LOCAL"];

    /// Sex column
    pub const SEX: &[&str] = &["SX", "SEXO"];

    /// Age-in-months column
    pub const AGE_MONTHS: &[&str] = &["MESES"];
}

// =============================================================================
// Normalization Defaults
// =============================================================================

/// Identifier assigned to rows with no animal column
pub const UNKNOWN_ANIMAL_ID: &str = "UNKNOWN";

/// Placeholder for absent text fields (location)
pub const MISSING_TEXT: &str = "N/A";

/// Decimal places kept on derived daily-gain figures
pub const GAIN_DECIMALS: u32 = 4;

/// Decimal places kept on the coefficient of variation
pub const CV_DECIMALS: u32 = 2;

// =============================================================================
// Spreadsheet Date Serial Convention
// =============================================================================

/// Reference date for numeric spreadsheet serials ("day 1 = Jan 1, 1900")
pub const SERIAL_EPOCH: (i32, u32, u32) = (1900, 1, 1);

/// Correction subtracted from serials, absorbing the historical 1900
/// leap-year bug convention of common spreadsheet software
pub const SERIAL_DAY_CORRECTION: i64 = 2;

/// Minimum digit count for a numeric value to be read as a date serial
pub const SERIAL_MIN_DIGITS: usize = 5;

/// Generic fallback date formats tried after the delimited patterns
pub const FALLBACK_DATE_FORMATS: &[&str] = &["%Y/%m/%d", "%d.%m.%Y", "%B %d, %Y", "%b %d %Y"];

/// Fallback parses are only trusted when the year is after this
pub const FALLBACK_MIN_YEAR: i32 = 1990;

// =============================================================================
// Age Brackets and Month Selectors
// =============================================================================

/// A named age range in months used for cohort filtering
///
/// Membership is `[min, max)` — lower-inclusive, upper-exclusive — except
/// for the unbounded top bracket. The exact-month selector below uses
/// different (inclusive) bounds; that asymmetry is deliberate and keeps the
/// brackets non-overlapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBracket {
    /// Machine value as used on the CLI (e.g. "9-12")
    pub value: &'static str,
    /// Human label (e.g. "9-12 months")
    pub label: &'static str,
    /// Lower bound in months, inclusive
    pub min: u32,
    /// Upper bound in months, exclusive (`None` = unbounded)
    pub max: Option<u32>,
}

impl AgeBracket {
    /// True if an age in months falls inside this bracket
    pub fn contains(&self, age_months: u32) -> bool {
        age_months >= self.min && self.max.is_none_or(|max| age_months < max)
    }

    /// True if the bracket has a finite upper bound
    ///
    /// Only bounded brackets are plotted on the heat-map grid.
    pub fn is_bounded(&self) -> bool {
        self.max.is_some()
    }
}

/// The fixed age bracket table
pub const AGE_BRACKETS: &[AgeBracket] = &[
    AgeBracket {
        value: "0-8",
        label: "0-8 months",
        min: 0,
        max: Some(8),
    },
    AgeBracket {
        value: "9-12",
        label: "9-12 months",
        min: 9,
        max: Some(12),
    },
    AgeBracket {
        value: "13-17",
        label: "13-17 months",
        min: 13,
        max: Some(17),
    },
    AgeBracket {
        value: "18-21",
        label: "18-21 months",
        min: 18,
        max: Some(21),
    },
    AgeBracket {
        value: "22-24",
        label: "22-24 months",
        min: 22,
        max: Some(24),
    },
    AgeBracket {
        value: "24+",
        label: "24+ months",
        min: 24,
        max: None,
    },
];

/// Look up an age bracket by its machine value
pub fn find_bracket(value: &str) -> Option<&'static AgeBracket> {
    AGE_BRACKETS.iter().find(|b| b.value == value)
}

/// Highest month offered by the exact-month selector
pub const MAX_SELECTABLE_MONTH: u32 = 24;

/// An exact-age selection in months
///
/// Unlike [`AgeBracket`], both bounds are inclusive, so selecting month 12
/// matches an animal aged exactly 12 months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthSelector {
    /// Lower bound in months, inclusive
    pub min: u32,
    /// Upper bound in months, inclusive (`None` = unbounded)
    pub max: Option<u32>,
}

impl MonthSelector {
    /// True if an age in months matches this selection
    pub fn contains(&self, age_months: u32) -> bool {
        age_months >= self.min && self.max.is_none_or(|max| age_months <= max)
    }
}

/// Parse a month selector value: `1`..=`24` or the open-ended `24+`
pub fn month_selector(value: &str) -> Option<MonthSelector> {
    let trimmed = value.trim();
    if trimmed == "24+" {
        return Some(MonthSelector {
            min: MAX_SELECTABLE_MONTH,
            max: None,
        });
    }

    let month: u32 = trimmed.parse().ok()?;
    if (1..=MAX_SELECTABLE_MONTH).contains(&month) {
        Some(MonthSelector {
            min: month,
            max: Some(month),
        })
    } else {
        None
    }
}

// =============================================================================
// Daily-Gain Distribution Bands
// =============================================================================

/// One band of the fixed daily-gain distribution
///
/// The five bands tile the whole number line with lower-inclusive,
/// upper-exclusive boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistributionBand {
    /// Display label
    pub label: &'static str,
    /// Lower bound (inclusive; may be negative infinity)
    pub lower: f64,
    /// Upper bound (exclusive; may be positive infinity)
    pub upper: f64,
    /// Display color (hex)
    pub color: &'static str,
}

impl DistributionBand {
    /// True if a daily-gain value falls inside this band
    pub fn contains(&self, gain: f64) -> bool {
        gain >= self.lower && gain < self.upper
    }
}

/// The fixed distribution band table (kg/day)
pub const DISTRIBUTION_BANDS: &[DistributionBand] = &[
    DistributionBand {
        label: "Very low (< 0.5)",
        lower: f64::NEG_INFINITY,
        upper: 0.5,
        color: "#ef4444",
    },
    DistributionBand {
        label: "Low (0.5 - 0.8)",
        lower: 0.5,
        upper: 0.8,
        color: "#f59e0b",
    },
    DistributionBand {
        label: "Average (0.8 - 1.2)",
        lower: 0.8,
        upper: 1.2,
        color: "#10b981",
    },
    DistributionBand {
        label: "High (1.2 - 1.5)",
        lower: 1.2,
        upper: 1.5,
        color: "#3b82f6",
    },
    DistributionBand {
        label: "Very high (> 1.5)",
        lower: 1.5,
        upper: f64::INFINITY,
        color: "#8b5cf6",
    },
];

// =============================================================================
// Chart Constants
// =============================================================================

/// Fixed chart color and layout values
pub mod chart {
    /// Box fill for the male group
    pub const MALE_BOX_COLOR: &str = "#3b82f6";

    /// Box fill for the female group
    pub const FEMALE_BOX_COLOR: &str = "#ec4899";

    /// Marker color for outlier points
    pub const OUTLIER_COLOR: &str = "#ef4444";

    /// Heat-map color endpoint for the lowest cell value (white)
    pub const HEAT_LOW: (u8, u8, u8) = (255, 255, 255);

    /// Heat-map color endpoint for the highest cell value (blue)
    pub const HEAT_HIGH: (u8, u8, u8) = (0, 128, 255);

    /// Axis tick and legend positions as fractions of the value range
    pub const TICK_RATIOS: &[f64] = &[0.0, 0.25, 0.5, 0.75, 1.0];

    /// Widest a box-plot box is allowed to draw, in pixels
    pub const BOX_MAX_WIDTH_PX: f64 = 60.0;

    /// Fraction of a group slot occupied by the box
    pub const BOX_SLOT_FRACTION: f64 = 0.6;

    /// Padding applied to each side of the shared value scale
    pub const SCALE_PADDING: f64 = 0.1;
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Round a value to a fixed number of decimal places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
