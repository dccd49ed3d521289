//! Multi-format weighing-date parsing
//!
//! Dates arrive in whatever shape the sheet's author (or their spreadsheet
//! software) produced: numeric day serials, three delimited layouts, or
//! free-form text. Parsing is an ordered list of named strategies applied
//! in a fixed priority order; the first strategy that yields a calendar
//! date wins and a row whose date matches none of them is unusable, not an
//! error.
//!
//! Strategy order:
//! 1. Spreadsheet day serial (purely numeric, more than 4 digits), anchored
//!    at "day 1 = Jan 1, 1900" with a two-day correction for the historical
//!    1900 leap-year-bug convention
//! 2. `D/M/YYYY`
//! 3. `YYYY-M-D`
//! 4. `D-M-YYYY`
//! 5. A small set of generic fallback formats, accepted only when the
//!    parsed year is after 1990

use chrono::{Datelike, Duration, NaiveDate};
use regex::Regex;

use crate::app::models::RawValue;
use crate::constants::{
    FALLBACK_DATE_FORMATS, FALLBACK_MIN_YEAR, SERIAL_DAY_CORRECTION, SERIAL_EPOCH,
    SERIAL_MIN_DIGITS,
};

/// Ordered date-parsing strategies with pre-compiled patterns
#[derive(Debug)]
pub struct DateParser {
    slash_dmy: Regex,
    dash_ymd: Regex,
    dash_dmy: Regex,
}

impl DateParser {
    /// Compile the delimited-format patterns
    pub fn new() -> Self {
        Self {
            slash_dmy: Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").expect("valid pattern"),
            dash_ymd: Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").expect("valid pattern"),
            dash_dmy: Regex::new(r"^(\d{1,2})-(\d{1,2})-(\d{4})$").expect("valid pattern"),
        }
    }

    /// Parse a raw cell into a calendar date
    ///
    /// Returns `None` when no strategy matches; the caller must treat that
    /// as an unusable record rather than a fatal condition.
    pub fn parse(&self, value: &RawValue) -> Option<NaiveDate> {
        if value.is_empty() {
            return None;
        }

        let text = value.display();

        if let Some(date) = parse_serial(&text) {
            return Some(date);
        }

        if let Some(date) = self.parse_delimited(&text) {
            return Some(date);
        }

        parse_fallback(&text)
    }

    /// Try the three delimited patterns in priority order
    fn parse_delimited(&self, text: &str) -> Option<NaiveDate> {
        if let Some(caps) = self.slash_dmy.captures(text) {
            return date_from_captures(&caps, 3, 2, 1);
        }
        if let Some(caps) = self.dash_ymd.captures(text) {
            return date_from_captures(&caps, 1, 2, 3);
        }
        if let Some(caps) = self.dash_dmy.captures(text) {
            return date_from_captures(&caps, 3, 2, 1);
        }
        None
    }
}

impl Default for DateParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a date from regex captures at the given year/month/day positions
///
/// A calendar-invalid combination (month 13, day 32) fails this strategy so
/// the remaining strategies still get a chance at the text.
fn date_from_captures(
    caps: &regex::Captures<'_>,
    year_at: usize,
    month_at: usize,
    day_at: usize,
) -> Option<NaiveDate> {
    let year: i32 = caps.get(year_at)?.as_str().parse().ok()?;
    let month: u32 = caps.get(month_at)?.as_str().parse().ok()?;
    let day: u32 = caps.get(day_at)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Interpret purely numeric text with more than 4 digits as a day serial
fn parse_serial(text: &str) -> Option<NaiveDate> {
    if text.len() < SERIAL_MIN_DIGITS || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let serial: i64 = text.parse().ok()?;
    let (year, month, day) = SERIAL_EPOCH;
    let epoch = NaiveDate::from_ymd_opt(year, month, day)?;
    let offset = Duration::try_days(serial - SERIAL_DAY_CORRECTION)?;
    epoch.checked_add_signed(offset)
}

/// Last-resort generic parse, trusted only for plausibly modern years
fn parse_fallback(text: &str) -> Option<NaiveDate> {
    FALLBACK_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .filter(|date| date.year() > FALLBACK_MIN_YEAR)
}
