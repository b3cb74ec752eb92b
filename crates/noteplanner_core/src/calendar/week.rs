//! Week stamps for weekly note naming.
//!
//! # Responsibility
//! - Pair the ISO-8601 week number of a date with its calendar year.
//!
//! # Invariants
//! - The year is the calendar year of the stamped date, never the ISO
//!   week-year. Around year boundaries the two can disagree and the
//!   mismatch is carried into the weekly note name on purpose, so that a
//!   given day always maps to the same file.

use chrono::{Datelike, NaiveDate};

/// ISO week number plus calendar year, as used in `Week-<n>-<year>` names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekStamp {
    /// ISO-8601 week of year (1..=53); weeks start on Monday.
    pub week: u32,
    /// Calendar year of the stamped date.
    pub year: i32,
}

impl WeekStamp {
    /// Stamps `date` with its ISO week number and calendar year.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            week: date.iso_week().week(),
            year: date.year(),
        }
    }
}
