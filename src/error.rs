//! Error type shared by validation, table lookup, conversion and parsing.

use crate::types::Calendar;

/// Every fallible operation in this crate reports one of these.
///
/// Validation runs before any arithmetic, so a returned error always means no
/// date was produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// A year outside the supported range of its calendar.
    #[error("{calendar} year {year} is out of range (must be {min}-{max})")]
    OutOfRange {
        calendar: Calendar,
        year:     u16,
        min:      u16,
        max:      u16,
    },

    /// A month outside 1-12.
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u8),

    /// A day outside the length of the resolved month.
    #[error("Invalid day {day} for {month_name} {year} {calendar} (must be 1-{max})")]
    InvalidDay {
        calendar:   Calendar,
        year:       u16,
        month_name: &'static str,
        day:        u8,
        max:        u8,
    },

    /// Input text that is not a `YYYY-MM-DD` date.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Empty date string")]
    EmptyInput,
}

impl DateError {
    /// Builds the range error for `year` against the supported range of `calendar`.
    pub(crate) const fn out_of_range(calendar: Calendar, year: u16) -> Self {
        let (min, max) = calendar.year_bounds();
        Self::OutOfRange {
            calendar,
            year,
            min,
            max,
        }
    }

    /// True for errors caused by a year outside the supported range.
    pub const fn is_range_error(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}
