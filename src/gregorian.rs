//! Gregorian (AD) calendar rules.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_GREGORIAN_YEAR, MAX_MONTH,
};
use crate::types::{Calendar, Month};
use crate::DateError;

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

pub const fn days_in_year(year: u16) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Month length for a year anywhere in the proleptic range `1..=MAX_GREGORIAN_YEAR`.
///
/// This is the bound the day walk uses, so stepping past it fails instead of
/// wrapping.
pub(crate) fn month_length(year: u16, month: u8) -> Result<u8, DateError> {
    if year == 0 || year > MAX_GREGORIAN_YEAR {
        return Err(DateError::OutOfRange {
            calendar: Calendar::Ad,
            year,
            min: 1,
            max: MAX_GREGORIAN_YEAR,
        });
    }
    let month = Month::new(month)?;
    Ok(days_in_month(year, month.get()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        u16,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        1944,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1943,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2100,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
            TestCase {
                year:        2400,
                is_leap:     true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap { "leap year" } else { "not leap year" }
            );
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29, "Century year divisible by 400");
        assert_eq!(days_in_month(1900, 2), 28, "Century year not divisible by 400");
    }

    #[test]
    fn test_days_in_month_fixed_lengths() {
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(days_in_month(2023, month), 31, "Month {month} should have 31 days");
        }
        for month in [4, 6, 9, 11] {
            assert_eq!(days_in_month(2023, month), 30, "Month {month} should have 30 days");
        }
    }

    #[test]
    fn test_days_in_year_matches_month_sum() {
        for year in [1943, 1944, 2000, 2023, 2024, 2100] {
            let total: u16 = (1..=12).map(|m| u16::from(days_in_month(year, m))).sum();
            assert_eq!(days_in_year(year), total, "Year {year}");
        }
    }

    #[test]
    fn test_month_length_bounds() {
        assert_eq!(month_length(1, 1), Ok(31));
        assert_eq!(month_length(9999, 12), Ok(31));
        assert_eq!(month_length(2024, 2), Ok(29));
        assert!(month_length(0, 1).unwrap_err().is_range_error());
        assert!(month_length(10000, 1).unwrap_err().is_range_error());
        assert_eq!(month_length(2024, 13), Err(DateError::InvalidMonth(13)));
    }
}
