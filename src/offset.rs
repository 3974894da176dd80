//! Day offsets from the reference point, and the month walk that turns an
//! offset back into a date.
//!
//! Both calendars share the same arithmetic. They differ only in where month
//! lengths come from: the BS table or the Gregorian rules.

use crate::consts::{AD_REFERENCE, BS_REFERENCE, FIRST_MONTH, LAST_MONTH, MAX_GREGORIAN_YEAR};
use crate::types::{Calendar, Month};
use crate::{DateError, gregorian, table};

/// A `(year, month, day)` triple before it is wrapped in a date type.
pub(crate) type Ymd = (u16, u8, u8);

/// Month length source for `calendar`.
pub(crate) fn month_length(calendar: Calendar, year: u16, month: u8) -> Result<u8, DateError> {
    match calendar {
        Calendar::Ad => gregorian::month_length(year, month),
        Calendar::Bs => table::days_in_month(year, month),
    }
}

/// The date in `calendar` that corresponds to the shared reference point.
pub(crate) const fn reference(calendar: Calendar) -> Ymd {
    match calendar {
        Calendar::Ad => AD_REFERENCE,
        Calendar::Bs => BS_REFERENCE,
    }
}

/// Signed number of days from the reference point of `calendar` to the given date.
///
/// The day is not checked against the month length; callers that need a
/// real date validate it first.
///
/// # Errors
/// Returns `DateError::InvalidMonth` for a month outside 1-12 and
/// `DateError::OutOfRange` when the year has no month lengths (outside the BS
/// table, or outside AD 1-9999).
pub fn offset_from_reference(
    calendar: Calendar,
    year: u16,
    month: u8,
    day: u8,
) -> Result<i64, DateError> {
    let month = Month::new(month)?;
    offset_between(reference(calendar), (year, month.get(), day), |y, m| {
        month_length(calendar, y, m)
    })
}

fn offset_between<F>(reference: Ymd, target: Ymd, month_length: F) -> Result<i64, DateError>
where
    F: Fn(u16, u8) -> Result<u8, DateError>,
{
    let (ref_year, ref_month, ref_day) = reference;
    let (year, month, day) = target;

    // The target month has to exist even when no whole year is summed below.
    month_length(year, month)?;

    let days_before = |y: u16, m: u8| -> Result<i64, DateError> {
        (FIRST_MONTH..m).map(|before| month_length(y, before).map(i64::from)).sum()
    };
    let year_length = |y: u16| days_before(y, LAST_MONTH + 1);

    let mut offset = 0;
    for y in ref_year..year {
        offset += year_length(y)?;
    }
    for y in year..ref_year {
        offset -= year_length(y)?;
    }
    offset += days_before(year, month)? - days_before(ref_year, ref_month)?;
    offset += i64::from(day) - i64::from(ref_day);
    Ok(offset)
}

/// Moves `offset` days from `start` in `calendar`, forward for positive
/// offsets and backward for negative ones, one month at a time.
///
/// Fails with the month length source's error as soon as the walk needs a
/// month it has no length for.
pub(crate) fn shift(calendar: Calendar, start: Ymd, offset: i64) -> Result<Ymd, DateError> {
    let (mut year, mut month, day) = start;
    // Zero based day within (year, month); out of 0..length until the walk settles.
    let Some(mut position) = (i64::from(day) - 1).checked_add(offset) else {
        return Err(beyond_walk(calendar, offset));
    };

    while position < 0 {
        (year, month) = previous_month(year, month);
        position += i64::from(month_length(calendar, year, month)?);
    }
    loop {
        let length = i64::from(month_length(calendar, year, month)?);
        if position < length {
            break;
        }
        position -= length;
        (year, month) = next_month(year, month);
    }

    // position is in 0..length and length is at most 32
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let day = position as u8 + 1;
    Ok((year, month, day))
}

/// Error for an offset too large to even start walking: the result lies past
/// every year `calendar` has month lengths for.
pub(crate) fn beyond_walk(calendar: Calendar, offset: i64) -> DateError {
    let (min, max) = match calendar {
        Calendar::Ad => (1, MAX_GREGORIAN_YEAR),
        Calendar::Bs => calendar.year_bounds(),
    };
    DateError::OutOfRange {
        calendar,
        year: if offset.is_negative() { u16::MIN } else { u16::MAX },
        min,
        max,
    }
}

const fn next_month(year: u16, month: u8) -> (u16, u8) {
    if month == LAST_MONTH {
        (year.saturating_add(1), FIRST_MONTH)
    } else {
        (year, month + 1)
    }
}

const fn previous_month(year: u16, month: u8) -> (u16, u8) {
    if month == FIRST_MONTH {
        (year.saturating_sub(1), LAST_MONTH)
    } else {
        (year, month - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bs_shift(start: Ymd, offset: i64) -> Result<Ymd, DateError> {
        shift(Calendar::Bs, start, offset)
    }

    fn ad_shift(start: Ymd, offset: i64) -> Result<Ymd, DateError> {
        shift(Calendar::Ad, start, offset)
    }

    #[test]
    fn test_reference_offsets_are_zero() {
        assert_eq!(offset_from_reference(Calendar::Bs, 2000, 1, 1), Ok(0));
        assert_eq!(offset_from_reference(Calendar::Ad, 1943, 4, 13), Ok(0));
    }

    #[test]
    fn test_offset_cases() {
        struct TestCase {
            calendar:    Calendar,
            date:        Ymd,
            offset:      i64,
            description: &'static str,
        }

        let cases = [
            TestCase {
                calendar:    Calendar::Bs,
                date:        (2000, 1, 30),
                offset:      29,
                description: "last day of Baishakh 2000",
            },
            TestCase {
                calendar:    Calendar::Bs,
                date:        (2000, 2, 1),
                offset:      30,
                description: "first month boundary",
            },
            TestCase {
                calendar:    Calendar::Bs,
                date:        (2001, 1, 1),
                offset:      365,
                description: "one whole BS year",
            },
            TestCase {
                calendar:    Calendar::Ad,
                date:        (1943, 5, 1),
                offset:      18,
                description: "later month of the reference year",
            },
            TestCase {
                calendar:    Calendar::Ad,
                date:        (1944, 4, 13),
                offset:      366,
                description: "crosses 29 February 1944",
            },
            TestCase {
                calendar:    Calendar::Ad,
                date:        (1943, 1, 1),
                offset:      -102,
                description: "earlier in the reference year",
            },
            TestCase {
                calendar:    Calendar::Ad,
                date:        (1942, 4, 13),
                offset:      -365,
                description: "year before the reference",
            },
        ];

        for case in &cases {
            let (year, month, day) = case.date;
            assert_eq!(
                offset_from_reference(case.calendar, year, month, day),
                Ok(case.offset),
                "{} ({} {year}-{month:02}-{day:02})",
                case.description,
                case.calendar
            );
        }
    }

    #[test]
    fn test_offset_rejects_unknown_years_and_months() {
        assert!(offset_from_reference(Calendar::Bs, 1999, 12, 1)
            .unwrap_err()
            .is_range_error());
        assert!(offset_from_reference(Calendar::Bs, 2101, 1, 1)
            .unwrap_err()
            .is_range_error());
        assert_eq!(
            offset_from_reference(Calendar::Bs, 2050, 13, 1),
            Err(DateError::InvalidMonth(13))
        );
        assert!(offset_from_reference(Calendar::Ad, 0, 1, 1).is_err());
    }

    #[test]
    fn test_bs_year_sums_match_offsets() {
        for year in 2000..2100 {
            let this = offset_from_reference(Calendar::Bs, year, 1, 1).unwrap();
            let next = offset_from_reference(Calendar::Bs, year + 1, 1, 1).unwrap();
            assert_eq!(
                next - this,
                i64::from(table::days_in_year(year).unwrap()),
                "BS {year}"
            );
        }
    }

    #[test]
    fn test_shift_forward_and_backward() {
        assert_eq!(bs_shift((2000, 1, 1), 0), Ok((2000, 1, 1)));
        assert_eq!(bs_shift((2000, 1, 1), 29), Ok((2000, 1, 30)));
        assert_eq!(bs_shift((2000, 1, 1), 30), Ok((2000, 2, 1)));
        assert_eq!(bs_shift((2000, 1, 1), 365), Ok((2001, 1, 1)));
        assert_eq!(bs_shift((2001, 1, 1), -1), Ok((2000, 12, 31)));
        assert_eq!(bs_shift((2050, 1, 1), -1), Ok((2049, 12, 30)));
        assert_eq!(bs_shift((2050, 3, 15), -15), Ok((2050, 2, 32)));
    }

    #[test]
    fn test_shift_leaving_the_table_fails() {
        let err = bs_shift((2000, 1, 1), -1).unwrap_err();
        assert_eq!(err, DateError::out_of_range(Calendar::Bs, 1999));

        let err = bs_shift((2100, 12, 30), 1).unwrap_err();
        assert_eq!(err, DateError::out_of_range(Calendar::Bs, 2101));
    }

    #[test]
    fn test_ad_shift_respects_leap_years() {
        assert_eq!(ad_shift((2024, 2, 28), 1), Ok((2024, 2, 29)));
        assert_eq!(ad_shift((2023, 2, 28), 1), Ok((2023, 3, 1)));
        assert_eq!(ad_shift((2024, 3, 1), -1), Ok((2024, 2, 29)));
        assert_eq!(ad_shift((1943, 4, 13), 366 + 365), Ok((1945, 4, 13)));
        assert_eq!(ad_shift((2000, 1, 1), -1), Ok((1999, 12, 31)));
        assert!(ad_shift((1, 1, 1), -1).unwrap_err().is_range_error());
        assert!(ad_shift((9999, 12, 31), 1).unwrap_err().is_range_error());
    }

    #[test]
    fn test_shift_with_extreme_offsets_fails_cleanly() {
        for start in [(1943, 4, 13), (2025, 9, 30), (9999, 12, 31)] {
            let err = ad_shift(start, i64::MAX).unwrap_err();
            assert!(err.is_range_error(), "AD {start:?} + i64::MAX gave {err}");
            assert!(ad_shift(start, i64::MIN).unwrap_err().is_range_error());
        }
        assert!(bs_shift((2050, 6, 15), i64::MAX).unwrap_err().is_range_error());
        assert!(bs_shift((2050, 6, 15), i64::MIN).unwrap_err().is_range_error());
        assert_eq!(
            beyond_walk(Calendar::Ad, 1),
            DateError::OutOfRange {
                calendar: Calendar::Ad,
                year:     u16::MAX,
                min:      1,
                max:      MAX_GREGORIAN_YEAR,
            }
        );
    }

    #[test]
    fn test_shift_inverts_offset() {
        for offset in [-400, -31, -1, 0, 1, 59, 365, 10_000, 36_000] {
            let ad = ad_shift(AD_REFERENCE, offset).unwrap();
            assert_eq!(
                offset_from_reference(Calendar::Ad, ad.0, ad.1, ad.2),
                Ok(offset),
                "AD offset {offset}"
            );
        }
        for offset in [0, 1, 31, 365, 10_000, 36_000] {
            let bs = bs_shift(BS_REFERENCE, offset).unwrap();
            assert_eq!(
                offset_from_reference(Calendar::Bs, bs.0, bs.1, bs.2),
                Ok(offset),
                "BS offset {offset}"
            );
        }
    }
}
