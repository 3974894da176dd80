//! BS to AD and AD to BS conversion entry points.
//!
//! Both directions validate the whole input first, turn it into a day offset
//! from the shared reference point, then walk the other calendar forward or
//! backward by that many days.

use crate::types::Calendar;
use crate::{DateError, EnglishDate, NepaliDate};

/// Converts a Bikram Sambat date to its Gregorian equivalent.
///
/// # Errors
/// Returns `DateError::OutOfRange` for a year outside BS 2000-2100,
/// `DateError::InvalidMonth` for a month outside 1-12 and
/// `DateError::InvalidDay` for a day past the end of that BS month.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", err(level = "debug")))]
pub fn convert_bs_to_ad(year: u16, month: u8, day: u8) -> Result<EnglishDate, DateError> {
    NepaliDate::new(year, month, day)?.to_english()
}

/// Converts a Gregorian date to its Bikram Sambat equivalent.
///
/// The weekday of the result is the weekday of the input date.
///
/// # Errors
/// Returns `DateError::OutOfRange` for a year outside AD 1943-2043 (and for
/// 1943 dates before 13 April, which precede the BS table),
/// `DateError::InvalidMonth` for a month outside 1-12 and
/// `DateError::InvalidDay` for a day past the end of that Gregorian month.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", err(level = "debug")))]
pub fn convert_ad_to_bs(year: u16, month: u8, day: u8) -> Result<NepaliDate, DateError> {
    if !Calendar::Ad.contains_year(year) {
        return Err(DateError::out_of_range(Calendar::Ad, year));
    }
    EnglishDate::new(year, month, day)?.to_nepali()
}

/// Today's date on the host, in the Gregorian calendar.
///
/// # Errors
/// Fails only if the host clock reports a year outside AD 1-9999.
#[cfg(feature = "chrono")]
pub fn current_english_date() -> Result<EnglishDate, DateError> {
    EnglishDate::try_from(chrono::Local::now().date_naive())
}

/// Today's date on the host, in the Bikram Sambat calendar.
///
/// # Errors
/// Returns `DateError::OutOfRange` once the host date passes AD 2043.
#[cfg(feature = "chrono")]
pub fn current_nepali_date() -> Result<NepaliDate, DateError> {
    current_english_date()?.to_nepali()
}
