//! Conversion between the Bikram Sambat (Nepali) and Gregorian calendars.
//!
//! BS month lengths do not follow a rule, so conversion runs over a table of
//! month lengths for BS 2000 through BS 2100, anchored at
//! 1 Baishakh 2000 BS = 13 April 1943 AD.
//!
//! ```
//! use nepali_calendar::{convert_ad_to_bs, convert_bs_to_ad, format_english_date};
//!
//! let english = convert_bs_to_ad(2082, 6, 15).unwrap();
//! assert_eq!(format_english_date(&english), "30 September 2025 AD (Tuesday)");
//!
//! let nepali = convert_ad_to_bs(2025, 9, 30).unwrap();
//! assert_eq!(nepali.to_string(), "15 Ashwin 2082 BS (Tuesday)");
//! ```

mod consts;
mod convert;
mod date;
mod error;
mod gregorian;
mod offset;
mod prelude;
mod table;
mod types;

#[cfg(test)]
mod test_utils;

pub use consts::*;
#[cfg(feature = "chrono")]
pub use convert::{current_english_date, current_nepali_date};
pub use convert::{convert_ad_to_bs, convert_bs_to_ad};
pub use date::{EnglishDate, NepaliDate};
pub use error::DateError;
pub use gregorian::days_in_year as days_in_ad_year;
pub use offset::offset_from_reference;
pub use table::{days_in_year as days_in_bs_year, month_lengths};
pub use types::{Calendar, Month, Weekday};

/// Gregorian leap year test.
pub const fn is_leap_year_ad(year: u16) -> bool {
    gregorian::is_leap_year(year)
}

/// Days in Gregorian `month` of `year`.
///
/// # Errors
/// Returns `DateError::OutOfRange` for a year outside AD 1-9999 and
/// `DateError::InvalidMonth` for a month outside 1-12.
pub fn days_in_month_ad(year: u16, month: u8) -> Result<u8, DateError> {
    gregorian::month_length(year, month)
}

/// Days in BS `month` of `year`.
///
/// # Errors
/// Returns `DateError::OutOfRange` for a year outside BS 2000-2100 and
/// `DateError::InvalidMonth` for a month outside 1-12.
pub fn days_in_bs_month(year: u16, month: u8) -> Result<u8, DateError> {
    table::days_in_month(year, month)
}

/// Whether `year` is inside the range `calendar` converts.
pub const fn is_valid_year(year: u16, calendar: Calendar) -> bool {
    calendar.contains_year(year)
}

/// `"{day} {month name} {year} BS ({weekday})"`
pub fn format_nepali_date(date: &NepaliDate) -> String {
    date.to_string()
}

/// `"{day} {month name} {year} AD ({weekday})"`
pub fn format_english_date(date: &EnglishDate) -> String {
    date.to_string()
}
