use crate::consts::{
    AD_MONTH_NAMES, BS_MONTH_NAMES, DAYS_PER_WEEK, MAX_AD_YEAR, MAX_BS_YEAR, MAX_MONTH,
    MIN_AD_YEAR, MIN_BS_YEAR, REFERENCE_WEEKDAY, WEEKDAY_NAMES,
};
use crate::prelude::*;
use crate::DateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

/// The two calendar systems this crate converts between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Calendar {
    /// Gregorian (Anno Domini)
    #[display(fmt = "AD")]
    #[serde(rename = "AD")]
    Ad,
    /// Bikram Sambat
    #[display(fmt = "BS")]
    #[serde(rename = "BS")]
    Bs,
}

impl Calendar {
    /// Inclusive `(min, max)` of the years this calendar accepts for conversion.
    pub const fn year_bounds(self) -> (u16, u16) {
        match self {
            Self::Ad => (MIN_AD_YEAR, MAX_AD_YEAR),
            Self::Bs => (MIN_BS_YEAR, MAX_BS_YEAR),
        }
    }

    /// Whether `year` is inside the supported range.
    pub const fn contains_year(self, year: u16) -> bool {
        let (min, max) = self.year_bounds();
        year >= min && year <= max
    }

    /// Name of `month` in this calendar.
    pub const fn month_name(self, month: Month) -> &'static str {
        match self {
            Self::Ad => month.ad_name(),
            Self::Bs => month.bs_name(),
        }
    }
}

impl FromStr for Calendar {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("AD") {
            Ok(Self::Ad)
        } else if trimmed.eq_ignore_ascii_case("BS") {
            Ok(Self::Bs)
        } else if trimmed.is_empty() {
            Err(DateError::EmptyInput)
        } else {
            Err(DateError::InvalidFormat(format!("Unknown calendar: {trimmed}")))
        }
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Zero-based position, for indexing the name and length tables
    #[inline]
    pub(crate) const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }

    /// Bikram Sambat name (1 = Baishakh)
    pub const fn bs_name(self) -> &'static str {
        BS_MONTH_NAMES[self.index()]
    }

    /// Gregorian name (1 = January)
    pub const fn ad_name(self) -> &'static str {
        AD_MONTH_NAMES[self.index()]
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the week. Both calendars share the same seven-day cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    #[display(fmt = "Sunday")]
    Sunday,
    #[display(fmt = "Monday")]
    Monday,
    #[display(fmt = "Tuesday")]
    Tuesday,
    #[display(fmt = "Wednesday")]
    Wednesday,
    #[display(fmt = "Thursday")]
    Thursday,
    #[display(fmt = "Friday")]
    Friday,
    #[display(fmt = "Saturday")]
    Saturday,
}

impl Weekday {
    /// Weekday from its index, 0 = Sunday through 6 = Saturday.
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Sunday),
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            _ => None,
        }
    }

    /// Weekday of the date `offset` days after the reference point.
    pub(crate) const fn from_reference_offset(offset: i64) -> Self {
        match (REFERENCE_WEEKDAY as i64 + offset).rem_euclid(DAYS_PER_WEEK) {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }

    /// Index with Sunday = 0
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// English name
    pub const fn name(self) -> &'static str {
        WEEKDAY_NAMES[self as usize]
    }
}
