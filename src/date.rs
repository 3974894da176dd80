use std::str::FromStr;

use serde::{Deserialize, Serialize, ser::SerializeStruct};

use crate::consts::{AD_MONTH_NAMES, DATE_SEPARATOR, MIN_BS_YEAR, MIN_DAY};
use crate::offset::{self, Ymd};
use crate::prelude::*;
use crate::types::{Calendar, Month, Weekday};
use crate::{DateError, gregorian, table};

/// A date in the Bikram Sambat calendar, BS 2000 through BS 2100.
///
/// Only obtainable through validation or conversion, so every value names a
/// real day in the calendar table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{} {} {} BS ({})", day, "month.bs_name()", year, weekday)]
pub struct NepaliDate {
    year:    u16,
    month:   Month,
    day:     u8,
    weekday: Weekday,
}

/// A date in the proleptic Gregorian calendar, AD 1 through AD 9999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{} {} {} AD ({})", day, "month.ad_name()", year, weekday)]
pub struct EnglishDate {
    year:    u16,
    month:   Month,
    day:     u8,
    weekday: Weekday,
}

impl NepaliDate {
    /// Creates a BS date after checking year, month and day, in that order.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` for a year outside 2000-2100,
    /// `DateError::InvalidMonth` for a month outside 1-12 and
    /// `DateError::InvalidDay` for a day past the end of the month.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        if !Calendar::Bs.contains_year(year) {
            return Err(DateError::out_of_range(Calendar::Bs, year));
        }
        let month = Month::new(month)?;
        table::validate_day(year, month, day)?;
        let offset = offset::offset_from_reference(Calendar::Bs, year, month.get(), day)?;
        Ok(Self {
            year,
            month,
            day,
            weekday: Weekday::from_reference_offset(offset),
        })
    }

    /// The BS date `offset` days after 1 Baishakh 2000.
    pub(crate) fn from_reference_offset(offset: i64) -> Result<Self, DateError> {
        let (year, month, day) = offset::shift(Calendar::Bs, offset::reference(Calendar::Bs), offset)?;
        Ok(Self {
            year,
            month: Month::new(month)?,
            day,
            weekday: Weekday::from_reference_offset(offset),
        })
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// BS month name, e.g. "Ashwin"
    pub const fn month_name(&self) -> &'static str {
        self.month.bs_name()
    }

    /// English weekday name, e.g. "Tuesday"
    pub const fn day_name(&self) -> &'static str {
        self.weekday.name()
    }

    /// `YYYY-MM-DD`
    pub fn iso(&self) -> String {
        format_iso((self.year, self.month.get(), self.day))
    }

    /// Days since 1 Baishakh 2000.
    ///
    /// # Errors
    /// Never fails for a constructed date; the `Result` carries table lookups.
    pub fn reference_offset(&self) -> Result<i64, DateError> {
        offset::offset_from_reference(Calendar::Bs, self.year, self.month.get(), self.day)
    }

    /// The Gregorian date of the same day.
    ///
    /// # Errors
    /// Propagates table lookup errors; none occur for a constructed date.
    pub fn to_english(&self) -> Result<EnglishDate, DateError> {
        EnglishDate::from_reference_offset(self.reference_offset()?)
    }

    /// The BS date `days` days later (earlier when negative).
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result falls outside BS 2000-2100.
    pub fn add_days(&self, days: i64) -> Result<Self, DateError> {
        let offset = self
            .reference_offset()?
            .checked_add(days)
            .ok_or_else(|| offset::beyond_walk(Calendar::Bs, days))?;
        Self::from_reference_offset(offset)
    }
}

impl EnglishDate {
    /// Creates a Gregorian date after checking year, month and day, in that order.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` for a year outside 1-9999,
    /// `DateError::InvalidMonth` for a month outside 1-12 and
    /// `DateError::InvalidDay` for a day past the end of the month.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let max = gregorian::month_length(year, month)?;
        let month = Month::new(month)?;
        if day < MIN_DAY || day > max {
            return Err(DateError::InvalidDay {
                calendar: Calendar::Ad,
                year,
                month_name: AD_MONTH_NAMES[month.index()],
                day,
                max,
            });
        }
        let offset = offset::offset_from_reference(Calendar::Ad, year, month.get(), day)?;
        Ok(Self {
            year,
            month,
            day,
            weekday: Weekday::from_reference_offset(offset),
        })
    }

    /// The Gregorian date `offset` days after 13 April 1943.
    pub(crate) fn from_reference_offset(offset: i64) -> Result<Self, DateError> {
        let (year, month, day) = offset::shift(Calendar::Ad, offset::reference(Calendar::Ad), offset)?;
        Ok(Self {
            year,
            month: Month::new(month)?,
            day,
            weekday: Weekday::from_reference_offset(offset),
        })
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Gregorian month name, e.g. "September"
    pub const fn month_name(&self) -> &'static str {
        self.month.ad_name()
    }

    /// English weekday name, e.g. "Tuesday"
    pub const fn day_name(&self) -> &'static str {
        self.weekday.name()
    }

    /// `YYYY-MM-DD`
    pub fn iso(&self) -> String {
        format_iso((self.year, self.month.get(), self.day))
    }

    /// Days since 13 April 1943, negative before it.
    ///
    /// # Errors
    /// Never fails for a constructed date.
    pub fn reference_offset(&self) -> Result<i64, DateError> {
        offset::offset_from_reference(Calendar::Ad, self.year, self.month.get(), self.day)
    }

    /// The BS date of the same day.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` for a year outside AD 1943-2043, or for
    /// a 1943 date before 13 April whose BS equivalent (BS 1999) precedes the
    /// table. Both are reported before any walk starts.
    pub fn to_nepali(&self) -> Result<NepaliDate, DateError> {
        if !Calendar::Ad.contains_year(self.year) {
            return Err(DateError::out_of_range(Calendar::Ad, self.year));
        }
        let offset = self.reference_offset()?;
        if offset < 0 {
            return Err(DateError::out_of_range(Calendar::Bs, MIN_BS_YEAR - 1));
        }
        NepaliDate::from_reference_offset(offset)
    }

    /// The Gregorian date `days` days later (earlier when negative).
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result falls outside AD 1-9999.
    pub fn add_days(&self, days: i64) -> Result<Self, DateError> {
        let offset = self
            .reference_offset()?
            .checked_add(days)
            .ok_or_else(|| offset::beyond_walk(Calendar::Ad, days))?;
        Self::from_reference_offset(offset)
    }
}

fn format_iso((year, month, day): Ymd) -> String {
    format!("{year:04}{DATE_SEPARATOR}{month:02}{DATE_SEPARATOR}{day:02}")
}

/// Splits `YYYY-MM-DD` into numeric parts without range checks.
fn parse_iso(s: &str) -> Result<Ymd, DateError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(DateError::EmptyInput);
    }

    let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(DateError::InvalidFormat(format!(
            "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} part(s): {trimmed}",
            parts.len()
        )));
    };

    let year = year
        .parse::<u16>()
        .map_err(|_| DateError::InvalidFormat((*year).to_owned()))?;
    let month = month
        .parse::<u8>()
        .map_err(|_| DateError::InvalidFormat((*month).to_owned()))?;
    let day = day
        .parse::<u8>()
        .map_err(|_| DateError::InvalidFormat((*day).to_owned()))?;
    Ok((year, month, day))
}

impl FromStr for NepaliDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_iso(s)?;
        Self::new(year, month, day)
    }
}

impl FromStr for EnglishDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_iso(s)?;
        Self::new(year, month, day)
    }
}

impl TryFrom<(u16, u8, u8)> for NepaliDate {
    type Error = DateError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl TryFrom<(u16, u8, u8)> for EnglishDate {
    type Error = DateError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl From<NepaliDate> for (u16, u8, u8) {
    fn from(date: NepaliDate) -> Self {
        (date.year, date.month.get(), date.day)
    }
}

impl From<EnglishDate> for (u16, u8, u8) {
    fn from(date: EnglishDate) -> Self {
        (date.year, date.month.get(), date.day)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for EnglishDate {
    type Error = DateError;

    fn try_from(date: chrono::NaiveDate) -> Result<Self, Self::Error> {
        use crate::consts::MAX_GREGORIAN_YEAR;
        use chrono::Datelike;

        let year = u16::try_from(date.year())
            .ok()
            .filter(|year| *year <= MAX_GREGORIAN_YEAR)
            .ok_or_else(|| DateError::InvalidFormat(format!("Unsupported year: {}", date.year())))?;
        let month = u8::try_from(date.month()).map_err(|_| DateError::InvalidFormat(date.to_string()))?;
        let day = u8::try_from(date.day()).map_err(|_| DateError::InvalidFormat(date.to_string()))?;
        Self::new(year, month, day)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<EnglishDate> for chrono::NaiveDate {
    type Error = DateError;

    fn try_from(date: EnglishDate) -> Result<Self, Self::Error> {
        Self::from_ymd_opt(
            i32::from(date.year),
            u32::from(date.month.get()),
            u32::from(date.day),
        )
        .ok_or_else(|| DateError::InvalidFormat(date.iso()))
    }
}

/// Wire shape accepted when deserializing either date type.
#[derive(Deserialize)]
struct DateFields {
    year:  u16,
    month: u8,
    day:   u8,
}

fn serialize_date<S>(
    serializer: S,
    name: &'static str,
    (year, month, day): Ymd,
    month_name: &'static str,
    day_name: &'static str,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let mut state = serializer.serialize_struct(name, 5)?;
    state.serialize_field("year", &year)?;
    state.serialize_field("month", &month)?;
    state.serialize_field("day", &day)?;
    state.serialize_field("monthName", month_name)?;
    state.serialize_field("dayName", day_name)?;
    state.end()
}

impl Serialize for NepaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serialize_date(serializer, "NepaliDate", (*self).into(), self.month_name(), self.day_name())
    }
}

impl Serialize for EnglishDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serialize_date(serializer, "EnglishDate", (*self).into(), self.month_name(), self.day_name())
    }
}

impl<'de> Deserialize<'de> for NepaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let fields = DateFields::deserialize(deserializer)?;
        Self::new(fields.year, fields.month, fields.day).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for EnglishDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let fields = DateFields::deserialize(deserializer)?;
        Self::new(fields.year, fields.month, fields.day).map_err(serde::de::Error::custom)
    }
}
