//! Constructors for dates known to be valid, shared by the unit tests.

use crate::{EnglishDate, NepaliDate};

pub fn bs(year: u16, month: u8, day: u8) -> NepaliDate {
    NepaliDate::new(year, month, day)
        .unwrap_or_else(|err| panic!("test BS date {year}-{month:02}-{day:02} is invalid: {err}"))
}

pub fn ad(year: u16, month: u8, day: u8) -> EnglishDate {
    EnglishDate::new(year, month, day)
        .unwrap_or_else(|err| panic!("test AD date {year}-{month:02}-{day:02} is invalid: {err}"))
}
