/// First Bikram Sambat year covered by the calendar table (inclusive)
pub const MIN_BS_YEAR: u16 = 2000;
/// Last Bikram Sambat year covered by the calendar table (inclusive)
pub const MAX_BS_YEAR: u16 = 2100;

/// First Gregorian year accepted for AD to BS conversion (inclusive)
pub const MIN_AD_YEAR: u16 = 1943;
/// Last Gregorian year accepted for AD to BS conversion (inclusive)
pub const MAX_AD_YEAR: u16 = 2043;

/// Largest Gregorian year an `EnglishDate` can hold
pub const MAX_GREGORIAN_YEAR: u16 = 9999;

/// Maximum valid month
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January / Baishakh
pub const FIRST_MONTH: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December / Chaitra
pub const LAST_MONTH: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// BS side of the reference point: 1 Baishakh 2000
pub const BS_REFERENCE: (u16, u8, u8) = (2000, 1, 1);
/// AD side of the reference point: 13 April 1943
pub const AD_REFERENCE: (u16, u8, u8) = (1943, 4, 13);
/// Day of week of the reference point (0 = Sunday); 13 April 1943 was a Tuesday
pub const REFERENCE_WEEKDAY: u8 = 2;

/// Days in a week
pub(crate) const DAYS_PER_WEEK: i64 = 7;

/// Bikram Sambat month names, Baishakh first
pub const BS_MONTH_NAMES: [&str; 12] = [
    "Baishakh", "Jestha", "Ashadh", "Shrawan", "Bhadra", "Ashwin", "Kartik", "Mangsir", "Poush",
    "Magh", "Falgun", "Chaitra",
];

/// Gregorian month names, January first
pub const AD_MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday names, Sunday first
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
