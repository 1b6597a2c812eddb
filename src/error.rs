use chrono::NaiveDate;

use crate::consts::MAX_MONTH;
use crate::types::Month;

/// Every way a date can fall outside what the calendar knows about.
///
/// This is the only failure kind of the conversion engine: a year, month or
/// day past the bounds of the month table, or a walk that would have to leave
/// the table to reach its target.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutOfRange {
    /// BS year outside the table window.
    #[error("Year out of range: {year} ({first}-{last} BS)")]
    Year { year: i32, first: u16, last: u16 },

    /// Month number outside `1..=12`.
    #[error("Invalid month: {0} (1-{max})", max = MAX_MONTH)]
    Month(i32),

    /// Day number past the table-defined length of its month.
    #[error("Invalid day {day} for {} {year} BS", .month.name())]
    Day { year: u16, month: Month, day: i32 },

    /// Year, month and day that do not form a Gregorian date.
    #[error("Invalid Gregorian date: {year:04}-{month:02}-{day:02}")]
    GregorianDay { year: i32, month: u32, day: u32 },

    /// Gregorian date whose BS equivalent lies outside the table window.
    #[error("Gregorian date {0} is outside the supported BS range")]
    Gregorian(NaiveDate),

    /// Month length outside the almanac bounds when building a table.
    #[error("Month length {days} for {year}-{month:02} BS is outside {min}-{max}")]
    MonthLength {
        year: u16,
        month: u8,
        days: u8,
        min: u8,
        max: u8,
    },

    /// Reference anchor that does not agree with its own table or weekday.
    #[error("Reference anchor {0} is inconsistent with the calendar table")]
    Anchor(String),
}
