//! Gregorian to Bikram Sambat (BS) date conversion over an embedded month table.
//!
//! BS month lengths vary from year to year, so conversions walk a per-year
//! table away from a single fixed anchor (2023-04-14 AD = 2080-01-01 BS)
//! instead of applying a closed-form rule.

mod anchor;
mod calendar;
mod consts;
mod error;
mod prelude;
pub mod render;
mod table;
mod types;

pub use anchor::ReferenceAnchor;
pub use calendar::Calendar;
pub use chrono::{NaiveDate, Weekday};
pub use consts::*;
pub use error::OutOfRange;
pub use render::Renderer;
pub use table::CalendarTable;
pub use types::{Day, Month};

use crate::prelude::*;
use std::str::FromStr;

/// A day in the Bikram Sambat calendar.
///
/// Only constructed through a [`CalendarTable`] (directly or via
/// [`Calendar`]), so the day never exceeds its month's length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year", "month.get()", "day.get()")]
pub struct BsDate {
    year: u16,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "{_0}")]
    OutOfRange(OutOfRange),
}

impl std::error::Error for ParseError {}

impl From<OutOfRange> for ParseError {
    fn from(err: OutOfRange) -> Self {
        Self::OutOfRange(err)
    }
}

impl BsDate {
    /// Parts already validated against a table
    pub(crate) const fn from_parts(year: u16, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Creates a date, validating every component against `table`
    ///
    /// # Errors
    /// Returns `OutOfRange` for the first component outside the table.
    pub fn new(year: u16, month: u8, day: u8, table: &CalendarTable) -> Result<Self, OutOfRange> {
        let year = table.check_year(i32::from(year))?;
        let month = Month::new(month)?;
        let day = table.day(year, month, i32::from(day))?;
        Ok(Self::from_parts(year, month, day))
    }

    /// Parses `YYYY-MM-DD` and validates it against `table`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidFormat` for malformed text and
    /// `ParseError::OutOfRange` for a date the table does not contain.
    pub fn parse(s: &str, table: &CalendarTable) -> Result<Self, ParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s)",
                parts.len()
            )));
        };

        let year = table.check_year(Self::parse_component(year)?)?;
        let month = Month::from_i32(Self::parse_component(month)?)?;
        let day = table.day(year, month, Self::parse_component(day)?)?;
        Ok(Self::from_parts(year, month, day))
    }

    fn parse_component(s: &str) -> Result<i32, ParseError> {
        s.parse::<i32>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    /// Returns the BS year
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the month (1-based) as u8
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of month as u8
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Transliterated name of the month, e.g. `Baisakh`
    pub const fn month_name(&self) -> &'static str {
        self.month.name()
    }
}

impl FromStr for BsDate {
    type Err = ParseError;

    /// Parses against the embedded 2070..=2090 table
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &CalendarTable::STANDARD)
    }
}

impl serde::Serialize for BsDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for BsDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
