use crate::consts::{MAX_MONTH, MONTH_NAMES};
use crate::error::OutOfRange;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A BS month number guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `OutOfRange::Month` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, OutOfRange> {
        let non_zero = NonZeroU8::new(value).ok_or(OutOfRange::Month(i32::from(value)))?;
        if value > MAX_MONTH {
            return Err(OutOfRange::Month(i32::from(value)));
        }
        Ok(Self(non_zero))
    }

    /// Validates a month number coming from untyped input such as the command line
    ///
    /// # Errors
    /// Returns `OutOfRange::Month` if the value is not in `1..=12`.
    pub fn from_i32(value: i32) -> Result<Self, OutOfRange> {
        u8::try_from(value)
            .map_err(|_| OutOfRange::Month(value))
            .and_then(Self::new)
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Zero-based position of the month within the year
    #[inline]
    pub const fn index(self) -> usize {
        self.0.get() as usize - 1
    }

    /// Transliterated month name, e.g. `Baisakh`
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.index()]
    }

    /// Iterates Baisakh through Chaitra
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=MAX_MONTH).filter_map(|m| Self::new(m).ok())
    }
}

impl TryFrom<u8> for Month {
    type Error = OutOfRange;

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

/// A day-of-month value. Non-zero by construction; the upper bound depends on
/// the calendar table and is checked by [`crate::CalendarTable::day`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Wraps a day number already checked against its month length
    pub(crate) const fn new_unchecked(value: NonZeroU8) -> Self {
        Self(value)
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
