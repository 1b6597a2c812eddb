use crate::consts::{BS_MONTH_DAYS, MAX_MONTH_DAYS, MIN_BS_YEAR, MIN_MONTH_DAYS, MONTHS_PER_YEAR};
use crate::error::OutOfRange;
use crate::types::{Day, Month};
use std::num::NonZeroU8;
use std::ops::RangeInclusive;

/// Month lengths for a contiguous window of BS years.
///
/// BS month lengths follow the almanac rather than a fixed rule, so every
/// supported year carries its own row of 12 day counts. Lookups outside the
/// window fail with [`OutOfRange`] instead of indexing past the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarTable {
    first_year: u16,
    years: &'static [[u8; MONTHS_PER_YEAR]],
}

impl CalendarTable {
    /// The embedded BS 2070..=2090 table
    pub const STANDARD: Self = Self {
        first_year: MIN_BS_YEAR,
        years: &BS_MONTH_DAYS,
    };

    /// Builds a table whose first row describes `first_year`.
    ///
    /// # Errors
    /// Returns `OutOfRange::MonthLength` if any month is shorter than
    /// `MIN_MONTH_DAYS` or longer than `MAX_MONTH_DAYS`, and `OutOfRange::Year`
    /// if the window would run past `u16::MAX`.
    pub fn new(
        first_year: u16,
        years: &'static [[u8; MONTHS_PER_YEAR]],
    ) -> Result<Self, OutOfRange> {
        let span = u16::try_from(years.len()).unwrap_or(u16::MAX);
        if first_year.checked_add(span).is_none() {
            return Err(OutOfRange::Year {
                year: i32::from(first_year),
                first: first_year,
                last: u16::MAX,
            });
        }

        for (year, row) in (first_year..).zip(years) {
            for (month, &days) in (1..).zip(row) {
                if !(MIN_MONTH_DAYS..=MAX_MONTH_DAYS).contains(&days) {
                    return Err(OutOfRange::MonthLength {
                        year,
                        month,
                        days,
                        min: MIN_MONTH_DAYS,
                        max: MAX_MONTH_DAYS,
                    });
                }
            }
        }

        Ok(Self { first_year, years })
    }

    /// First supported year (inclusive)
    pub const fn first_year(&self) -> u16 {
        self.first_year
    }

    /// Last supported year (inclusive). Equal to `first_year - 1` for an empty table.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn last_year(&self) -> u16 {
        // `new` guarantees first_year + len fits in u16
        (self.first_year as usize + self.years.len()).saturating_sub(1) as u16
    }

    /// Every supported year, in order
    pub const fn years(&self) -> RangeInclusive<u16> {
        self.first_year..=self.last_year()
    }

    /// Whether `year` has a row in this table
    pub fn contains(&self, year: u16) -> bool {
        self.row(year).is_some()
    }

    /// Checks a year coming from untyped input against the window.
    ///
    /// # Errors
    /// Returns `OutOfRange::Year` if `year` has no row in this table.
    pub fn check_year(&self, year: i32) -> Result<u16, OutOfRange> {
        u16::try_from(year)
            .ok()
            .filter(|&y| self.contains(y))
            .ok_or_else(|| self.year_error(year))
    }

    /// The 12 month lengths of `year`, Baisakh first.
    ///
    /// # Errors
    /// Returns `OutOfRange::Year` if `year` has no row in this table.
    pub fn months(&self, year: u16) -> Result<&'static [u8; MONTHS_PER_YEAR], OutOfRange> {
        self.row(year).ok_or_else(|| self.year_error(i32::from(year)))
    }

    /// Day count of `month` (1-based) in `year`.
    ///
    /// # Errors
    /// Returns `OutOfRange::Year` for a year outside the window and
    /// `OutOfRange::Month` for a month outside `1..=12`.
    pub fn month_length(&self, year: u16, month: u8) -> Result<u8, OutOfRange> {
        let month = Month::new(month)?;
        Ok(self.months(year)?[month.index()])
    }

    /// Total day count of `year`.
    ///
    /// # Errors
    /// Returns `OutOfRange::Year` if `year` has no row in this table.
    pub fn year_length(&self, year: u16) -> Result<u32, OutOfRange> {
        Ok(self.months(year)?.iter().copied().map(u32::from).sum())
    }

    /// Validates `day` against the length of `month` in `year`.
    ///
    /// # Errors
    /// Returns `OutOfRange::Year` for a year outside the window and
    /// `OutOfRange::Day` if `day` is 0, negative or past the month's end.
    pub fn day(&self, year: u16, month: Month, day: i32) -> Result<Day, OutOfRange> {
        let max = self.month_length(year, month.get())?;
        u8::try_from(day)
            .ok()
            .filter(|&d| d <= max)
            .and_then(NonZeroU8::new)
            .map(Day::new_unchecked)
            .ok_or(OutOfRange::Day { year, month, day })
    }

    pub(crate) const fn year_error(&self, year: i32) -> OutOfRange {
        OutOfRange::Year {
            year,
            first: self.first_year,
            last: self.last_year(),
        }
    }

    fn row(&self, year: u16) -> Option<&'static [u8; MONTHS_PER_YEAR]> {
        let index = year.checked_sub(self.first_year)?;
        self.years.get(usize::from(index))
    }
}

impl Default for CalendarTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MAX_BS_YEAR, MIN_BS_YEAR};

    static SHORT: [[u8; MONTHS_PER_YEAR]; 2] = [
        [30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30],
        [31, 31, 31, 31, 31, 31, 29, 29, 29, 29, 29, 29],
    ];

    static BAD: [[u8; MONTHS_PER_YEAR]; 1] = [[31, 31, 31, 33, 31, 31, 29, 30, 30, 29, 30, 30]];

    #[test]
    fn test_standard_window() {
        let table = CalendarTable::STANDARD;
        assert_eq!(table.first_year(), MIN_BS_YEAR);
        assert_eq!(table.last_year(), MAX_BS_YEAR);
        assert_eq!(table.years().count(), 21);
    }

    #[test]
    fn test_standard_table_is_well_formed() {
        let rebuilt = CalendarTable::new(MIN_BS_YEAR, &BS_MONTH_DAYS).unwrap();
        assert_eq!(rebuilt, CalendarTable::STANDARD);
    }

    #[test]
    fn test_month_lengths_within_almanac_bounds() {
        let table = CalendarTable::STANDARD;
        for year in table.years() {
            for month in 1..=12 {
                let days = table.month_length(year, month).unwrap();
                assert!((28..=32).contains(&days), "{year}-{month} has {days} days");
            }
        }
    }

    #[test]
    fn test_year_length_is_sum_of_months() {
        let table = CalendarTable::STANDARD;
        for year in table.years() {
            let sum: u32 = (1..=12)
                .map(|m| u32::from(table.month_length(year, m).unwrap()))
                .sum();
            assert_eq!(table.year_length(year).unwrap(), sum);
        }
        assert_eq!(table.year_length(2080).unwrap(), 365);
        assert_eq!(table.year_length(2081).unwrap(), 366);
    }

    #[test]
    fn test_month_length_lookup() {
        let table = CalendarTable::STANDARD;
        assert_eq!(table.month_length(2080, 1).unwrap(), 31);
        assert_eq!(table.month_length(2080, 2).unwrap(), 32);
        assert_eq!(table.month_length(2090, 12).unwrap(), 31);
        assert_eq!(table.month_length(2070, 7).unwrap(), 29);
    }

    #[test]
    fn test_month_length_out_of_range() {
        let table = CalendarTable::STANDARD;
        assert!(matches!(
            table.month_length(2069, 1),
            Err(OutOfRange::Year { year: 2069, first: 2070, last: 2090 })
        ));
        assert!(matches!(
            table.month_length(2091, 1),
            Err(OutOfRange::Year { year: 2091, .. })
        ));
        assert!(matches!(table.month_length(2080, 0), Err(OutOfRange::Month(0))));
        assert!(matches!(table.month_length(2080, 13), Err(OutOfRange::Month(13))));
    }

    #[test]
    fn test_check_year() {
        let table = CalendarTable::STANDARD;
        assert_eq!(table.check_year(2070).unwrap(), 2070);
        assert_eq!(table.check_year(2090).unwrap(), 2090);
        assert!(table.check_year(2069).is_err());
        assert!(table.check_year(2091).is_err());
        assert!(table.check_year(-5).is_err());
        assert!(table.check_year(100_000).is_err());
    }

    #[test]
    fn test_day_validation() {
        let table = CalendarTable::STANDARD;
        let jestha = Month::new(2).unwrap();
        assert_eq!(table.day(2080, jestha, 30).unwrap().get(), 30);
        assert_eq!(table.day(2080, jestha, 32).unwrap().get(), 32);
        assert!(matches!(
            table.day(2080, jestha, 33),
            Err(OutOfRange::Day { year: 2080, day: 33, .. })
        ));
        assert!(table.day(2080, jestha, 0).is_err());
        assert!(table.day(2080, jestha, -1).is_err());
    }

    #[test]
    fn test_day_error_message() {
        let table = CalendarTable::STANDARD;
        let err = table.day(2080, Month::new(1).unwrap(), 32).unwrap_err();
        assert_eq!(err.to_string(), "Invalid day 32 for Baisakh 2080 BS");
    }

    #[test]
    fn test_alternate_table() {
        let table = CalendarTable::new(3000, &SHORT).unwrap();
        assert_eq!(table.years(), 3000..=3001);
        assert_eq!(table.month_length(3000, 5).unwrap(), 30);
        assert_eq!(table.year_length(3001).unwrap(), 360);
        assert!(!table.contains(2080));
    }

    #[test]
    fn test_rejects_out_of_bounds_month_length() {
        let result = CalendarTable::new(2000, &BAD);
        assert!(matches!(
            result,
            Err(OutOfRange::MonthLength { year: 2000, month: 4, days: 33, .. })
        ));
    }

    #[test]
    fn test_rejects_window_overflow() {
        let result = CalendarTable::new(u16::MAX, &SHORT);
        assert!(matches!(result, Err(OutOfRange::Year { .. })));
    }
}
