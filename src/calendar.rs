use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use tracing::{debug, trace};

use crate::BsDate;
use crate::anchor::ReferenceAnchor;
use crate::consts::{BAISAKH, CHAITRA, MIN_DAY};
use crate::error::OutOfRange;
use crate::table::CalendarTable;
use crate::types::Month;

/// A month table paired with the anchor every conversion pivots on.
///
/// Built once and passed by reference; there is no way to mutate either part
/// after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    table: CalendarTable,
    anchor: ReferenceAnchor,
}

impl Calendar {
    /// Pairs `table` with `anchor`.
    ///
    /// # Errors
    /// Returns `OutOfRange::Anchor` if the anchor's BS date is not a valid day
    /// of `table`, or if its weekday disagrees with its Gregorian date.
    pub fn new(table: CalendarTable, anchor: ReferenceAnchor) -> Result<Self, OutOfRange> {
        let bs = anchor.bs();
        table
            .day(bs.year(), bs.month_typed(), i32::from(bs.day()))
            .map_err(|_| OutOfRange::Anchor(bs.to_string()))?;

        let gregorian = anchor.gregorian();
        if gregorian.weekday() != anchor.weekday() {
            return Err(OutOfRange::Anchor(format!("{gregorian} ({})", anchor.weekday())));
        }

        Ok(Self { table, anchor })
    }

    /// The embedded BS 2070..=2090 table anchored at 2023-04-14 AD = 2080-01-01 BS.
    ///
    /// # Errors
    /// Only fails if the embedded constants are inconsistent.
    pub fn standard() -> Result<Self, OutOfRange> {
        let table = CalendarTable::STANDARD;
        Self::new(table, ReferenceAnchor::standard(&table)?)
    }

    pub const fn table(&self) -> &CalendarTable {
        &self.table
    }

    pub const fn anchor(&self) -> &ReferenceAnchor {
        &self.anchor
    }

    /// Validates a user-supplied BS date against the table.
    ///
    /// # Errors
    /// Returns the `OutOfRange` variant for the first component that is out of bounds.
    pub fn date(&self, year: i32, month: i32, day: i32) -> Result<BsDate, OutOfRange> {
        let year = self.table.check_year(year)?;
        let month = Month::from_i32(month)?;
        let day = self.table.day(year, month, day)?;
        Ok(BsDate::from_parts(year, month, day))
    }

    /// Signed number of calendar days from the anchor's Gregorian date to `date`.
    pub fn day_difference(&self, date: NaiveDate) -> i64 {
        date.signed_duration_since(self.anchor.gregorian()).num_days()
    }

    /// Converts a Gregorian year, month and day to BS.
    ///
    /// # Errors
    /// Returns `OutOfRange::GregorianDay` if the components are not a Gregorian
    /// date, otherwise whatever [`Calendar::to_bs`] returns.
    pub fn to_bs_ymd(&self, year: i32, month: u32, day: u32) -> Result<BsDate, OutOfRange> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(OutOfRange::GregorianDay { year, month, day })?;
        self.to_bs(date)
    }

    /// Converts a Gregorian date to BS by walking the table away from the anchor.
    ///
    /// # Errors
    /// Returns `OutOfRange::Gregorian` as soon as the walk leaves the table window.
    pub fn to_bs(&self, date: NaiveDate) -> Result<BsDate, OutOfRange> {
        let diff = self.day_difference(date);
        debug!(%date, diff, "converting Gregorian date to BS");

        let start = self.anchor.bs();
        let (year, month, day) = match diff.cmp(&0) {
            Ordering::Equal => return Ok(start),
            Ordering::Greater => self.walk_forward(start, diff, date)?,
            Ordering::Less => self.walk_backward(start, diff.unsigned_abs(), date)?,
        };

        // a forward walk can finish on day 1 of the first year past the window
        self.date(i32::from(year), i32::from(month), i32::from(day))
            .map_err(|_| OutOfRange::Gregorian(date))
    }

    /// Converts a BS date back to its Gregorian equivalent.
    ///
    /// # Errors
    /// Returns `OutOfRange` if `date` lies outside this calendar's table.
    pub fn to_gregorian(&self, date: &BsDate) -> Result<NaiveDate, OutOfRange> {
        let offset = self.days_from_anchor(date)?;
        self.shift_anchor(offset, date)
    }

    /// Day of the week of a BS date given as raw components.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the year, month or day is outside the table.
    pub fn weekday(&self, year: u16, month: u8, day: u8) -> Result<Weekday, OutOfRange> {
        let date = self.date(i32::from(year), i32::from(month), i32::from(day))?;
        self.weekday_of(&date)
    }

    /// Day of the week of `date`, found by offsetting the anchor's Gregorian date.
    ///
    /// # Errors
    /// Returns `OutOfRange` if `date` lies outside this calendar's table.
    pub fn weekday_of(&self, date: &BsDate) -> Result<Weekday, OutOfRange> {
        self.to_gregorian(date).map(|g| g.weekday())
    }

    fn walk_forward(
        &self,
        start: BsDate,
        mut remaining: i64,
        target: NaiveDate,
    ) -> Result<(u16, u8, u8), OutOfRange> {
        let (mut year, mut month, mut day) = (start.year(), start.month(), start.day());

        while remaining > 0 {
            let length = self
                .table
                .month_length(year, month)
                .map_err(|_| OutOfRange::Gregorian(target))?;
            let left = i64::from(length - day + 1);

            if remaining >= left {
                remaining -= left;
                day = MIN_DAY;
                if month == CHAITRA {
                    month = BAISAKH;
                    year += 1;
                } else {
                    month += 1;
                }
                trace!(year, month, remaining, "rolled forward to next month");
            } else {
                day += u8::try_from(remaining).map_err(|_| OutOfRange::Gregorian(target))?;
                remaining = 0;
            }
        }

        Ok((year, month, day))
    }

    fn walk_backward(
        &self,
        start: BsDate,
        mut remaining: u64,
        target: NaiveDate,
    ) -> Result<(u16, u8, u8), OutOfRange> {
        let (mut year, mut month, mut day) = (start.year(), start.month(), start.day());

        while remaining > 0 {
            if day == MIN_DAY {
                if month == BAISAKH {
                    month = CHAITRA;
                    year = year.checked_sub(1).ok_or(OutOfRange::Gregorian(target))?;
                } else {
                    month -= 1;
                }
                day = self
                    .table
                    .month_length(year, month)
                    .map_err(|_| OutOfRange::Gregorian(target))?;
                trace!(year, month, remaining, "rolled back to previous month");
            } else {
                day -= 1;
            }
            remaining -= 1;
        }

        Ok((year, month, day))
    }

    /// Signed day offset of `date` from the anchor's BS date.
    fn days_from_anchor(&self, date: &BsDate) -> Result<i64, OutOfRange> {
        let anchor = self.anchor.bs();
        let mut days = 0_i64;

        for year in anchor.year()..date.year() {
            days += i64::from(self.table.year_length(year)?);
        }
        for year in date.year()..anchor.year() {
            days -= i64::from(self.table.year_length(year)?);
        }

        days += self.day_of_year(date)? - self.day_of_year(&anchor)?;
        Ok(days)
    }

    /// One-based position of `date` within its year.
    fn day_of_year(&self, date: &BsDate) -> Result<i64, OutOfRange> {
        let months = self.table.months(date.year())?;
        let before: i64 = months[..date.month_typed().index()]
            .iter()
            .copied()
            .map(i64::from)
            .sum();
        Ok(before + i64::from(date.day()))
    }

    fn shift_anchor(&self, offset: i64, date: &BsDate) -> Result<NaiveDate, OutOfRange> {
        TimeDelta::try_days(offset)
            .and_then(|delta| self.anchor.gregorian().checked_add_signed(delta))
            .ok_or_else(|| self.table.year_error(i32::from(date.year())))
    }
}
