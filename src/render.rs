//! Month and year grids for the terminal.

use std::fmt;

use chrono::Weekday;

use crate::calendar::Calendar;
use crate::consts::{DAYS_PER_WEEK, MIN_DAY, WEEKDAY_HEADER};
use crate::error::OutOfRange;
use crate::types::Month;

/// Foreground green, used for year headers
pub const GREEN: &str = "\x1b[32m";
/// Foreground blue, used for the highlighted day
pub const BLUE: &str = "\x1b[34m";
/// Resets all attributes
pub const RESET: &str = "\x1b[0m";

/// Lays out BS months as 7-column, Sunday-first grids.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    calendar: &'a Calendar,
    color: bool,
}

impl<'a> Renderer<'a> {
    pub const fn new(calendar: &'a Calendar) -> Self {
        Self {
            calendar,
            color: true,
        }
    }

    /// Turns ANSI colour escapes on or off
    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Grid for one month. `highlight` is marked if it falls inside the month.
    ///
    /// # Errors
    /// Returns `OutOfRange::Year` if `year` is not in the calendar table.
    pub fn month(
        &self,
        year: u16,
        month: Month,
        highlight: Option<u8>,
    ) -> Result<MonthView, OutOfRange> {
        let length = self.calendar.table().month_length(year, month.get())?;
        let first_weekday = self.calendar.weekday(year, month.get(), MIN_DAY)?;
        Ok(MonthView {
            year,
            month,
            length,
            first_weekday,
            highlight,
            color: self.color,
        })
    }

    /// All twelve months of `year` under a year banner.
    ///
    /// # Errors
    /// Returns `OutOfRange::Year` if `year` is not in the calendar table.
    pub fn year(&self, year: u16) -> Result<YearView, OutOfRange> {
        let months = Month::all()
            .map(|month| self.month(year, month, None))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(YearView {
            year,
            months,
            color: self.color,
        })
    }
}

/// A rendered month; format it with `{}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    year: u16,
    month: Month,
    length: u8,
    first_weekday: Weekday,
    highlight: Option<u8>,
    color: bool,
}

impl MonthView {
    /// Empty cells before day 1
    pub fn leading_blanks(&self) -> u32 {
        self.first_weekday.num_days_from_sunday()
    }

    pub const fn length(&self) -> u8 {
        self.length
    }
}

impl fmt::Display for MonthView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "  {} {} BS", self.month.name(), self.year)?;
        writeln!(f, "{WEEKDAY_HEADER}")?;

        let blanks = self.leading_blanks();
        for _ in 0..blanks {
            write!(f, "   ")?;
        }

        for day in 1..=self.length {
            if self.highlight == Some(day) && self.color {
                write!(f, "{BLUE}{day:2} {RESET}")?;
            } else if self.highlight == Some(day) {
                write!(f, "{day:>2}*")?;
            } else {
                write!(f, "{day:2} ")?;
            }
            if (u32::from(day) + blanks) % DAYS_PER_WEEK == 0 {
                writeln!(f)?;
            }
        }

        if (u32::from(self.length) + blanks) % DAYS_PER_WEEK != 0 {
            writeln!(f)?;
        }
        writeln!(f)
    }
}

/// A rendered year; format it with `{}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearView {
    year: u16,
    months: Vec<MonthView>,
    color: bool,
}

impl fmt::Display for YearView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        if self.color {
            writeln!(f, "{GREEN}{} BS Calendar{RESET}", self.year)?;
        } else {
            writeln!(f, "{} BS Calendar", self.year)?;
        }
        writeln!(f, "================")?;
        self.months.iter().try_for_each(|month| write!(f, "{month}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calendar() -> Calendar {
        Calendar::standard().unwrap()
    }

    fn month(m: u8) -> Month {
        Month::new(m).unwrap()
    }

    #[test]
    fn test_baisakh_2080_layout() {
        let cal = calendar();
        let view = Renderer::new(&cal).month(2080, month(1), None).unwrap();
        assert_eq!(view.leading_blanks(), 5);

        let expected = concat!(
            "\n",
            "  Baisakh 2080 BS\n",
            "Su Mo Tu We Th Fr Sa\n",
            "                1  2 \n",
            " 3  4  5  6  7  8  9 \n",
            "10 11 12 13 14 15 16 \n",
            "17 18 19 20 21 22 23 \n",
            "24 25 26 27 28 29 30 \n",
            "31 \n",
            "\n",
        );
        assert_eq!(view.to_string(), expected);
    }

    #[test]
    fn test_month_starting_on_sunday() {
        // Poush 2080 starts on Sunday and has 29 days
        let cal = calendar();
        let view = Renderer::new(&cal).month(2080, month(9), None).unwrap();
        assert_eq!(view.leading_blanks(), 0);
        let text = view.to_string();
        assert!(text.contains("Su Mo Tu We Th Fr Sa\n 1  2  3"));
        assert!(text.ends_with("22 23 24 25 26 27 28 \n29 \n\n"));
    }

    #[test]
    fn test_month_ending_on_saturday_has_no_extra_line() {
        // Mangsir 2080 starts on Friday and has 30 days
        let cal = calendar();
        let view = Renderer::new(&cal).month(2080, month(8), None).unwrap();
        assert_eq!(view.leading_blanks(), 5);
        let text = view.to_string();
        assert!(text.ends_with("24 25 26 27 28 29 30 \n\n"));
        assert!(!text.contains("\n\n\n"));
    }

    #[test]
    fn test_highlight_with_color() {
        let cal = calendar();
        let view = Renderer::new(&cal).month(2080, month(2), Some(15)).unwrap();
        let text = view.to_string();
        assert!(text.contains(&format!("{BLUE}15 {RESET}")));
        assert_eq!(text.matches(BLUE).count(), 1);
    }

    #[test]
    fn test_highlight_without_color() {
        let cal = calendar();
        let view = Renderer::new(&cal)
            .with_color(false)
            .month(2080, month(2), Some(15))
            .unwrap();
        let text = view.to_string();
        assert!(text.contains("15*"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_highlight_out_of_month_is_ignored() {
        let cal = calendar();
        let renderer = Renderer::new(&cal);
        let plain = renderer.month(2080, month(3), None).unwrap().to_string();
        let past_end = renderer.month(2080, month(3), Some(40)).unwrap().to_string();
        assert_eq!(plain, past_end);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let cal = calendar();
        let renderer = Renderer::new(&cal);
        let first = renderer.month(2085, month(4), Some(7)).unwrap().to_string();
        let second = renderer.month(2085, month(4), Some(7)).unwrap().to_string();
        assert_eq!(first, second);

        let first = renderer.year(2075).unwrap().to_string();
        let second = renderer.year(2075).unwrap().to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_day_is_rendered() {
        let cal = calendar();
        let renderer = Renderer::new(&cal).with_color(false);
        for year in cal.table().years() {
            for m in Month::all() {
                let view = renderer.month(year, m, None).unwrap();
                let text = view.to_string();
                let days: Vec<u8> = text
                    .lines()
                    .skip(3)
                    .flat_map(str::split_whitespace)
                    .map(|cell| cell.parse().unwrap())
                    .collect();
                let expected: Vec<u8> = (1..=view.length()).collect();
                assert_eq!(days, expected, "{year}-{m}");
            }
        }
    }

    #[test]
    fn test_year_view() {
        let cal = calendar();
        let text = Renderer::new(&cal).year(2080).unwrap().to_string();
        assert!(text.starts_with(&format!("\n{GREEN}2080 BS Calendar{RESET}\n================\n")));
        for m in Month::all() {
            assert!(text.contains(&format!("  {} 2080 BS\n", m.name())));
        }
        assert_eq!(text.matches(WEEKDAY_HEADER).count(), 12);
    }

    #[test]
    fn test_year_view_without_color() {
        let cal = calendar();
        let text = Renderer::new(&cal).with_color(false).year(2090).unwrap().to_string();
        assert!(text.starts_with("\n2090 BS Calendar\n"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_out_of_range_year() {
        let cal = calendar();
        let renderer = Renderer::new(&cal);
        assert!(matches!(
            renderer.month(2091, month(1), None),
            Err(OutOfRange::Year { year: 2091, .. })
        ));
        assert!(renderer.year(2069).is_err());
    }
}
