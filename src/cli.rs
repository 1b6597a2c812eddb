use std::io::Write;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use nepcal::{BsDate, Calendar, Month, Renderer};
use tracing::info;

/// Bikram Sambat calendar for the terminal.
#[derive(Parser, Debug)]
#[command(name = "nepcal", version, about = "Bikram Sambat (BS) calendar and date converter", long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// BS year (2070-2090). On its own, prints all twelve months.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// BS month (1-12) to print.
    #[arg(short, long, requires = "year")]
    pub month: Option<i32>,

    /// BS day to resolve and highlight.
    #[arg(short, long, requires = "month")]
    pub day: Option<i32>,

    /// Convert this Gregorian date (YYYY-MM-DD) instead of today.
    #[arg(long, value_name = "DATE", conflicts_with = "year")]
    pub ad: Option<NaiveDate>,

    /// Print without ANSI colours.
    #[arg(long)]
    pub no_color: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Validates the request against `calendar` and writes the result to `out`.
    ///
    /// Nothing is written when validation fails.
    pub fn run(&self, calendar: &Calendar, out: &mut impl Write) -> Result<()> {
        let renderer = Renderer::new(calendar).with_color(!self.no_color);

        let Some(year) = self.year else {
            return self.convert(calendar, &renderer, out);
        };
        let year = calendar.table().check_year(year)?;

        match (self.month, self.day) {
            (None, _) => {
                info!(year, "printing full year");
                write!(out, "{}", renderer.year(year)?)?;
            }
            (Some(month), None) => {
                let month = Month::from_i32(month)?;
                info!(year, month = month.get(), "printing month");
                write!(out, "{}", renderer.month(year, month, None)?)?;
            }
            (Some(month), Some(day)) => {
                let date = calendar.date(i32::from(year), month, day)?;
                let gregorian = calendar.to_gregorian(&date)?;
                let view = renderer.month(date.year(), date.month_typed(), Some(date.day()))?;
                info!(%date, %gregorian, "resolved BS date");

                writeln!(out, "Nepali Date: {date} BS")?;
                writeln!(out, "Nepali Month: {}", date.month_name())?;
                writeln!(out, "Gregorian Date: {gregorian} AD")?;
                write!(out, "{view}")?;
            }
        }
        Ok(())
    }

    /// Gregorian to BS for `--ad`, or for the host's local date.
    fn convert(
        &self,
        calendar: &Calendar,
        renderer: &Renderer<'_>,
        out: &mut impl Write,
    ) -> Result<()> {
        let gregorian = self.ad.unwrap_or_else(|| Local::now().date_naive());
        let date: BsDate = calendar.to_bs(gregorian)?;
        let view = renderer.month(date.year(), date.month_typed(), Some(date.day()))?;
        info!(%gregorian, %date, "converted Gregorian date");

        if self.ad.is_some() {
            writeln!(out, "AD: {gregorian} -> Nepali Date: {date} BS")?;
        } else {
            writeln!(out, "Today (AD: {gregorian}) -> Nepali Date: {date} BS")?;
        }
        writeln!(out, "Nepali Month: {}", date.month_name())?;
        write!(out, "{view}")?;
        Ok(())
    }
}
