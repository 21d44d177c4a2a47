//! Holidays command for listing the configured holiday calendar.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;

use crate::Config;

/// Runs the holidays command.
pub fn run<W: Write>(writer: &mut W, config: &Config, year: Option<i32>, json: bool) -> Result<()> {
    let dates: Vec<NaiveDate> = year.map_or_else(
        || config.holidays.iter().collect(),
        |year| config.holidays.in_year(year).collect(),
    );

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&dates)?)?;
        return Ok(());
    }

    if dates.is_empty() {
        match year {
            Some(year) => writeln!(writer, "No holidays configured for {year}.")?,
            None => writeln!(writer, "No holidays configured.")?,
        }
        return Ok(());
    }

    let years: Vec<i32> = year.map_or_else(|| config.holidays.years().collect(), |year| vec![year]);
    for (i, year) in years.into_iter().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        writeln!(writer, "Holidays {year}")?;
        for date in config.holidays.in_year(year) {
            writeln!(writer, "  {}  {}", date, date.format("%a"))?;
        }
    }
    Ok(())
}
