//! Estimate command for working back holidays used from a percentage.

use std::io::Write;

use anyhow::{Context, Result};
use attn_core::form::HolidayForm;
use attn_core::working_days::breakdown;
use attn_core::{DateRange, DayBreakdown, HolidayBackCalcResult};
use serde::Serialize;

use crate::Config;
use crate::cli::EstimateArgs;
use crate::commands::util::split_vacations;

/// Estimate plus the days that did not count, for display.
#[derive(Debug, Serialize)]
pub struct EstimateReport {
    pub range: DateRange,
    pub attendance_percentage: f64,
    #[serde(flatten)]
    pub result: HolidayBackCalcResult,
    pub days: DayBreakdown,
}

/// Runs the estimate command.
pub fn run<W: Write>(writer: &mut W, config: &Config, args: &EstimateArgs) -> Result<()> {
    let form = HolidayForm {
        start: &args.start,
        end: &args.end,
        attendance_percentage: &args.percentage,
        vacations: split_vacations(&args.vacations)?,
    };
    let input = form.parse().context("invalid holiday estimate input")?;

    let result =
        attn_core::estimate(&input, &config.holidays).context("failed to estimate holidays")?;
    let report = EstimateReport {
        range: input.range,
        attendance_percentage: input.attendance_percentage,
        result,
        days: breakdown(input.range, &config.holidays, &input.vacations),
    };

    if args.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        write_report(writer, &report)?;
    }
    Ok(())
}

fn write_report<W: Write>(writer: &mut W, report: &EstimateReport) -> Result<()> {
    writeln!(
        writer,
        "Holiday estimate for {} to {}",
        report.range.start, report.range.end
    )?;
    writeln!(
        writer,
        "Attendance:     {:.2}%",
        report.attendance_percentage
    )?;
    writeln!(writer, "Working days:   {}", report.result.working_days)?;
    writeln!(
        writer,
        "Holidays used:  ~{}",
        report.result.holidays_used_estimate
    )?;
    writeln!(
        writer,
        "Not counted:    {} Sundays, {} holidays, {} vacation days",
        report.days.weekly_off, report.days.holidays, report.days.vacation
    )?;
    Ok(())
}
