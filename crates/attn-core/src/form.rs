//! Parsing raw form fields into validated calculation inputs.
//!
//! Fields arrive exactly as typed, possibly blank. Everything is parsed and
//! validated here so no unparsed value ever reaches the formulas.

use chrono::{DateTime, NaiveDate};

use crate::calendar::{DateRange, VacationInterval};
use crate::estimate::HolidayBackCalcInput;
use crate::projection::AttendanceInput;
use crate::types::ValidationError;

/// Parses a non-negative whole number.
pub fn parse_count(field: &'static str, raw: &str) -> Result<u32, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Missing { field });
    }

    let value: i64 = raw.parse().map_err(|_| ValidationError::NotAnInteger {
        field,
        value: raw.to_string(),
    })?;
    if value < 0 {
        return Err(ValidationError::Negative { field, value });
    }
    u32::try_from(value).map_err(|_| ValidationError::NotAnInteger {
        field,
        value: raw.to_string(),
    })
}

/// Parses a finite percentage within `[0, 100]`.
pub fn parse_percentage(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Missing { field });
    }

    let value: f64 = raw
        .parse()
        .ok()
        .filter(|value: &f64| value.is_finite())
        .ok_or_else(|| ValidationError::NotANumber {
            field,
            value: raw.to_string(),
        })?;
    if !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::PercentageOutOfRange { field, value });
    }
    Ok(value)
}

/// Parses a calendar date.
///
/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp. A timestamp keeps the date
/// in its own offset and drops the time of day.
pub fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Missing { field });
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| ValidationError::InvalidDate {
            field,
            value: raw.to_string(),
        })
}

/// Parses one vacation row. Blank endpoints leave the interval incomplete.
pub fn parse_vacation(start: &str, end: &str) -> Result<VacationInterval, ValidationError> {
    let optional = |field: &'static str, raw: &str| {
        if raw.trim().is_empty() {
            Ok(None)
        } else {
            parse_date(field, raw).map(Some)
        }
    };

    Ok(VacationInterval {
        start: optional("vacation start", start)?,
        end: optional("vacation end", end)?,
    })
}

fn parse_vacations(rows: &[(&str, &str)]) -> Result<Vec<VacationInterval>, ValidationError> {
    rows.iter()
        .map(|(start, end)| parse_vacation(start, end))
        .collect()
}

/// Raw fields of the attendance form.
#[derive(Debug, Clone, Default)]
pub struct AttendanceForm<'a> {
    pub total_working_days: &'a str,
    pub holidays_taken: &'a str,
    pub extra_holidays: &'a str,
    pub semester_start: &'a str,
    pub vacations: Vec<(&'a str, &'a str)>,
    /// Blank means no target.
    pub target_percentage: &'a str,
}

impl AttendanceForm<'_> {
    pub fn parse(&self) -> Result<AttendanceInput, ValidationError> {
        let target_percentage = if self.target_percentage.trim().is_empty() {
            None
        } else {
            Some(parse_percentage(
                "target percentage",
                self.target_percentage,
            )?)
        };

        Ok(AttendanceInput {
            total_working_days: parse_count("total working days", self.total_working_days)?,
            holidays_taken: parse_count("holidays taken", self.holidays_taken)?,
            extra_holidays: parse_count("extra holidays", self.extra_holidays)?,
            semester_start: parse_date("semester start", self.semester_start)?,
            vacations: parse_vacations(&self.vacations)?,
            target_percentage,
        })
    }
}

/// Raw fields of the holiday estimate form.
#[derive(Debug, Clone, Default)]
pub struct HolidayForm<'a> {
    pub start: &'a str,
    pub end: &'a str,
    pub attendance_percentage: &'a str,
    pub vacations: Vec<(&'a str, &'a str)>,
}

impl HolidayForm<'_> {
    pub fn parse(&self) -> Result<HolidayBackCalcInput, ValidationError> {
        let start = parse_date("start date", self.start)?;
        let end = parse_date("end date", self.end)?;

        Ok(HolidayBackCalcInput {
            range: DateRange::new(start, end),
            vacations: parse_vacations(&self.vacations)?,
            attendance_percentage: parse_percentage(
                "attendance percentage",
                self.attendance_percentage,
            )?,
        })
    }
}
