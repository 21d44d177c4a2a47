//! Estimating holidays used from an attendance percentage.
//!
//! The percentage was itself rounded when it was first reported, so the
//! result is an estimate rather than an exact inverse of [`crate::project`].

use serde::{Deserialize, Serialize};

use crate::calendar::{DateRange, HolidaySet, VacationInterval};
use crate::types::{CalcError, ValidationError};
use crate::working_days::count_working_days;

/// Validated input for [`estimate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolidayBackCalcInput {
    pub range: DateRange,
    pub vacations: Vec<VacationInterval>,
    pub attendance_percentage: f64,
}

/// Output of [`estimate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HolidayBackCalcResult {
    pub working_days: u32,
    pub holidays_used_estimate: u32,
}

/// Estimates how many holidays produce `attendance_percentage` over the
/// working days of `range`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn estimate(
    input: &HolidayBackCalcInput,
    holidays: &HolidaySet,
) -> Result<HolidayBackCalcResult, CalcError> {
    let percentage = input.attendance_percentage;
    if !percentage.is_finite() {
        return Err(ValidationError::NotANumber {
            field: "attendance percentage",
            value: percentage.to_string(),
        }
        .into());
    }
    if !(0.0..=100.0).contains(&percentage) {
        return Err(ValidationError::PercentageOutOfRange {
            field: "attendance percentage",
            value: percentage,
        }
        .into());
    }

    let working_days = count_working_days(input.range, holidays, &input.vacations);
    let attended_days = f64::from(working_days) * percentage / 100.0;
    // Bounded by `working_days`, so the cast cannot overflow.
    let holidays_used_estimate = (f64::from(working_days) - attended_days).round() as u32;

    tracing::debug!(
        working_days,
        attended_days,
        holidays_used_estimate,
        "estimated holidays used"
    );

    Ok(HolidayBackCalcResult {
        working_days,
        holidays_used_estimate,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::projection::{AttendanceInput, project};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn input(start: NaiveDate, end: NaiveDate, percentage: f64) -> HolidayBackCalcInput {
        HolidayBackCalcInput {
            range: DateRange::new(start, end),
            vacations: Vec::new(),
            attendance_percentage: percentage,
        }
    }

    #[test]
    fn full_attendance_used_no_holidays() {
        let result = estimate(
            &input(date(2025, 1, 1), date(2025, 1, 8), 100.0),
            &HolidaySet::default(),
        )
        .unwrap();
        assert_eq!(
            result,
            HolidayBackCalcResult {
                working_days: 6,
                holidays_used_estimate: 0
            }
        );
    }

    #[test]
    fn rounds_to_the_nearest_day() {
        // 6 working days at 75% -> 1.5 holidays, rounded up.
        let result = estimate(
            &input(date(2025, 1, 1), date(2025, 1, 8), 75.0),
            &HolidaySet::default(),
        )
        .unwrap();
        assert_eq!(result.holidays_used_estimate, 2);

        // 6 working days at 80% -> 1.2 holidays.
        let result = estimate(
            &input(date(2025, 1, 1), date(2025, 1, 8), 80.0),
            &HolidaySet::default(),
        )
        .unwrap();
        assert_eq!(result.holidays_used_estimate, 1);
    }

    #[test]
    fn zero_percent_means_every_day_was_a_holiday() {
        let result = estimate(
            &input(date(2025, 2, 3), date(2025, 2, 8), 0.0),
            &HolidaySet::default(),
        )
        .unwrap();
        assert_eq!(result.working_days, 6);
        assert_eq!(result.holidays_used_estimate, 6);
    }

    #[test]
    fn vacations_reduce_working_days() {
        let mut with_vacation = input(date(2025, 2, 3), date(2025, 2, 15), 50.0);
        with_vacation.vacations = vec![
            VacationInterval::new(date(2025, 2, 10), date(2025, 2, 15)),
            VacationInterval {
                start: Some(date(2025, 2, 3)),
                end: None,
            },
        ];
        let result = estimate(&with_vacation, &HolidaySet::default()).unwrap();
        assert_eq!(result.working_days, 6);
        assert_eq!(result.holidays_used_estimate, 3);
    }

    #[test]
    fn reversed_range_estimates_zero() {
        let result = estimate(
            &input(date(2025, 3, 1), date(2025, 2, 1), 60.0),
            &HolidaySet::default(),
        )
        .unwrap();
        assert_eq!(result.working_days, 0);
        assert_eq!(result.holidays_used_estimate, 0);
    }

    #[test]
    fn percentage_outside_bounds_is_rejected() {
        for bad in [-0.5, 100.5] {
            let err = estimate(
                &input(date(2025, 1, 1), date(2025, 1, 8), bad),
                &HolidaySet::default(),
            )
            .unwrap_err();
            assert!(matches!(
                err,
                CalcError::Validation(ValidationError::PercentageOutOfRange { .. })
            ));
        }

        let err = estimate(
            &input(date(2025, 1, 1), date(2025, 1, 8), f64::INFINITY),
            &HolidaySet::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CalcError::Validation(ValidationError::NotANumber { .. })
        ));
    }

    #[test]
    fn recovers_holidays_taken_from_a_projection() {
        let holidays = HolidaySet::default();
        let today = date(2025, 3, 31);
        let vacations = vec![VacationInterval::new(date(2025, 2, 10), date(2025, 2, 16))];

        for holidays_taken in [0, 3, 7, 12, 25] {
            let attendance = project(
                &AttendanceInput {
                    total_working_days: 120,
                    holidays_taken,
                    extra_holidays: 0,
                    semester_start: date(2025, 1, 1),
                    vacations: vacations.clone(),
                    target_percentage: None,
                },
                &holidays,
                today,
            )
            .unwrap();

            // Round to two places as the percentage is displayed.
            let shown = (attendance.attendance_percentage.unwrap() * 100.0).round() / 100.0;
            let result = estimate(
                &HolidayBackCalcInput {
                    range: DateRange::new(date(2025, 1, 1), today),
                    vacations: vacations.clone(),
                    attendance_percentage: shown,
                },
                &holidays,
            )
            .unwrap();

            assert!(
                result.holidays_used_estimate.abs_diff(holidays_taken) <= 1,
                "took {holidays_taken}, estimated {}",
                result.holidays_used_estimate
            );
        }
    }
}
