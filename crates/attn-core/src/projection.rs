//! Attendance projection.
//!
//! Turns the working days elapsed since the semester started into a current
//! attendance percentage, an end-of-semester projection assuming perfect
//! attendance from here on, a qualitative status, and optionally the number
//! of further present days needed to reach a target percentage.
//!
//! # Status selection
//!
//! Statuses are checked in order against the 75% threshold, first match wins:
//!
//! 1. semester over (no projection)
//! 2. projection exactly 75%
//! 3. below 75% now but reachable
//! 4. projection below 75%
//! 5. 90% or more now
//! 6. otherwise adequate

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{DateRange, HolidaySet, VacationInterval};
use crate::types::{CalcError, ValidationError};
use crate::working_days::count_working_days;

/// Minimum attendance percentage required to avoid condonation.
pub const REQUIRED_PERCENTAGE: f64 = 75.0;

/// Attendance at or above this percentage is excellent.
pub const EXCELLENT_PERCENTAGE: f64 = 90.0;

/// Validated input for [`project`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceInput {
    /// Working days in the whole semester.
    pub total_working_days: u32,
    /// Days missed so far.
    pub holidays_taken: u32,
    /// Unlisted public holidays that also closed the college.
    pub extra_holidays: u32,
    pub semester_start: NaiveDate,
    pub vacations: Vec<VacationInterval>,
    pub target_percentage: Option<f64>,
}

/// Qualitative standing of the attendance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceStatus {
    /// More holidays taken than working days have elapsed.
    #[serde(rename = "attendance-deficit")]
    Deficit,
    SemesterOver,
    BorderlineExact,
    Recoverable,
    Shortfall,
    Excellent,
    Adequate,
}

impl AttendanceStatus {
    /// Stable machine-readable code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Deficit => "attendance-deficit",
            Self::SemesterOver => "semester-over",
            Self::BorderlineExact => "borderline-exact",
            Self::Recoverable => "recoverable",
            Self::Shortfall => "shortfall",
            Self::Excellent => "excellent",
            Self::Adequate => "adequate",
        }
    }

    /// Message shown next to the percentages.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Deficit => "More holidays taken than working days so far. Check the numbers.",
            Self::SemesterOver => "Semester is over.",
            Self::BorderlineExact => {
                "Exactly 75% if you attend every remaining day. Missing one more day means condonation."
            }
            Self::Recoverable => "Below 75% now, but attending every remaining day gets you there.",
            Self::Shortfall => "Below 75% even with perfect attendance. Prepare for condonation.",
            Self::Excellent => "Excellent attendance.",
            Self::Adequate => "Attendance is above 75%.",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// How a requested target percentage relates to the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "days")]
pub enum TargetOutcome {
    /// Above the projection, even perfect attendance falls short.
    #[serde(rename = "target-unreachable")]
    Unreachable,
    #[serde(rename = "target-already-met")]
    AlreadyMet,
    /// Equal to the projection: no further holidays are possible.
    #[serde(rename = "target-exact")]
    Exact,
    #[serde(rename = "target-days-needed")]
    DaysNeeded(u32),
}

impl TargetOutcome {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Unreachable => "target-unreachable",
            Self::AlreadyMet => "target-already-met",
            Self::Exact => "target-exact",
            Self::DaysNeeded(_) => "target-days-needed",
        }
    }

    pub const fn days_to_target(self) -> Option<u32> {
        match self {
            Self::Exact => Some(0),
            Self::DaysNeeded(days) => Some(days),
            Self::Unreachable | Self::AlreadyMet => None,
        }
    }

    pub fn message(self, target: f64) -> String {
        match self {
            Self::Unreachable => {
                format!("{target:.2}% cannot be reached even with perfect attendance.")
            }
            Self::AlreadyMet => format!("Already at or above {target:.2}%."),
            Self::Exact => {
                format!("{target:.2}% is reachable only by attending every remaining day.")
            }
            Self::DaysNeeded(days) => {
                format!("Attend {days} more consecutive day(s) to reach {target:.2}%.")
            }
        }
    }
}

/// Output of [`project`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceResult {
    pub working_days_so_far: i64,
    pub attended_days: i64,
    pub attendance_percentage: Option<f64>,
    /// End-of-semester percentage with perfect attendance from today,
    /// never below the current percentage.
    pub projected_percentage: Option<f64>,
    pub days_to_target: Option<u32>,
    pub status: AttendanceStatus,
    pub status_message: String,
    pub target: Option<TargetOutcome>,
    pub target_message: Option<String>,
}

impl AttendanceResult {
    fn deficit(working_days_so_far: i64, attended_days: i64) -> Self {
        Self {
            working_days_so_far,
            attended_days,
            attendance_percentage: None,
            projected_percentage: None,
            days_to_target: None,
            status: AttendanceStatus::Deficit,
            status_message: AttendanceStatus::Deficit.message().to_string(),
            target: None,
            target_message: None,
        }
    }
}

/// `100 * numerator / denominator`, multiplied before dividing so exact
/// thresholds compare exactly.
#[allow(clippy::cast_precision_loss)]
fn percentage(numerator: i64, denominator: i64) -> f64 {
    100.0 * numerator as f64 / denominator as f64
}

fn validate_target(target: f64) -> Result<f64, ValidationError> {
    if !target.is_finite() {
        return Err(ValidationError::NotANumber {
            field: "target percentage",
            value: target.to_string(),
        });
    }
    if !(0.0..=100.0).contains(&target) {
        return Err(ValidationError::PercentageOutOfRange {
            field: "target percentage",
            value: target,
        });
    }
    Ok(target)
}

/// Computes the attendance record as of `today`.
///
/// `today` is inclusive. Holidays taken (or extra holidays) beyond the
/// working days elapsed produce a [`AttendanceStatus::Deficit`] result rather
/// than an error.
pub fn project(
    input: &AttendanceInput,
    holidays: &HolidaySet,
    today: NaiveDate,
) -> Result<AttendanceResult, CalcError> {
    let target = input.target_percentage.map(validate_target).transpose()?;

    let elapsed = count_working_days(
        DateRange::new(input.semester_start, today),
        holidays,
        &input.vacations,
    );
    // Negative when extra holidays outnumber the elapsed days; that always
    // lands in the deficit branch below.
    let working_days_so_far = i64::from(elapsed) - i64::from(input.extra_holidays);
    let attended_days = working_days_so_far - i64::from(input.holidays_taken);
    tracing::debug!(
        elapsed,
        working_days_so_far,
        attended_days,
        "counted working days"
    );

    if attended_days < 0 {
        return Ok(AttendanceResult::deficit(working_days_so_far, attended_days));
    }
    if working_days_so_far == 0 {
        return Err(CalcError::DivisionGuard {
            denominator: "working days so far",
        });
    }
    if input.total_working_days == 0 {
        return Err(CalcError::DivisionGuard {
            denominator: "total working days",
        });
    }

    let total = i64::from(input.total_working_days);
    let attendance = percentage(attended_days, working_days_so_far);

    if working_days_so_far >= total {
        let status = AttendanceStatus::SemesterOver;
        return Ok(AttendanceResult {
            working_days_so_far,
            attended_days,
            attendance_percentage: Some(attendance),
            projected_percentage: None,
            days_to_target: None,
            status,
            status_message: format!(
                "{} Attendance till today: {attendance:.2}%",
                status.message()
            ),
            target: None,
            target_message: None,
        });
    }

    let remaining = total - working_days_so_far;
    let projected = percentage(attended_days + remaining, total);
    let adjusted = projected.max(attendance);
    let status = select_status(attendance, adjusted);
    tracing::debug!(attendance, projected, ?status, "projected attendance");

    let target_outcome = target
        .map(|target| {
            let outcome = evaluate_target(
                target,
                attendance,
                projected,
                working_days_so_far,
                attended_days,
            )?;
            Ok::<_, CalcError>((target, outcome))
        })
        .transpose()?;

    Ok(AttendanceResult {
        working_days_so_far,
        attended_days,
        attendance_percentage: Some(attendance),
        projected_percentage: Some(adjusted),
        days_to_target: target_outcome.and_then(|(_, outcome)| outcome.days_to_target()),
        status,
        status_message: status.message().to_string(),
        target: target_outcome.map(|(_, outcome)| outcome),
        target_message: target_outcome.map(|(target, outcome)| outcome.message(target)),
    })
}

/// Picks the status for a semester still in progress.
#[allow(clippy::float_cmp)]
fn select_status(attendance: f64, adjusted_projected: f64) -> AttendanceStatus {
    if adjusted_projected == REQUIRED_PERCENTAGE {
        AttendanceStatus::BorderlineExact
    } else if attendance < REQUIRED_PERCENTAGE && REQUIRED_PERCENTAGE <= adjusted_projected {
        AttendanceStatus::Recoverable
    } else if adjusted_projected < REQUIRED_PERCENTAGE {
        AttendanceStatus::Shortfall
    } else if attendance >= EXCELLENT_PERCENTAGE {
        AttendanceStatus::Excellent
    } else {
        AttendanceStatus::Adequate
    }
}

#[allow(clippy::float_cmp)]
fn evaluate_target(
    target: f64,
    attendance: f64,
    projected: f64,
    working_days_so_far: i64,
    attended_days: i64,
) -> Result<TargetOutcome, CalcError> {
    if target > projected {
        Ok(TargetOutcome::Unreachable)
    } else if attendance >= target {
        Ok(TargetOutcome::AlreadyMet)
    } else if target == projected {
        Ok(TargetOutcome::Exact)
    } else {
        days_to_target(working_days_so_far, attended_days, target).map(TargetOutcome::DaysNeeded)
    }
}

/// Smallest number of further present days `d` such that
/// `100 * (attended + d) / (working + d) >= target`.
///
/// Every added day counts as both a working day and an attended day, so the
/// answer assumes no further absences at all. Answers that do not fit in a
/// `u32` are reported as [`CalcError::Overflow`].
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn days_to_target(
    working_days_so_far: i64,
    attended_days: i64,
    target: f64,
) -> Result<u32, CalcError> {
    let target = validate_target(target)?;
    let reached =
        |d: i64| 100.0 * (attended_days + d) as f64 >= target * (working_days_so_far + d) as f64;

    if reached(0) {
        return Ok(0);
    }
    let headroom = 100.0 - target;
    if headroom <= 0.0 {
        return Err(CalcError::DivisionGuard {
            denominator: "100 - target percentage",
        });
    }

    let shortfall = target.mul_add(working_days_so_far as f64, -100.0 * attended_days as f64);
    let estimate = (shortfall / headroom).ceil().max(0.0);
    if estimate > f64::from(u32::MAX) {
        return Err(CalcError::Overflow {
            quantity: "days to target",
        });
    }

    // Float rounding can leave the estimate one off in either direction.
    let mut days = estimate as i64;
    while !reached(days) {
        days += 1;
    }
    while days > 0 && reached(days - 1) {
        days -= 1;
    }
    u32::try_from(days).map_err(|_| CalcError::Overflow {
        quantity: "days to target",
    })
}
