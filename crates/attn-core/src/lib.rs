//! Core logic for the attendance calculator.
//!
//! This crate contains the pure calculations behind the tool:
//! - Working days: counting class days in a range, skipping Sundays,
//!   holidays and vacations
//! - Projection: current and end-of-semester attendance, status, and days
//!   needed to reach a target
//! - Estimate: holidays used, worked back from an attendance percentage
//! - Form: parsing raw field strings into validated inputs
//!
//! Nothing here reads the clock. "Today" is always passed in.

pub mod calendar;
mod estimate;
pub mod form;
mod projection;
mod types;
pub mod working_days;

pub use calendar::{DateRange, HolidaySet, VacationInterval};
pub use estimate::{HolidayBackCalcInput, HolidayBackCalcResult, estimate};
pub use projection::{
    AttendanceInput, AttendanceResult, AttendanceStatus, EXCELLENT_PERCENTAGE,
    REQUIRED_PERCENTAGE, TargetOutcome, days_to_target, project,
};
pub use types::{CalcError, ValidationError};
pub use working_days::{DayBreakdown, DayKind, WEEKLY_OFF_DAY, count_working_days};
