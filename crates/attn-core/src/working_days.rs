//! Working-day counting.
//!
//! A day is a working day unless it is the weekly off-day, a listed holiday,
//! or inside a vacation interval.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::calendar::{DateRange, HolidaySet, VacationInterval, in_vacation};

/// The weekday on which classes never run.
pub const WEEKLY_OFF_DAY: Weekday = Weekday::Sun;

/// Why a day does or does not count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    Working,
    WeeklyOff,
    Holiday,
    Vacation,
}

/// Classifies a single day. Weekly off-days win over holidays, and holidays
/// over vacations, so a day is tallied once.
pub fn classify_day(
    day: NaiveDate,
    holidays: &HolidaySet,
    vacations: &[VacationInterval],
) -> DayKind {
    if day.weekday() == WEEKLY_OFF_DAY {
        DayKind::WeeklyOff
    } else if holidays.contains(day) {
        DayKind::Holiday
    } else if in_vacation(vacations, day) {
        DayKind::Vacation
    } else {
        DayKind::Working
    }
}

pub fn is_working_day(day: NaiveDate, holidays: &HolidaySet, vacations: &[VacationInterval]) -> bool {
    classify_day(day, holidays, vacations) == DayKind::Working
}

/// Counts working days in `range`, both ends inclusive.
///
/// Returns 0 for a reversed range.
pub fn count_working_days(
    range: DateRange,
    holidays: &HolidaySet,
    vacations: &[VacationInterval],
) -> u32 {
    if range.is_empty() {
        return 0;
    }

    let count = range
        .days()
        .filter(|day| is_working_day(*day, holidays, vacations))
        .count();

    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Per-kind day totals for a range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DayBreakdown {
    pub working: u32,
    pub weekly_off: u32,
    pub holidays: u32,
    pub vacation: u32,
}

impl DayBreakdown {
    pub const fn total(&self) -> u32 {
        self.working + self.weekly_off + self.holidays + self.vacation
    }
}

/// Tallies every day of `range` by [`DayKind`].
pub fn breakdown(
    range: DateRange,
    holidays: &HolidaySet,
    vacations: &[VacationInterval],
) -> DayBreakdown {
    let mut totals = DayBreakdown::default();
    if range.is_empty() {
        return totals;
    }

    for day in range.days() {
        let kind = classify_day(day, holidays, vacations);
        match kind {
            DayKind::Working => totals.working += 1,
            DayKind::WeeklyOff => totals.weekly_off += 1,
            DayKind::Holiday => totals.holidays += 1,
            DayKind::Vacation => totals.vacation += 1,
        }
        if kind != DayKind::Working {
            tracing::trace!(%day, ?kind, "excluded day");
        }
    }
    totals
}
