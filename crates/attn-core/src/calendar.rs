//! Calendar value types: date ranges, vacation intervals and holiday sets.
//!
//! Every comparison here is by calendar day. Dates are `chrono::NaiveDate`,
//! which carries no time-of-day, so partial-day timestamps cannot leak into
//! range checks.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// An inclusive range of calendar days.
///
/// A range whose `start` is after its `end` is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Iterates every day from `start` to `end` inclusive.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

/// A vacation as entered: either endpoint may still be blank.
///
/// Incomplete intervals are inert and never contain a day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VacationInterval {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl VacationInterval {
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub const fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Returns true if `day` lies within `[start, end]`.
    pub fn contains(&self, day: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= day && day <= end,
            _ => false,
        }
    }
}

/// Returns true if any interval in `vacations` contains `day`.
pub fn in_vacation(vacations: &[VacationInterval], day: NaiveDate) -> bool {
    vacations.iter().any(|vacation| vacation.contains(day))
}

/// National holidays observed in 2025.
const NATIONAL_HOLIDAYS_2025: [(u32, u32); 8] = [
    (1, 1),
    (1, 26),
    (4, 14),
    (5, 1),
    (8, 15),
    (10, 2),
    (11, 14),
    (12, 25),
];

/// Non-working holiday dates, grouped by year.
///
/// The default set is the 2025 national calendar. Serialized as a flat,
/// sorted list of ISO dates so a configuration file can replace it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<NaiveDate>", into = "Vec<NaiveDate>")]
pub struct HolidaySet {
    by_year: BTreeMap<i32, BTreeSet<NaiveDate>>,
}

impl HolidaySet {
    /// Creates a set with no holidays at all.
    pub const fn empty() -> Self {
        Self {
            by_year: BTreeMap::new(),
        }
    }

    /// The built-in 2025 national holiday calendar.
    pub fn national_2025() -> Self {
        NATIONAL_HOLIDAYS_2025
            .iter()
            .filter_map(|&(month, day)| NaiveDate::from_ymd_opt(2025, month, day))
            .collect()
    }

    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.by_year.entry(date.year()).or_default().insert(date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.by_year
            .get(&date.year())
            .is_some_and(|dates| dates.contains(&date))
    }

    /// Years that have at least one holiday, ascending.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.by_year.keys().copied()
    }

    /// Holidays in `year`, ascending.
    pub fn in_year(&self, year: i32) -> impl Iterator<Item = NaiveDate> + '_ {
        self.by_year.get(&year).into_iter().flatten().copied()
    }

    /// All holidays, ascending.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.by_year.values().flatten().copied()
    }

    pub fn len(&self) -> usize {
        self.by_year.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_year.is_empty()
    }
}

impl Default for HolidaySet {
    fn default() -> Self {
        Self::national_2025()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        let mut set = Self::empty();
        for date in iter {
            set.insert(date);
        }
        set
    }
}

impl From<Vec<NaiveDate>> for HolidaySet {
    fn from(dates: Vec<NaiveDate>) -> Self {
        dates.into_iter().collect()
    }
}

impl From<HolidaySet> for Vec<NaiveDate> {
    fn from(set: HolidaySet) -> Self {
        set.iter().collect()
    }
}
