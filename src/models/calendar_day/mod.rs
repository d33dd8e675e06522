// CalendarDay module
// A date with no time-of-day or timezone attached

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::ClassificationError;

/// A (year, month, day) triple.
///
/// Field order matters: the derived `Ord` compares year, then month, then
/// day, which is chronological order. Equality never involves an instant, so
/// two values compare equal regardless of the timezone they were read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDay {
    /// Create a calendar day, rejecting dates that do not exist
    ///
    /// # Examples
    /// ```
    /// use observance_calendar::models::calendar_day::CalendarDay;
    ///
    /// assert!(CalendarDay::new(2024, 2, 29).is_some());
    /// assert!(CalendarDay::new(2023, 2, 29).is_none());
    /// ```
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::from)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn to_naive_date(self) -> NaiveDate {
        // Every CalendarDay is built from a valid NaiveDate.
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).unwrap_or(NaiveDate::MIN)
    }

    /// Whole days from `self` to `other` (negative when `other` is earlier).
    pub fn days_until(&self, other: CalendarDay) -> i64 {
        other
            .to_naive_date()
            .signed_duration_since(self.to_naive_date())
            .num_days()
    }

    /// The following calendar day, if representable.
    pub fn succ(&self) -> Option<Self> {
        self.to_naive_date().succ_opt().map(Self::from)
    }

    pub fn is_same_month(&self, other: &CalendarDay) -> bool {
        self.year == other.year && self.month == other.month
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl From<CalendarDay> for NaiveDate {
    fn from(day: CalendarDay) -> Self {
        day.to_naive_date()
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDay {
    type Err = ClassificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::utils::date::normalize(s)
    }
}
