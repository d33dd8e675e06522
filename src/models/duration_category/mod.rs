// Duration category module
// Derived span classification of an event, never stored

use std::fmt;

use serde::Serialize;

/// Events shorter than this many inclusive days are `Short`.
pub const EXTENDED_THRESHOLD_DAYS: i64 = 6;

/// An event ending on or after this day of a month it started on the 1st of
/// is treated as covering the month.
pub const MONTH_LONG_MIN_END_DAY: u32 = 28;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DurationCategory {
    Short,
    Extended,
    MonthLong,
}

impl DurationCategory {
    /// Month-long observances are not painted on individual grid cells.
    pub fn marks_calendar_cells(&self) -> bool {
        !matches!(self, DurationCategory::MonthLong)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DurationCategory::Short => "short",
            DurationCategory::Extended => "extended",
            DurationCategory::MonthLong => "month-long",
        }
    }
}

impl fmt::Display for DurationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
