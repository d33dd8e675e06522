//! Date normalization and calendar arithmetic.
//!
//! Timezone policy: the calendar day of a stored instant is its date in UTC.
//! The backend stores observance dates as UTC midnight, so the UTC date is the
//! day the record means. The viewer's local offset is never consulted, which
//! keeps every comparison in the crate a comparison of [`CalendarDay`] values.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::{ClassificationError, ClassificationResult};
use crate::models::calendar_day::CalendarDay;

/// Offset-free timestamp layouts. The backend's `isoformat()` output for
/// stored UTC values has no offset and is read as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Convert a serialized timestamp or date into the calendar day it denotes
/// in UTC.
///
/// Accepts RFC 3339 timestamps with an offset, naive ISO-8601 date-times
/// (treated as UTC) and plain `YYYY-MM-DD` dates.
///
/// # Examples
/// ```
/// use observance_calendar::utils::date::normalize;
///
/// let day = normalize("2024-03-10T22:30:00-05:00").unwrap();
/// assert_eq!(day.to_string(), "2024-03-11");
/// ```
pub fn normalize(raw: &str) -> ClassificationResult<CalendarDay> {
    let value = raw.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(normalize_instant(&instant));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(normalize_instant(&naive.and_utc()));
        }
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(CalendarDay::from)
        .map_err(|_| ClassificationError::data_integrity("", format!("unparseable date '{raw}'")))
}

/// The UTC calendar day of an instant, whatever zone it is expressed in.
pub fn normalize_instant<Tz: TimeZone>(instant: &DateTime<Tz>) -> CalendarDay {
    instant.with_timezone(&Utc).date_naive().into()
}

/// Number of days in the given month, or `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };

    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// First and last calendar day of a month.
pub fn month_bounds(year: i32, month: u32) -> Option<(CalendarDay, CalendarDay)> {
    let last = days_in_month(year, month)?;
    Some((
        CalendarDay::new(year, month, 1)?,
        CalendarDay::new(year, month, last)?,
    ))
}

/// Format a calendar day for display.
///
/// # Arguments
/// * `day` - The day to format
/// * `date_format` - "MM/DD/YYYY", "DD/MM/YYYY", "YYYY-MM-DD" or "long"
pub fn format_date(day: CalendarDay, date_format: &str) -> String {
    let date = day.to_naive_date();
    if date_format.eq_ignore_ascii_case("long") {
        date.format("%B %-d, %Y").to_string()
    } else if date_format.starts_with("DD/MM") || date_format.starts_with("dd/mm") {
        date.format("%d/%m/%Y").to_string()
    } else if date_format.starts_with("YYYY") || date_format.starts_with("yyyy") {
        date.format("%Y-%m-%d").to_string()
    } else {
        date.format("%m/%d/%Y").to_string()
    }
}

/// Display formats understood by [`format_date`].
pub fn is_known_date_format(date_format: &str) -> bool {
    ["MM/DD/YYYY", "DD/MM/YYYY", "YYYY-MM-DD", "long"]
        .iter()
        .any(|known| known.eq_ignore_ascii_case(date_format))
}
