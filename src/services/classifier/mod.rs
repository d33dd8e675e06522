//! Event duration classification.
//!
//! Every consumer (month grid, day list, digest, display) asks this module
//! whether an event is short, extended or month-long. Nothing else in the
//! crate re-derives the thresholds.

use crate::error::{ClassificationError, ClassificationResult};
use crate::models::calendar_day::CalendarDay;
use crate::models::duration_category::{
    DurationCategory, EXTENDED_THRESHOLD_DAYS, MONTH_LONG_MIN_END_DAY,
};
use crate::models::event::Event;
use crate::utils::date::normalize;

/// The normalized span of an event and its derived category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub start: CalendarDay,
    pub end: CalendarDay,
    /// Inclusive of both endpoints, so always at least 1.
    pub duration_days: i64,
    pub category: DurationCategory,
}

impl Classification {
    /// Inclusive calendar-day containment.
    pub fn covers(&self, day: CalendarDay) -> bool {
        self.start <= day && day <= self.end
    }

    /// Whether the span shares at least one day with `[first, last]`.
    pub fn overlaps(&self, first: CalendarDay, last: CalendarDay) -> bool {
        self.start <= last && first <= self.end
    }

    pub fn is_single_day(&self) -> bool {
        self.duration_days == 1
    }
}

/// Classify one event.
///
/// # Errors
/// * `MissingField` when `start_date` or `end_date` is absent
/// * `DataIntegrity` when a date cannot be parsed or the end precedes the start
pub fn classify(event: &Event) -> ClassificationResult<Classification> {
    let start = required_day(event, event.start_date.as_deref(), "start_date")?;
    let end = required_day(event, event.end_date.as_deref(), "end_date")?;

    classify_span(start, end).map_err(|err| err.for_event(&event.id))
}

/// Classify a normalized span.
///
/// The month-long shape is checked before the day-count threshold: an event
/// running from the 1st to the 28th or later of one month is month-long even
/// though it is also more than six days.
pub fn classify_span(
    start: CalendarDay,
    end: CalendarDay,
) -> ClassificationResult<Classification> {
    if end < start {
        return Err(ClassificationError::data_integrity(
            "",
            format!("end date {end} is before start date {start}"),
        ));
    }

    let duration_days = start.days_until(end) + 1;

    let category = if start.day() == 1
        && end.day() >= MONTH_LONG_MIN_END_DAY
        && start.is_same_month(&end)
    {
        DurationCategory::MonthLong
    } else if duration_days < EXTENDED_THRESHOLD_DAYS {
        DurationCategory::Short
    } else {
        DurationCategory::Extended
    };

    Ok(Classification {
        start,
        end,
        duration_days,
        category,
    })
}

fn required_day(
    event: &Event,
    raw: Option<&str>,
    field: &'static str,
) -> ClassificationResult<CalendarDay> {
    match raw {
        Some(value) if !value.trim().is_empty() => {
            normalize(value).map_err(|err| err.for_event(&event.id))
        }
        _ => Err(ClassificationError::missing_field(event.id.clone(), field)),
    }
}

/// An event paired with its classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedEvent<'a> {
    pub event: &'a Event,
    pub classification: Classification,
}

impl<'a> ClassifiedEvent<'a> {
    pub fn category(&self) -> DurationCategory {
        self.classification.category
    }

    pub fn covers(&self, day: CalendarDay) -> bool {
        self.classification.covers(day)
    }
}

/// An event that could not be classified, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedEvent<'a> {
    pub event: &'a Event,
    pub error: ClassificationError,
}

/// Result of classifying a batch: accepted events keep input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedBatch<'a> {
    pub accepted: Vec<ClassifiedEvent<'a>>,
    pub rejected: Vec<RejectedEvent<'a>>,
}

impl<'a> ClassifiedBatch<'a> {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Classify every event, isolating failures.
///
/// A malformed event is logged and reported in `rejected`; it never stops
/// the rest of the batch from being classified.
pub fn classify_batch(events: &[Event]) -> ClassifiedBatch<'_> {
    let mut batch = ClassifiedBatch::default();

    for event in events {
        match classify(event) {
            Ok(classification) => batch.accepted.push(ClassifiedEvent {
                event,
                classification,
            }),
            Err(error) => {
                log::warn!("Skipping event '{}': {}", event.name, error);
                batch.rejected.push(RejectedEvent { event, error });
            }
        }
    }

    log::debug!(
        "Classified {} events ({} rejected)",
        batch.accepted.len(),
        batch.rejected.len()
    );

    batch
}
