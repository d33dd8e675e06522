//! Display projection for the event list and detail views.

use serde::Serialize;

use crate::models::calendar_day::CalendarDay;
use crate::models::duration_category::DurationCategory;
use crate::models::event::Event;
use crate::services::calendar::group_for_day;
use crate::services::classifier::{ClassifiedEvent, Classification};
use crate::utils::date::format_date;

/// Fields a list renderer shows for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventDisplay {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub start: String,
    pub end: String,
    pub duration_days: i64,
    pub duration_category: DurationCategory,
    pub also_known_as: Vec<String>,
    pub source_urls: Vec<String>,
    pub details: Option<String>,
}

impl EventDisplay {
    pub fn from_event(event: &Event, classification: &Classification, date_format: &str) -> Self {
        Self {
            id: event.id.clone(),
            name: event.name.trim().to_string(),
            category: event.category.clone(),
            start: format_date(classification.start, date_format),
            end: format_date(classification.end, date_format),
            duration_days: classification.duration_days,
            duration_category: classification.category,
            also_known_as: event.also_known_as().into_iter().map(String::from).collect(),
            source_urls: event.source_urls.clone(),
            details: event.details().map(String::from),
        }
    }

    pub fn from_classified(classified: &ClassifiedEvent<'_>, date_format: &str) -> Self {
        Self::from_event(classified.event, &classified.classification, date_format)
    }

    /// The start date alone for a one-day event, "start - end" otherwise.
    pub fn date_range_label(&self) -> String {
        if self.start == self.end {
            self.start.clone()
        } else {
            format!("{} - {}", self.start, self.end)
        }
    }
}

/// View model for the per-day event list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayListing {
    pub date: String,
    pub short: Vec<EventDisplay>,
    pub extended: Vec<EventDisplay>,
}

impl DayListing {
    pub fn build(day: CalendarDay, events: &[Event], date_format: &str) -> Self {
        let groups = group_for_day(day, events);
        let project = |bucket: &[ClassifiedEvent<'_>]| -> Vec<EventDisplay> {
            bucket
                .iter()
                .map(|classified| EventDisplay::from_classified(classified, date_format))
                .collect()
        };

        Self {
            date: format_date(day, "long"),
            short: project(&groups.short),
            extended: project(&groups.extended),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.short.is_empty() && self.extended.is_empty()
    }
}
