//! Interface to the event fetch layer.
//!
//! The transport behind these calls (HTTP, retries, auth) belongs to the
//! caller. Classification only ever sees the events a fetch produced, and a
//! failed fetch is presented to it as an empty collection.

use std::path::Path;

use anyhow::Result;

use super::ingest::load_events;
use super::EventService;
use crate::models::calendar_day::CalendarDay;
use crate::models::event::Event;

#[cfg_attr(test, mockall::automock)]
pub trait EventSource {
    fn fetch_by_month(&self, year: i32, month: u32) -> Result<Vec<Event>>;
    fn fetch_by_day(&self, day: CalendarDay) -> Result<Vec<Event>>;
    fn fetch_all(&self) -> Result<Vec<Event>>;
}

/// Events from a fetch, with failure reduced to a flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchOutcome {
    pub events: Vec<Event>,
    pub failed: bool,
}

impl FetchOutcome {
    pub fn from_result(result: Result<Vec<Event>>) -> Self {
        match result {
            Ok(events) => Self {
                events,
                failed: false,
            },
            Err(err) => {
                log::error!("Event fetch failed: {:#}", err);
                Self {
                    events: Vec::new(),
                    failed: true,
                }
            }
        }
    }
}

/// An [`EventSource`] answering from a collection held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventSource {
    events: Vec<Event>,
}

impl InMemoryEventSource {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Load the collection from a JSON payload on disk.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        Ok(Self::new(load_events(path)?))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn service(&self) -> EventService<'_> {
        EventService::new(&self.events)
    }
}

impl EventSource for InMemoryEventSource {
    fn fetch_by_month(&self, year: i32, month: u32) -> Result<Vec<Event>> {
        Ok(self
            .service()
            .find_by_month(year, month)?
            .into_iter()
            .cloned()
            .collect())
    }

    fn fetch_by_day(&self, day: CalendarDay) -> Result<Vec<Event>> {
        Ok(self.service().find_by_day(day).into_iter().cloned().collect())
    }

    fn fetch_all(&self) -> Result<Vec<Event>> {
        Ok(self.service().list_all().into_iter().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::calendar::{group_for_day, MonthGrid};
    use anyhow::anyhow;

    fn sample_source() -> InMemoryEventSource {
        InMemoryEventSource::new(vec![
            Event::new("a", "Easter", "2024-03-31", "2024-03-31").unwrap(),
            Event::new("b", "Passover", "2024-04-22", "2024-04-30").unwrap(),
        ])
    }

    #[test]
    fn test_in_memory_fetches() {
        let source = sample_source();
        assert_eq!(source.len(), 2);

        let march = source.fetch_by_month(2024, 3).unwrap();
        assert_eq!(march.len(), 1);
        assert_eq!(march[0].id, "a");

        let day = CalendarDay::new(2024, 4, 25).unwrap();
        assert_eq!(source.fetch_by_day(day).unwrap()[0].id, "b");
        assert_eq!(source.fetch_all().unwrap().len(), 2);
        assert!(source.fetch_by_month(2024, 0).is_err());
    }

    #[test]
    fn test_failed_fetch_classifies_like_empty_fetch() {
        let mut mock = MockEventSource::new();
        mock.expect_fetch_by_month()
            .returning(|_, _| Err(anyhow!("connection refused")));

        let failed = FetchOutcome::from_result(mock.fetch_by_month(2024, 3));
        let empty = FetchOutcome::from_result(Ok(Vec::new()));

        assert!(failed.failed);
        assert!(!empty.failed);
        assert_eq!(
            MonthGrid::build(2024, 3, 0, &failed.events),
            MonthGrid::build(2024, 3, 0, &empty.events)
        );

        let day = CalendarDay::new(2024, 3, 1).unwrap();
        assert!(group_for_day(day, &failed.events).is_empty());
    }

    #[test]
    fn test_mock_source_feeds_grouper() {
        let mut mock = MockEventSource::new();
        mock.expect_fetch_by_day().times(1).returning(|_| {
            Ok(vec![Event::new("c", "Vesak", "2024-05-22", "2024-05-22").unwrap()])
        });

        let day = CalendarDay::new(2024, 5, 22).unwrap();
        let outcome = FetchOutcome::from_result(mock.fetch_by_day(day));
        let groups = group_for_day(day, &outcome.events);
        assert_eq!(groups.short.len(), 1);
    }
}
