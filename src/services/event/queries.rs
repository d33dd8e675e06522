use super::EventService;
use crate::models::calendar_day::CalendarDay;
use crate::models::event::Event;
use crate::utils::date::month_bounds;
use anyhow::{anyhow, Result};

/// Default number of events returned by [`EventService::upcoming`].
pub const DEFAULT_UPCOMING_LIMIT: usize = 30;

impl<'a> EventService<'a> {
    /// List every well-formed event ordered by start date.
    pub fn list_all(&self) -> Vec<&'a Event> {
        self.classified_by_start()
            .into_iter()
            .map(|classified| classified.event)
            .collect()
    }

    /// Events whose span shares at least one day with the month, ordered by
    /// start date. This includes events that began earlier or end later.
    pub fn find_by_month(&self, year: i32, month: u32) -> Result<Vec<&'a Event>> {
        let (first, last) = month_bounds(year, month)
            .ok_or_else(|| anyhow!("Invalid month {}-{:02}", year, month))?;

        Ok(self
            .classified_by_start()
            .into_iter()
            .filter(|classified| classified.classification.overlaps(first, last))
            .map(|classified| classified.event)
            .collect())
    }

    /// Events covering `day`, ordered by start date.
    pub fn find_by_day(&self, day: CalendarDay) -> Vec<&'a Event> {
        self.classified_by_start()
            .into_iter()
            .filter(|classified| classified.covers(day))
            .map(|classified| classified.event)
            .collect()
    }

    /// Events that have not ended before `today`, ordered by start date and
    /// capped at `limit`.
    pub fn upcoming(&self, today: CalendarDay, limit: usize) -> Vec<&'a Event> {
        self.classified_by_start()
            .into_iter()
            .filter(|classified| classified.classification.end >= today)
            .take(limit)
            .map(|classified| classified.event)
            .collect()
    }
}
