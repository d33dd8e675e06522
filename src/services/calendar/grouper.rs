use crate::models::calendar_day::CalendarDay;
use crate::models::duration_category::DurationCategory;
use crate::models::event::Event;
use crate::services::classifier::{classify_batch, ClassifiedEvent};

/// Events covering one day, split into the list view's two buckets.
///
/// Month-long observances are listed with the extended ones; there is no
/// separate month-long bucket. Within a bucket events keep input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayGroups<'a> {
    pub short: Vec<ClassifiedEvent<'a>>,
    pub extended: Vec<ClassifiedEvent<'a>>,
}

impl<'a> DayGroups<'a> {
    pub fn is_empty(&self) -> bool {
        self.short.is_empty() && self.extended.is_empty()
    }

    pub fn len(&self) -> usize {
        self.short.len() + self.extended.len()
    }

    pub fn short_events(&self) -> impl Iterator<Item = &'a Event> + '_ {
        self.short.iter().map(|classified| classified.event)
    }

    pub fn extended_events(&self) -> impl Iterator<Item = &'a Event> + '_ {
        self.extended.iter().map(|classified| classified.event)
    }
}

/// Filter `events` to those covering `day` and partition them by duration.
///
/// An empty result is a normal outcome. Events that fail classification are
/// left out of both buckets.
pub fn group_for_day(day: CalendarDay, events: &[Event]) -> DayGroups<'_> {
    let mut groups = DayGroups::default();

    for classified in classify_batch(events).accepted {
        if !classified.covers(day) {
            continue;
        }

        match classified.category() {
            DurationCategory::Short => groups.short.push(classified),
            DurationCategory::Extended | DurationCategory::MonthLong => {
                groups.extended.push(classified)
            }
        }
    }

    groups
}
