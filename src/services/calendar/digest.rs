use std::collections::BTreeMap;

use crate::models::calendar_day::CalendarDay;
use crate::models::duration_category::DurationCategory;
use crate::models::event::Event;
use crate::services::classifier::{classify_batch, ClassifiedEvent};
use crate::utils::date::month_bounds;

/// One month of observances, summarized for a newsletter-style overview.
///
/// Short events are keyed by the first day they appear in the month. Extended
/// and month-long events are listed once, separately, instead of being
/// repeated under every day they cover.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthDigest<'a> {
    pub year: i32,
    pub month: u32,
    pub regular: BTreeMap<u32, Vec<ClassifiedEvent<'a>>>,
    pub extended: Vec<ClassifiedEvent<'a>>,
}

impl<'a> MonthDigest<'a> {
    /// Returns `None` for an invalid month.
    pub fn build(year: i32, month: u32, events: &'a [Event]) -> Option<Self> {
        let (first, last) = month_bounds(year, month)?;
        let mut regular: BTreeMap<u32, Vec<ClassifiedEvent<'a>>> = BTreeMap::new();
        let mut extended = Vec::new();

        for classified in classify_batch(events).accepted {
            if !classified.classification.overlaps(first, last) {
                continue;
            }

            match classified.category() {
                DurationCategory::Short => {
                    let shown_on: CalendarDay = classified.classification.start.max(first);
                    regular.entry(shown_on.day()).or_default().push(classified);
                }
                DurationCategory::Extended | DurationCategory::MonthLong => {
                    extended.push(classified)
                }
            }
        }

        Some(Self {
            year,
            month,
            regular,
            extended,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.regular.is_empty() && self.extended.is_empty()
    }

    /// Short events first shown on `day` of this month.
    pub fn regular_on(&self, day: u32) -> &[ClassifiedEvent<'a>] {
        self.regular.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }
}
