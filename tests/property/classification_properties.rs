// Property-based tests for classification, marking and grouping
// Random spans are generated as calendar days and serialized the way the API does

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use observance_calendar::models::calendar_day::CalendarDay;
use observance_calendar::models::duration_category::DurationCategory;
use observance_calendar::models::event::Event;
use observance_calendar::services::calendar::{group_for_day, is_marked};
use observance_calendar::services::classifier::classify;
use observance_calendar::utils::date::normalize;

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2020..2030i32, 1..=12u32, 1..=28u32)
        .prop_map(|(year, month, day)| NaiveDate::from_ymd_opt(year, month, day).unwrap())
}

fn event_between(id: usize, start: NaiveDate, end: NaiveDate) -> Event {
    Event::new(
        id.to_string(),
        format!("Event {id}"),
        format!("{}T00:00:00", start.format("%Y-%m-%d")),
        format!("{}T00:00:00", end.format("%Y-%m-%d")),
    )
    .unwrap()
}

fn events_strategy() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec((date_strategy(), -5i64..60), 0..12).prop_map(|spans| {
        spans
            .into_iter()
            .enumerate()
            .map(|(id, (start, length))| event_between(id, start, start + Duration::days(length)))
            .collect()
    })
}

proptest! {
    /// Property: classifying the same event twice gives the same answer
    #[test]
    fn prop_classify_is_deterministic(start in date_strategy(), length in 0i64..90) {
        let event = event_between(0, start, start + Duration::days(length));
        prop_assert_eq!(classify(&event), classify(&event));
    }

    /// Property: duration is the inclusive day count
    #[test]
    fn prop_duration_is_inclusive(start in date_strategy(), length in 0i64..400) {
        let event = event_between(0, start, start + Duration::days(length));
        let classification = classify(&event).unwrap();
        prop_assert_eq!(classification.duration_days, length + 1);
    }

    /// Property: the short/extended threshold only depends on duration
    /// unless the span has the month-long shape
    #[test]
    fn prop_category_thresholds(start in date_strategy(), length in 0i64..90) {
        let event = event_between(0, start, start + Duration::days(length));
        let classification = classify(&event).unwrap();
        match classification.category {
            DurationCategory::Short => prop_assert!(classification.duration_days < 6),
            DurationCategory::Extended => prop_assert!(classification.duration_days >= 6),
            DurationCategory::MonthLong => {
                prop_assert_eq!(classification.start.day(), 1);
                prop_assert!(classification.end.day() >= 28);
                prop_assert!(classification.start.is_same_month(&classification.end));
            }
        }
    }

    /// Property: a reversed span is always rejected
    #[test]
    fn prop_reversed_span_is_rejected(start in date_strategy(), back in 1i64..60) {
        let event = event_between(0, start, start - Duration::days(back));
        prop_assert!(classify(&event).is_err());
    }

    /// Property: normalizing a day's own representation is a fixed point
    #[test]
    fn prop_normalize_is_idempotent(date in date_strategy(), hour in 0u32..24) {
        let raw = format!("{}T{:02}:30:00", date.format("%Y-%m-%d"), hour);
        let first = normalize(&raw).unwrap();
        let second = normalize(&first.to_string()).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(first, CalendarDay::from(date));
    }

    /// Property: grouping never returns an event that does not cover the day
    #[test]
    fn prop_group_only_returns_covering_events(events in events_strategy(), probe in date_strategy()) {
        let day = CalendarDay::from(probe);
        let groups = group_for_day(day, &events);
        for classified in groups.short.iter().chain(groups.extended.iter()) {
            prop_assert!(classified.covers(day));
        }
    }

    /// Property: a marked day is covered by some non-month-long event that
    /// also appears in that day's list
    #[test]
    fn prop_marked_day_has_listed_event(events in events_strategy(), probe in date_strategy()) {
        let day = CalendarDay::from(probe);
        let groups = group_for_day(day, &events);
        let has_markable = groups
            .short
            .iter()
            .chain(groups.extended.iter())
            .any(|classified| classified.category() != DurationCategory::MonthLong);
        prop_assert_eq!(is_marked(day, &events), has_markable);
    }
}

#[cfg(test)]
mod additional_tests {
    use super::*;

    #[test]
    fn test_month_long_day_inside_is_not_marked() {
        let start = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 4, 30).unwrap();
        let events = vec![event_between(0, start, end)];

        for offset in 1..29 {
            let day = CalendarDay::from(start + Duration::days(offset));
            assert!(!is_marked(day, &events));
        }
    }
}
