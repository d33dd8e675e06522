// Test fixtures - reusable test data
// Observance records shaped like the events API returns them

#![allow(dead_code)]

use observance_calendar::models::calendar_day::CalendarDay;
use observance_calendar::models::event::Event;

/// Sample days for testing
pub mod days {
    use super::*;

    pub fn day(year: i32, month: u32, day: u32) -> CalendarDay {
        CalendarDay::new(year, month, day).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> CalendarDay {
        day(2024, 2, 29)
    }

    /// Mar 25, 2024 (Holi)
    pub fn holi_2024() -> CalendarDay {
        day(2024, 3, 25)
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// A single-day observance
    pub fn holi() -> Event {
        Event::builder()
            .id("holi")
            .name("Holi")
            .category("Hinduism")
            .on("2024-03-25T00:00:00")
            .alternate_name("Festival of Colors")
            .alternate_name("Holi")
            .source_url("https://example.org/holi")
            .build()
            .unwrap()
    }

    /// A month-long observance in a leap-year February
    pub fn black_history_month() -> Event {
        Event::builder()
            .id("bhm")
            .name("Black History Month")
            .category("Month-Long Observances")
            .start_date("2024-02-01T00:00:00")
            .end_date("2024-02-29T00:00:00")
            .build()
            .unwrap()
    }

    /// A multi-week observance crossing a month boundary
    pub fn ramadan() -> Event {
        Event::builder()
            .id("ramadan")
            .name("Ramadan")
            .category("Islam")
            .start_date("2024-03-11T00:00:00")
            .end_date("2024-04-09T00:00:00")
            .alternate_name("Ramazan")
            .build()
            .unwrap()
    }

    /// End precedes start
    pub fn backwards() -> Event {
        Event::new("backwards", "Backwards", "2024-03-20", "2024-03-10").unwrap()
    }

    /// No end date at all
    pub fn undated() -> Event {
        Event::builder()
            .id("undated")
            .name("Full Moon Days")
            .start_date("2024-03-25")
            .build()
            .unwrap()
    }

    pub fn all() -> Vec<Event> {
        vec![holi(), black_history_month(), ramadan(), backwards(), undated()]
    }
}

/// API payload covering February to April 2024, including two bad records.
pub const API_PAYLOAD: &str = r#"{
  "events": [
    {
      "_id": "65a1",
      "name": "Black History Month",
      "category": "Month-Long Observances",
      "start_date": "2024-02-01T00:00:00",
      "end_date": "2024-02-29T00:00:00",
      "alternate_names": ["African Heritage Month"],
      "source_urls": "https://example.org/bhm"
    },
    {
      "_id": "65a2",
      "name": "Family Day",
      "category": "National Days",
      "start_date": "2024-02-19T00:00:00",
      "end_date": "2024-02-19T00:00:00",
      "alternate_names": ["Family Day", "Ontario Family Day"],
      "source_urls": ["https://example.org/family-a", "https://example.org/family-b"]
    },
    {
      "_id": "65a3",
      "name": "Lent",
      "category": "Christianity",
      "start_date": "2024-02-14T00:00:00",
      "end_date": "2024-03-28T00:00:00"
    },
    {
      "_id": "65a4",
      "name": "Purim",
      "category": "Judaism",
      "start_date": "2024-03-23T00:00:00Z",
      "end_date": "2024-03-24T00:00:00Z"
    },
    {
      "_id": "65a5",
      "name": "Broken Record",
      "start_date": "2024-02-20T00:00:00",
      "end_date": "2024-02-10T00:00:00"
    },
    {
      "_id": "65a6",
      "name": "Unscheduled",
      "start_date": "to be announced"
    },
    {
      "_id": "65a7",
      "category": "Missing name"
    }
  ]
}"#;
