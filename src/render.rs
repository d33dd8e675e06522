//! Plain-text rendering for the command line.

use std::fmt::Write;

use anyhow::{anyhow, Result};

use observance_calendar::models::calendar_day::CalendarDay;
use observance_calendar::models::event::Event;
use observance_calendar::models::settings::Settings;
use observance_calendar::services::calendar::{MonthDigest, MonthGrid};
use observance_calendar::services::classifier::classify;
use observance_calendar::services::display::{DayListing, EventDisplay};
use observance_calendar::services::event::EventService;

const DAY_NAMES: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

pub fn month(year: i32, month: u32, events: &[Event], settings: &Settings) -> Result<String> {
    let grid = MonthGrid::build(year, month, settings.first_day_of_week, events)
        .ok_or_else(|| anyhow!("Invalid month {}-{:02}", year, month))?;
    let digest = MonthDigest::build(year, month, events)
        .ok_or_else(|| anyhow!("Invalid month {}-{:02}", year, month))?;

    let mut out = String::new();
    let _ = writeln!(out, "{:04}-{:02}", year, month);

    for column in 0..7 {
        let name = DAY_NAMES[(usize::from(settings.first_day_of_week) + column) % 7];
        let _ = write!(out, " {:>3}", name);
    }
    out.push('\n');

    for week in &grid.weeks {
        for cell in week {
            match cell {
                Some(cell) if cell.marked => {
                    let _ = write!(out, " {:>2}*", cell.day.day());
                }
                Some(cell) => {
                    let _ = write!(out, " {:>2} ", cell.day.day());
                }
                None => out.push_str("    "),
            }
        }
        out.push('\n');
    }

    if digest.is_empty() {
        out.push_str("\nNo events this month.\n");
        return Ok(out);
    }

    if !digest.regular.is_empty() {
        out.push_str("\nEvents:\n");
        for (day, bucket) in &digest.regular {
            for classified in bucket {
                let _ = writeln!(out, "  {:>2}  {}", day, classified.event.name.trim());
            }
        }
    }

    if !digest.extended.is_empty() {
        out.push_str("\nExtended observances:\n");
        for classified in &digest.extended {
            let display = EventDisplay::from_classified(classified, &settings.date_format);
            let _ = writeln!(out, "  {} ({})", display.name, display.date_range_label());
        }
    }

    Ok(out)
}

pub fn day(day: CalendarDay, events: &[Event], settings: &Settings) -> String {
    let listing = DayListing::build(day, events, &settings.date_format);

    let mut out = String::new();
    let _ = writeln!(out, "{}", listing.date);

    if listing.is_empty() {
        out.push_str("No events for this date.\n");
        return out;
    }

    for (title, bucket) in [("Events", &listing.short), ("Extended observances", &listing.extended)] {
        if bucket.is_empty() {
            continue;
        }
        let _ = writeln!(out, "\n{}:", title);
        for display in bucket {
            write_event(&mut out, display);
        }
    }

    out
}

pub fn upcoming(today: CalendarDay, limit: usize, events: &[Event], settings: &Settings) -> String {
    let service = EventService::new(events);
    let upcoming = service.upcoming(today, limit);

    let mut out = String::new();
    if upcoming.is_empty() {
        out.push_str("No upcoming events.\n");
        return out;
    }

    for event in upcoming {
        // Already filtered to well-formed events by the query.
        if let Ok(classification) = classify(event) {
            let display = EventDisplay::from_event(event, &classification, &settings.date_format);
            let _ = writeln!(out, "{}  {}", display.date_range_label(), display.name);
        }
    }

    out
}

fn write_event(out: &mut String, display: &EventDisplay) {
    let _ = writeln!(out, "  {} ({})", display.name, display.date_range_label());
    if let Some(category) = &display.category {
        let _ = writeln!(out, "    {}", category);
    }
    if !display.also_known_as.is_empty() {
        let _ = writeln!(out, "    Also known as: {}", display.also_known_as.join(", "));
    }
    for url in &display.source_urls {
        let _ = writeln!(out, "    Source: {}", url);
    }
}
