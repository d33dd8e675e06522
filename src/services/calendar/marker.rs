use chrono::Datelike;

use crate::models::calendar_day::CalendarDay;
use crate::models::event::Event;
use crate::services::classifier::{classify, classify_batch, ClassifiedEvent};
use crate::utils::date::days_in_month;

/// Whether a month-grid cell should carry the "has event" marker.
///
/// A cell is marked when at least one event that is not month-long covers
/// it. Month-long observances never mark cells, otherwise every cell of their
/// month would be highlighted. Events that fail classification are ignored.
pub fn is_marked(day: CalendarDay, events: &[Event]) -> bool {
    events.iter().any(|event| {
        classify(event)
            .map(|c| c.category.marks_calendar_cells() && c.covers(day))
            .unwrap_or(false)
    })
}

/// Marker over a pre-classified event set, for rendering many cells.
pub struct CalendarMarker<'a> {
    markable: Vec<ClassifiedEvent<'a>>,
}

impl<'a> CalendarMarker<'a> {
    pub fn new(events: &'a [Event]) -> Self {
        let markable = classify_batch(events)
            .accepted
            .into_iter()
            .filter(|classified| classified.category().marks_calendar_cells())
            .collect();

        Self { markable }
    }

    pub fn is_marked(&self, day: CalendarDay) -> bool {
        self.markable.iter().any(|classified| classified.covers(day))
    }

    /// Events responsible for marking `day`, in input order.
    pub fn events_marking(&self, day: CalendarDay) -> impl Iterator<Item = &'a Event> + '_ {
        self.markable
            .iter()
            .filter(move |classified| classified.covers(day))
            .map(|classified| classified.event)
    }
}

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub day: CalendarDay,
    pub marked: bool,
}

/// A month laid out in weeks of seven cells.
///
/// Cells before the 1st and after the last day of the month are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub first_day_of_week: u8,
    pub weeks: Vec<[Option<GridCell>; 7]>,
}

impl MonthGrid {
    /// Lay out and mark a month.
    ///
    /// # Arguments
    /// * `first_day_of_week` - 0 = Sunday, 1 = Monday, ... 6 = Saturday
    ///
    /// Returns `None` for an invalid month or weekday.
    pub fn build(year: i32, month: u32, first_day_of_week: u8, events: &[Event]) -> Option<Self> {
        if first_day_of_week > 6 {
            return None;
        }

        let days = days_in_month(year, month)?;
        let first = CalendarDay::new(year, month, 1)?;
        let offset = (first.to_naive_date().weekday().num_days_from_sunday() + 7
            - u32::from(first_day_of_week))
            % 7;

        let marker = CalendarMarker::new(events);
        let total_cells = offset + days;
        let weeks_needed = total_cells.div_ceil(7);

        let mut weeks = Vec::with_capacity(weeks_needed as usize);
        for week in 0..weeks_needed {
            let mut row = [None; 7];
            for (column, cell) in row.iter_mut().enumerate() {
                let index = week * 7 + column as u32;
                if index < offset || index >= total_cells {
                    continue;
                }
                let day = CalendarDay::new(year, month, index - offset + 1)?;
                *cell = Some(GridCell {
                    day,
                    marked: marker.is_marked(day),
                });
            }
            weeks.push(row);
        }

        Some(Self {
            year,
            month,
            first_day_of_week,
            weeks,
        })
    }

    /// In-month cells in calendar order.
    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.weeks.iter().flatten().flatten()
    }

    pub fn marked_days(&self) -> Vec<CalendarDay> {
        self.cells()
            .filter(|cell| cell.marked)
            .map(|cell| cell.day)
            .collect()
    }
}
