//! Calendar view models.
//! Grid marking, per-day grouping and the monthly digest all sit on top of
//! the classifier in `services::classifier`.

pub mod digest;
pub mod grouper;
pub mod marker;

pub use digest::MonthDigest;
pub use grouper::{group_for_day, DayGroups};
pub use marker::{is_marked, CalendarMarker, MonthGrid};
