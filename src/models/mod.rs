// Module exports for models

pub mod calendar_day;
pub mod duration_category;
pub mod event;
pub mod settings;
