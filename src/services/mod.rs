// Service module exports

pub mod calendar;
pub mod classifier;
pub mod display;
pub mod event;
pub mod settings;
