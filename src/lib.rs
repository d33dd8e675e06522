// Observance Calendar Library
// Event classification core shared by the calendar grid and the day list

pub mod error;
pub mod models;
pub mod services;
pub mod utils;
