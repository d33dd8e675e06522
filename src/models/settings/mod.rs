// Settings module
// Display and data-source preferences, persisted as TOML

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::services::event::queries::DEFAULT_UPCOMING_LIMIT;
use crate::utils::date::is_known_date_format;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// "MM/DD/YYYY", "DD/MM/YYYY", "YYYY-MM-DD" or "long"
    pub date_format: String,
    /// 0 = Sunday, 1 = Monday, ... 6 = Saturday
    pub first_day_of_week: u8,
    pub upcoming_limit: usize,
    /// JSON payload used when no `--events` file is given
    pub events_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            date_format: "MM/DD/YYYY".to_string(),
            first_day_of_week: 0, // Sunday
            upcoming_limit: DEFAULT_UPCOMING_LIMIT,
            events_file: None,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if !is_known_date_format(&self.date_format) {
            return Err(format!("Unknown date format '{}'", self.date_format));
        }

        if self.first_day_of_week > 6 {
            return Err(format!(
                "First day of week must be 0-6, got {}",
                self.first_day_of_week
            ));
        }

        if self.upcoming_limit == 0 {
            return Err("Upcoming limit must be at least 1".to_string());
        }

        Ok(())
    }
}
