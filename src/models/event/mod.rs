// Event module
// Observance record as delivered by the events API

pub mod source_urls;

use serde::{Deserialize, Serialize};

/// An observance record.
///
/// Records are created by the backend and are read-only here. The date fields
/// keep their serialized form so that a single malformed value is reported
/// against its own event during classification instead of failing the
/// deserialization of a whole batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_names")]
    pub alternate_names: Vec<String>,
    #[serde(
        default,
        alias = "source_url",
        deserialize_with = "source_urls::deserialize"
    )]
    pub source_urls: Vec<String>,
    #[serde(default)]
    pub additional_details: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

fn deserialize_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Examples
    /// ```
    /// use observance_calendar::models::event::Event;
    ///
    /// let event = Event::new("evt-1", "Diwali", "2024-11-01", "2024-11-05").unwrap();
    /// assert_eq!(event.name, "Diwali");
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Result<Self, String> {
        Self::builder()
            .id(id)
            .name(name)
            .start_date(start_date)
            .end_date(end_date)
            .build()
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the fields that do not involve dates.
    /// Date problems are reported by the classifier.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Event name cannot be empty".to_string());
        }

        Ok(())
    }

    /// Alternate names for an "also known as" line.
    ///
    /// The primary name and repeated entries are removed (compared trimmed and
    /// case-insensitively); the remaining order is preserved.
    pub fn also_known_as(&self) -> Vec<&str> {
        let primary = normalize_name(&self.name);
        let mut seen: Vec<String> = vec![primary];
        let mut names = Vec::new();

        for name in &self.alternate_names {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                continue;
            }
            let key = normalize_name(trimmed);
            if seen.contains(&key) {
                continue;
            }
            seen.push(key);
            names.push(trimmed);
        }

        names
    }

    /// Long-form text for the detail view, preferring `additional_details`.
    pub fn details(&self) -> Option<&str> {
        non_blank(&self.additional_details).or_else(|| non_blank(&self.description))
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

fn non_blank(text: &Option<String>) -> Option<&str> {
    text.as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

/// Builder for creating events with optional fields
#[derive(Default)]
pub struct EventBuilder {
    id: Option<String>,
    name: Option<String>,
    category: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    alternate_names: Vec<String>,
    source_urls: Vec<String>,
    additional_details: Option<String>,
    description: Option<String>,
    image_url: Option<String>,
}

impl EventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the display name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the tradition or grouping supplied by the data source
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn start_date(mut self, start_date: impl Into<String>) -> Self {
        self.start_date = Some(start_date.into());
        self
    }

    pub fn end_date(mut self, end_date: impl Into<String>) -> Self {
        self.end_date = Some(end_date.into());
        self
    }

    /// Start and end on the same serialized value
    pub fn on(self, date: impl Into<String>) -> Self {
        let date = date.into();
        self.start_date(date.clone()).end_date(date)
    }

    pub fn alternate_name(mut self, name: impl Into<String>) -> Self {
        self.alternate_names.push(name.into());
        self
    }

    pub fn source_url(mut self, url: impl Into<String>) -> Self {
        self.source_urls.push(url.into());
        self
    }

    pub fn additional_details(mut self, details: impl Into<String>) -> Self {
        self.additional_details = Some(details.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, String> {
        let name = self.name.ok_or("Event name is required")?;

        let event = Event {
            id: self.id.unwrap_or_default(),
            name,
            category: self.category,
            start_date: self.start_date,
            end_date: self.end_date,
            alternate_names: self.alternate_names,
            source_urls: self.source_urls,
            additional_details: self.additional_details,
            description: self.description,
            image_url: self.image_url,
        };

        event.validate()?;
        Ok(event)
    }
}
