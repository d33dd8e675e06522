//! Error types for event classification.

use thiserror::Error;

/// Per-event failures raised while normalizing or classifying an event.
///
/// These never abort a batch: callers collect them next to the accepted
/// events and drop the offending record from the grid and the list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassificationError {
    #[error("Event '{event_id}' has inconsistent dates: {reason}")]
    DataIntegrity { event_id: String, reason: String },

    #[error("Event '{event_id}' is missing required field '{field}'")]
    MissingField {
        event_id: String,
        field: &'static str,
    },
}

impl ClassificationError {
    pub fn data_integrity(event_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DataIntegrity {
            event_id: event_id.into(),
            reason: reason.into(),
        }
    }

    pub fn missing_field(event_id: impl Into<String>, field: &'static str) -> Self {
        Self::MissingField {
            event_id: event_id.into(),
            field,
        }
    }

    /// Attach an event id to an error raised before the event was known.
    pub fn for_event(self, id: &str) -> Self {
        match self {
            Self::DataIntegrity { reason, .. } => Self::data_integrity(id, reason),
            Self::MissingField { field, .. } => Self::missing_field(id, field),
        }
    }

    pub fn event_id(&self) -> &str {
        match self {
            Self::DataIntegrity { event_id, .. } | Self::MissingField { event_id, .. } => event_id,
        }
    }
}

/// Result type alias for classification operations.
pub type ClassificationResult<T> = Result<T, ClassificationError>;
