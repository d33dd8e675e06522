//! Event collection service.
//! Read-only queries over a loaded event set, the fetch collaborator
//! interface, and ingestion of API payloads.

use crate::models::event::Event;
use crate::services::classifier::{classify_batch, ClassifiedEvent};

pub mod ingest;
pub mod queries;
pub mod source;

/// Read-only query service over an in-memory event collection.
pub struct EventService<'a> {
    pub(crate) events: &'a [Event],
}

impl<'a> EventService<'a> {
    /// Create a new EventService over a borrowed collection
    pub fn new(events: &'a [Event]) -> Self {
        Self { events }
    }

    /// Classified events in start order; ties keep input order.
    pub(crate) fn classified_by_start(&self) -> Vec<ClassifiedEvent<'a>> {
        let mut accepted = classify_batch(self.events).accepted;
        accepted.sort_by_key(|classified| classified.classification.start);
        accepted
    }
}
