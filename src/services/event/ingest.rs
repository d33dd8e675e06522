//! Reading API payloads into [`Event`] records.
//!
//! The events API answers `{"events": [...]}`; exported dumps are sometimes a
//! bare array. Individual records that do not fit the event shape are logged
//! and skipped so that one bad document does not hide the rest.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value;

use crate::models::event::Event;

/// Parse a JSON payload into events.
///
/// # Errors
/// Fails only when the payload itself is not JSON or is neither an array nor
/// an object with an `events` array.
pub fn parse_events(json: &str) -> Result<Vec<Event>> {
    let payload: Value = serde_json::from_str(json).context("Event payload is not valid JSON")?;

    let records = match payload {
        Value::Array(records) => records,
        Value::Object(mut envelope) => match envelope.remove("events") {
            Some(Value::Array(records)) => records,
            Some(_) => bail!("'events' field of the payload is not an array"),
            None => bail!("Event payload has no 'events' field"),
        },
        _ => bail!("Event payload must be an array or an object with an 'events' array"),
    };

    let total = records.len();
    let events: Vec<Event> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| parse_record(index, record))
        .collect();

    if events.len() < total {
        log::warn!(
            "Ingested {} of {} event records; {} skipped",
            events.len(),
            total,
            total - events.len()
        );
    } else {
        log::debug!("Ingested {} event records", total);
    }

    Ok(events)
}

fn parse_record(index: usize, record: Value) -> Option<Event> {
    let event: Event = match serde_json::from_value(record) {
        Ok(event) => event,
        Err(err) => {
            log::warn!("Skipping event record #{}: {}", index, err);
            return None;
        }
    };

    if let Err(err) = event.validate() {
        log::warn!("Skipping event record #{} ('{}'): {}", index, event.id, err);
        return None;
    }

    Some(event)
}

/// Load events from a JSON file.
pub fn load_events(path: &Path) -> Result<Vec<Event>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read events from {}", path.display()))?;
    parse_events(&data).with_context(|| format!("failed to parse events from {}", path.display()))
}
