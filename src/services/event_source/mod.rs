//! Reading change events from JSON files.
//!
//! Only used by hosts that keep events on disk; the heatmap itself takes an
//! in-memory slice.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value;

use crate::models::change_event::ChangeEvent;

/// Load events from a JSON array file.
///
/// Records that do not have the `{timestamp, type, message?}` shape are
/// skipped one by one; only an unreadable file or a non-array document fails.
pub fn load_events(path: &Path) -> Result<Vec<ChangeEvent>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read events from {}", path.display()))?;
    parse_events(&data).with_context(|| format!("failed to parse events from {}", path.display()))
}

pub fn parse_events(data: &str) -> Result<Vec<ChangeEvent>> {
    let document: Value = serde_json::from_str(data).context("events file is not valid JSON")?;
    let Value::Array(records) = document else {
        bail!("expected a JSON array of events");
    };

    let total = records.len();
    let events: Vec<ChangeEvent> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(event) => Some(event),
            Err(err) => {
                log::warn!("Skipping malformed event record #{}: {}", index, err);
                None
            }
        })
        .collect();

    log::debug!("Loaded {} of {} event records", events.len(), total);
    Ok(events)
}
