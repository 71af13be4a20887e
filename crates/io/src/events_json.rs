//! JSON codec for detected event lists.
//!
//! Events serialize as `{ "year": ..., "start": "YYYY-MM-DD",
//! "end": "YYYY-MM-DD" }` records so the files stay hand-editable.

use std::path::Path;

use helios_detect::{DetectedEvent, Interval};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dates::parse_date;
use crate::error::IoError;

/// One detected event in its on-disk form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// The scanned year that contributed the run.
    pub year: i32,
    /// First day of the run, `YYYY-MM-DD`.
    pub start: String,
    /// Last day of the run (inclusive), `YYYY-MM-DD`.
    pub end: String,
}

impl From<&DetectedEvent> for EventRecord {
    fn from(event: &DetectedEvent) -> Self {
        Self {
            year: event.year,
            start: event.interval.start().to_string(),
            end: event.interval.end().to_string(),
        }
    }
}

/// Writes a detected event list to a JSON file at `path`.
///
/// # Errors
///
/// Returns [`IoError::Json`] if the file cannot be written.
pub fn write_events(path: &Path, events: &[DetectedEvent]) -> Result<(), IoError> {
    let records: Vec<EventRecord> = events.iter().map(EventRecord::from).collect();
    let file = std::fs::File::create(path).map_err(|e| IoError::Json {
        reason: e.to_string(),
    })?;
    serde_json::to_writer_pretty(file, &records)?;
    debug!(path = %path.display(), n_events = events.len(), "event list written");
    Ok(())
}

/// Reads a detected event list from a JSON file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist,
/// [`IoError::Json`] if it is not a valid event-record array,
/// [`IoError::InvalidDate`] if a record's date does not parse, or
/// [`IoError::Validation`] if a record's interval is reversed.
pub fn read_events(path: &Path) -> Result<Vec<DetectedEvent>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = std::fs::File::open(path).map_err(|e| IoError::Json {
        reason: e.to_string(),
    })?;
    let records: Vec<EventRecord> = serde_json::from_reader(file)?;

    let mut events = Vec::with_capacity(records.len());
    for record in &records {
        let start = parse_date(&record.start)?;
        let end = parse_date(&record.end)?;
        let interval = Interval::new(start, end).map_err(|e| IoError::Validation {
            count: 1,
            details: e.to_string(),
        })?;
        events.push(DetectedEvent {
            interval,
            year: record.year,
        });
    }

    debug!(path = %path.display(), n_events = events.len(), "event list read");
    Ok(events)
}
