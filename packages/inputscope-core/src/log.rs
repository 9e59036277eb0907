//! The capped, newest-first event log shared by both capture surfaces.

use crate::{ExportError, SharedClock};
use serde::Serialize;
use std::collections::{vec_deque, VecDeque};
use std::fmt;

/// The log never holds more than this many records. Older records fall off the end.
pub const LOG_CAPACITY: usize = 50;

/// The tag used for entries the log writes about itself.
pub const SYSTEM_EVENT: &str = "system";

/// Identifies a record within its log. Ids are never reused, even across [`EventLog::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One normalized, timestamped description of an input occurrence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: RecordId,
    pub timestamp: String,
    pub event_name: String,
    pub details: String,
}

/// An append-only sequence of [`EventRecord`]s, newest first, plus a running capture count.
///
/// The count tracks every record made since the last [`clear`](EventLog::clear), so it keeps
/// climbing after the sequence itself starts dropping old records at [`LOG_CAPACITY`].
pub struct EventLog {
    records: VecDeque<EventRecord>,
    count: u64,
    next_id: u64,
    clock: SharedClock,
}

impl EventLog {
    pub fn new(clock: SharedClock) -> Self {
        Self {
            records: VecDeque::with_capacity(LOG_CAPACITY + 1),
            count: 0,
            next_id: 0,
            clock,
        }
    }

    /// Prepends a record and bumps the capture count.
    pub fn record(&mut self, event_name: impl Into<String>, details: impl Into<String>) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;

        let record = EventRecord {
            id,
            timestamp: self.clock.wall_time(),
            event_name: event_name.into(),
            details: details.into(),
        };
        tracing::trace!(%id, event = %record.event_name, details = %record.details, "recorded");

        self.records.push_front(record);
        self.records.truncate(LOG_CAPACITY);
        self.count += 1;
        id
    }

    /// Empties the log and resets the count, then records the clear itself as a system entry.
    pub fn clear(&mut self, details: impl Into<String>) -> RecordId {
        self.records.clear();
        self.count = 0;
        self.record(SYSTEM_EVENT, details)
    }

    /// Records from newest to oldest.
    pub fn records(&self) -> vec_deque::Iter<'_, EventRecord> {
        self.records.iter()
    }

    pub fn latest(&self) -> Option<&EventRecord> {
        self.records.front()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of events captured since the log was created or last cleared.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// An owned copy of the current sequence, newest first.
    pub fn snapshot(&self) -> Vec<EventRecord> {
        self.records.iter().cloned().collect()
    }

    /// The current sequence as pretty-printed JSON, newest first.
    pub fn export_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }
}

impl fmt::Debug for EventLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventLog")
            .field("records", &self.records)
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}
