//! Action Record Sinks
//!
//! Concrete [`ActionRecorder`] implementations. All of them are
//! non-blocking; a failed delivery is logged and dropped, never surfaced.

use std::sync::Mutex;

use tokio::sync::mpsc;
use tracing::warn;

use crate::game::events::{ActionRecord, ActionRecorder};

/// Recorder that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRecorder;

impl ActionRecorder for NullRecorder {
    fn record(&self, _record: ActionRecord) {}
}

/// In-memory recorder for tests and demos.
#[derive(Debug, Default)]
pub struct MemoryRecorder {
    records: Mutex<Vec<ActionRecord>>,
}

impl MemoryRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn snapshot(&self) -> Vec<ActionRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// Number of records captured.
    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ActionRecorder for MemoryRecorder {
    fn record(&self, record: ActionRecord) {
        match self.records.lock() {
            Ok(mut records) => records.push(record),
            // A poisoned lock only loses telemetry, never game state
            Err(err) => warn!("memory recorder lock poisoned: {err}"),
        }
    }
}

/// Recorder that forwards records over an unbounded channel to a
/// transport task (HTTP uploader, file writer, ...). Send failures after
/// the receiver is gone are swallowed with a warning.
#[derive(Debug, Clone)]
pub struct ChannelRecorder {
    tx: mpsc::UnboundedSender<ActionRecord>,
}

impl ChannelRecorder {
    /// Create a recorder and the receiving end for the transport task.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ActionRecord>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl ActionRecorder for ChannelRecorder {
    fn record(&self, record: ActionRecord) {
        if self.tx.send(record).is_err() {
            warn!("action record dropped: recorder channel closed");
        }
    }
}
