// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector and the handle banners log through.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use serde::{Deserialize, Serialize};

use super::{BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind};
use crate::error::Result;

/// Channel slots between handles and the collector. A full channel drops
/// events instead of blocking the UI thread.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Cheap, cloneable sender side used by banners.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs an event, silently dropping it if the channel is full or closed.
    pub fn log(&self, source: Option<&str>, kind: DiagnosticEventKind) {
        let _ = self.try_log(source, kind);
    }

    /// Logs an event, reporting why it could not be queued.
    pub fn try_log(
        &self,
        source: Option<&str>,
        kind: DiagnosticEventKind,
    ) -> std::result::Result<(), TrySendError<DiagnosticEvent>> {
        let event = DiagnosticEvent::new(source.map(str::to_owned), kind);
        self.event_tx.try_send(event)
    }

    /// Logs a free-form warning.
    pub fn log_warning(&self, source: Option<&str>, message: impl Into<String>) {
        self.log(
            source,
            DiagnosticEventKind::Warning {
                message: message.into(),
            },
        );
    }
}

/// Exported snapshot of the buffered events.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticReport {
    /// Crate version that produced the report.
    pub version: String,
    /// When collection started (RFC 3339).
    pub collection_started_at: String,
    /// When the report was generated (RFC 3339).
    pub generated_at: String,
    pub event_count: usize,
    pub events: Vec<DiagnosticEvent>,
}

/// Receives events from handles and keeps the most recent ones.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    started_at: DateTime<Utc>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            started_at: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains the channel into the buffer. Call once per update.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Iterates buffered events, oldest first.
    pub fn events(&self) -> impl DoubleEndedIterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Builds a report from the current buffer contents.
    #[must_use]
    pub fn report(&self) -> DiagnosticReport {
        let events: Vec<DiagnosticEvent> = self.buffer.iter().cloned().collect();
        DiagnosticReport {
            version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at: self.started_at.to_rfc3339(),
            generated_at: Utc::now().to_rfc3339(),
            event_count: events.len(),
            events,
        }
    }

    /// Serializes the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `Error::Diagnostics` if serialization fails.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.report())?)
    }

    /// Writes the JSON report to `path` atomically.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be written.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        let json = self.export_json()?;
        write_atomic(path, &json)?;
        Ok(path.to_path_buf())
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

/// Writes through a sibling temp file and renames it into place.
fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snackbar::{CloseReason, TimerKind};
    use tempfile::tempdir;

    #[test]
    fn handle_events_arrive_after_process_pending() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log(Some("toast"), DiagnosticEventKind::ReplacementCommitted);
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 1);

        let event = collector.events().next().expect("one event");
        assert_eq!(event.source.as_deref(), Some("toast"));
        assert_eq!(event.kind, DiagnosticEventKind::ReplacementCommitted);
    }

    #[test]
    fn buffer_keeps_only_most_recent_events() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(16));
        let handle = collector.handle();

        for generation in 0..40 {
            handle.log(
                None,
                DiagnosticEventKind::StaleTimer {
                    kind: TimerKind::AutoHide,
                    generation,
                },
            );
            // Drain often enough that the channel never fills.
            collector.process_pending();
        }

        assert_eq!(collector.len(), 16);
        let first = collector.events().next().expect("buffered event");
        assert_eq!(
            first.kind,
            DiagnosticEventKind::StaleTimer {
                kind: TimerKind::AutoHide,
                generation: 24,
            }
        );
    }

    #[test]
    fn full_channel_drops_instead_of_blocking() {
        let collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        for _ in 0..DEFAULT_CHANNEL_CAPACITY {
            assert!(handle
                .try_log(None, DiagnosticEventKind::ReplacementCommitted)
                .is_ok());
        }
        assert!(handle
            .try_log(None, DiagnosticEventKind::ReplacementCommitted)
            .is_err());
    }

    #[test]
    fn export_json_contains_events() {
        let mut collector = DiagnosticsCollector::default();
        collector.handle().log(
            Some("saved"),
            DiagnosticEventKind::CloseRequested {
                reason: CloseReason::Timeout,
                controlled: true,
            },
        );
        collector.process_pending();

        let json = collector.export_json().expect("export");
        let report: DiagnosticReport = serde_json::from_str(&json).expect("parse");

        assert_eq!(report.event_count, 1);
        assert_eq!(report.events.len(), 1);
        assert_eq!(report.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn export_to_file_writes_and_leaves_no_temp_file() {
        let mut collector = DiagnosticsCollector::default();
        collector.handle().log_warning(None, "late pointer event");
        collector.process_pending();

        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("banner-report.json");
        let written = collector.export_to_file(&path).expect("export");

        assert_eq!(written, path);
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
        let content = fs::read_to_string(&path).expect("read back");
        assert!(content.contains("late pointer event"));
    }

    #[test]
    fn clear_empties_buffer() {
        let mut collector = DiagnosticsCollector::default();
        collector.handle().log_warning(None, "x");
        collector.process_pending();
        collector.clear();
        assert!(collector.is_empty());
        assert_eq!(collector.capacity(), 500);
    }
}
