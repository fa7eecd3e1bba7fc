// SPDX-License-Identifier: MPL-2.0
//! Central collector for diagnostic events.
//!
//! Managers hold a [`DiagnosticsHandle`] and push events without blocking;
//! the owner of the [`DiagnosticsCollector`] drains them into a bounded
//! [`CircularBuffer`] whenever it calls [`DiagnosticsCollector::process_pending`].

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use super::export::{generate_default_filename, write_atomic, DiagnosticReport};
use super::{
    sanitize_message, BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind,
    ErrorEvent, StateChange, WarningEvent,
};
use crate::error::Result;

/// Cheap, cloneable sender for diagnostic events.
///
/// All methods are non-blocking: when the channel is full the event is
/// dropped rather than stalling the UI thread.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Records a manager state transition.
    pub fn log_state(&self, change: StateChange) {
        let _ = self.event_tx.try_send(DiagnosticEvent::state(change));
    }

    /// Records a warning. The message is sanitized first.
    pub fn log_warning(&self, warning: WarningEvent) {
        let event = WarningEvent {
            message: sanitize_message(&warning.message),
            ..warning
        };
        let _ = self
            .event_tx
            .try_send(DiagnosticEvent::new(DiagnosticEventKind::Warning { event }));
    }

    /// Records an error. The message is sanitized first.
    pub fn log_error(&self, error: ErrorEvent) {
        let event = ErrorEvent {
            message: sanitize_message(&error.message),
            ..error
        };
        let _ = self
            .event_tx
            .try_send(DiagnosticEvent::new(DiagnosticEventKind::Error { event }));
    }

    /// Records a state transition, reporting whether it was accepted.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` when the channel is saturated, or
    /// `TrySendError::Disconnected` once the collector is gone.
    pub fn try_log_state(
        &self,
        change: StateChange,
    ) -> std::result::Result<(), TrySendError<DiagnosticEvent>> {
        self.event_tx.try_send(DiagnosticEvent::state(change))
    }
}

/// Owns the diagnostic event log.
///
/// The channel holds as many pending events as the buffer, so a full buffer's
/// worth of changes between two drains is never dropped.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    started_at: DateTime<Utc>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(capacity.value());

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            started_at: Utc::now(),
        }
    }

    /// Creates a handle feeding this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every pending event from the channel into the buffer.
    ///
    /// Returns how many events were drained.
    pub fn process_pending(&mut self) -> usize {
        let mut drained = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
            drained += 1;
        }
        drained
    }

    /// Records a state change directly, bypassing the channel.
    pub fn log_state(&mut self, change: StateChange) {
        self.buffer.push(DiagnosticEvent::state(change));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Stored events, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// When this collector was created.
    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    fn build_report(&self) -> DiagnosticReport {
        DiagnosticReport::new(self.started_at, self.buffer.iter().cloned().collect())
    }

    /// Renders the stored events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Export`](crate::error::Error::Export) if serialization
    /// fails.
    pub fn export_json(&self) -> Result<String> {
        self.build_report().to_json()
    }

    /// Writes a JSON report into `directory` under a timestamped filename.
    ///
    /// The write goes through a temporary file and a rename, so a crash never
    /// leaves a truncated report behind. Returns the path written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::error::Error::Io) when the directory
    /// cannot be created or written to.
    pub fn export_to_file(&self, directory: impl AsRef<Path>) -> Result<PathBuf> {
        let directory = directory.as_ref();
        std::fs::create_dir_all(directory)?;

        let path = directory.join(generate_default_filename());
        let json = self.export_json()?;
        write_atomic(&path, &json)?;

        Ok(path)
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{ErrorType, WarningType};
    use tempfile::tempdir;

    fn enqueued(id: u64) -> StateChange {
        StateChange::ModalEnqueued { id, position: 0 }
    }

    #[test]
    fn handle_events_arrive_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_state(enqueued(1));
        handle.log_state(enqueued(2));
        assert!(collector.is_empty());

        assert_eq!(collector.process_pending(), 2);
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn cloned_handles_feed_same_collector() {
        let mut collector = DiagnosticsCollector::default();
        let first = collector.handle();
        let second = first.clone();

        first.log_state(enqueued(1));
        second.log_state(enqueued(2));
        collector.process_pending();

        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let collector = DiagnosticsCollector::new(BufferCapacity::new(0));
        let handle = collector.handle();

        for id in 0..collector.capacity() as u64 {
            handle.log_state(enqueued(id));
        }

        assert!(matches!(
            handle.try_log_state(enqueued(999)),
            Err(TrySendError::Full(_))
        ));
    }

    #[test]
    fn channel_holds_a_full_buffer_between_drains() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        let capacity = collector.capacity();

        for id in 0..capacity as u64 {
            assert!(handle.try_log_state(enqueued(id)).is_ok());
        }

        assert_eq!(collector.process_pending(), capacity);
        assert_eq!(collector.len(), capacity);
    }

    #[test]
    fn buffer_evicts_oldest_past_capacity() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(0));
        let capacity = collector.capacity();

        for id in 0..(capacity as u64 + 5) {
            collector.log_state(enqueued(id));
        }

        assert_eq!(collector.len(), capacity);
        let first = collector.iter().next().expect("buffer should not be empty");
        assert_eq!(
            first.kind,
            DiagnosticEventKind::StateChange {
                change: enqueued(5)
            }
        );
    }

    #[test]
    fn warnings_and_errors_are_sanitized() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_warning(WarningEvent::new(
            WarningType::ShareUnavailable,
            "could not share /home/ana/receipt.png",
        ));
        handle.log_error(ErrorEvent::new(
            ErrorType::PaymentError,
            "card declined for ana@example.com",
        ));
        collector.process_pending();

        let messages: Vec<String> = collector
            .iter()
            .map(|event| match &event.kind {
                DiagnosticEventKind::Warning { event } => event.message.clone(),
                DiagnosticEventKind::Error { event } => event.message.clone(),
                DiagnosticEventKind::StateChange { .. } => String::new(),
            })
            .collect();

        assert_eq!(
            messages,
            vec![
                "could not share <path>".to_string(),
                "card declined for <email>".to_string()
            ]
        );
    }

    #[test]
    fn export_json_contains_events() {
        let mut collector = DiagnosticsCollector::default();
        collector.log_state(StateChange::ModalQueueCleared { discarded: 3 });

        let json = collector.export_json().expect("export should succeed");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(parsed["event_count"], 1);
        assert_eq!(
            parsed["events"][0]["kind"]["change"]["change"],
            "modal_queue_cleared"
        );
    }

    #[test]
    fn export_to_file_writes_report() {
        let mut collector = DiagnosticsCollector::default();
        collector.log_state(enqueued(1));
        let dir = tempdir().expect("failed to create temp dir");

        let path = collector
            .export_to_file(dir.path().join("reports"))
            .expect("export should succeed");

        assert!(path.exists());
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("json"));
        let content = std::fs::read_to_string(&path).expect("report should be readable");
        assert!(content.contains("modal_enqueued"));
    }
}
