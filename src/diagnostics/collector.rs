// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! The collector owns the ring buffer. Background tasks report through a
//! [`DiagnosticsHandle`], which never blocks: events are dropped when the
//! channel is full.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use super::{
    AppOperation, BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, UserAction,
};

/// Channel slots between handles and the collector.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Cloneable sender for diagnostic events, usable from any thread.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_action(&self, action: UserAction) {
        self.send(DiagnosticEventKind::UserAction {
            action,
            details: None,
        });
    }

    pub fn log_operation(&self, operation: AppOperation) {
        self.send(DiagnosticEventKind::Operation { operation });
    }

    pub fn log_warning(&self, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Warning {
            message: message.into(),
        });
    }

    pub fn log_error(&self, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Error {
            message: message.into(),
        });
    }

    /// Sends an event, reporting whether the channel accepted it.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` if the channel buffer is full, or
    /// `TrySendError::Disconnected` if the collector has been dropped.
    pub fn try_send(&self, kind: DiagnosticEventKind) -> Result<(), TrySendError<DiagnosticEvent>> {
        self.event_tx.try_send(DiagnosticEvent::new(kind))
    }

    fn send(&self, kind: DiagnosticEventKind) {
        let _ = self.try_send(kind);
    }
}

/// Central store for diagnostic events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    log_to_stderr: bool,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            log_to_stderr: false,
        }
    }

    /// Echoes every stored event to stderr as a JSON line.
    #[must_use]
    pub fn with_stderr_echo(mut self, enabled: bool) -> Self {
        self.log_to_stderr = enabled;
        self
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every event waiting in the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.store(event);
        }
    }

    /// Logs an action directly to the buffer (bypassing the channel).
    pub fn log_action(&mut self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    pub fn log_action_with_details(&mut self, action: UserAction, details: Option<String>) {
        self.store(DiagnosticEvent::new(DiagnosticEventKind::UserAction {
            action,
            details,
        }));
    }

    pub fn log_operation(&mut self, operation: AppOperation) {
        self.store(DiagnosticEvent::new(DiagnosticEventKind::Operation {
            operation,
        }));
    }

    pub fn log_warning(&mut self, message: impl Into<String>) {
        self.store(DiagnosticEvent::new(DiagnosticEventKind::Warning {
            message: message.into(),
        }));
    }

    pub fn log_error(&mut self, message: impl Into<String>) {
        self.store(DiagnosticEvent::new(DiagnosticEventKind::Error {
            message: message.into(),
        }));
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
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Exports the buffer as newline-delimited JSON, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if an event fails to serialize.
    pub fn to_json_lines(&self) -> serde_json::Result<String> {
        let mut out = String::new();
        for event in self.buffer.iter() {
            out.push_str(&serde_json::to_string(&event.to_serializable())?);
            out.push('\n');
        }
        Ok(out)
    }

    fn store(&mut self, event: DiagnosticEvent) {
        if self.log_to_stderr {
            match serde_json::to_string(&event.to_serializable()) {
                Ok(line) => eprintln!("{line}"),
                Err(err) => eprintln!("[diagnostics] failed to serialize event: {err}"),
            }
        }
        self.buffer.push(event);
    }
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .field("log_to_stderr", &self.log_to_stderr)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collector(capacity: usize) -> DiagnosticsCollector {
        DiagnosticsCollector::new(BufferCapacity::new(capacity))
    }

    #[test]
    fn handle_events_arrive_after_process_pending() {
        let mut collector = collector(100);
        let handle = collector.handle();

        handle.log_action(UserAction::NavigateNext);
        handle.log_warning("slow network");
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn handle_works_across_threads() {
        let mut collector = collector(100);
        let handle = collector.handle();

        std::thread::spawn(move || {
            handle.log_operation(AppOperation::AssetFetched {
                duration_ms: 5,
                size_bytes: 10,
                prefetch: true,
            });
        })
        .join()
        .expect("thread panicked");

        collector.process_pending();
        assert!(matches!(
            collector.iter().next().map(|e| &e.kind),
            Some(DiagnosticEventKind::Operation { .. })
        ));
    }

    #[test]
    fn full_channel_rejects_without_blocking() {
        let collector = collector(100);
        let handle = collector.handle();
        for _ in 0..DEFAULT_CHANNEL_CAPACITY {
            handle.log_action(UserAction::CloseViewer);
        }
        let result = handle.try_send(DiagnosticEventKind::Error {
            message: "overflow".into(),
        });
        assert!(matches!(result, Err(TrySendError::Full(_))));
    }

    #[test]
    fn buffer_keeps_most_recent_events() {
        let mut collector = collector(10);
        for index in 0..15 {
            collector.log_action(UserAction::OpenViewer { index });
        }
        assert_eq!(collector.len(), 10);
        assert!(matches!(
            collector.iter().next().map(|e| &e.kind),
            Some(DiagnosticEventKind::UserAction {
                action: UserAction::OpenViewer { index: 5 },
                ..
            })
        ));
    }

    #[test]
    fn json_lines_export_has_one_object_per_event() {
        let mut collector = collector(10).with_stderr_echo(false);
        collector.log_action_with_details(UserAction::CloseViewer, Some("escape".into()));
        collector.log_error("decode failed");

        let exported = collector.to_json_lines().expect("export");
        let lines: Vec<&str> = exported.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).expect("valid json");
        assert_eq!(first["type"], "user_action");
        assert_eq!(first["action"]["action"], "close_viewer");
        assert_eq!(first["details"], "escape");
        assert!(first["timestamp"].is_string());

        let second: serde_json::Value = serde_json::from_str(lines[1]).expect("valid json");
        assert_eq!(second["type"], "error");
    }

    #[test]
    fn clear_empties_buffer() {
        let mut collector = collector(10);
        collector.log_warning("w");
        collector.clear();
        assert!(collector.is_empty());
        assert_eq!(collector.capacity(), 10);
    }
}
