// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// User-initiated gallery actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // Grid Actions
    // ==========================================================================
    /// A category filter was selected.
    ApplyFilter {
        /// Filter token (`all` or a category label).
        filter: String,
        /// Number of cards left visible.
        visible: usize,
    },

    // ==========================================================================
    // Viewer Actions
    // ==========================================================================
    /// The lightbox was opened on an item.
    OpenViewer { index: u32 },

    /// The lightbox was closed.
    CloseViewer,

    /// Keyboard or button navigation to the next visible item.
    NavigateNext,

    /// Keyboard or button navigation to the previous visible item.
    NavigatePrevious,

    /// Horizontal swipe recognised by the touch tracker.
    Swipe {
        /// `true` for a left swipe (next item).
        next: bool,
    },
}

/// Background operations with timing information.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum AppOperation {
    /// The gallery manifest was parsed.
    CatalogLoaded { items: usize, duration_ms: u64 },

    /// An asset finished downloading or reading from disk.
    AssetFetched {
        duration_ms: u64,
        size_bytes: u64,
        /// `true` when the fetch was a neighbor preload.
        prefetch: bool,
    },

    /// Asset cache usage, recorded when the log is exported.
    CacheSnapshot {
        images: usize,
        memory_bytes: usize,
        hits: u64,
        misses: u64,
        /// Hit rate rounded to a whole percentage.
        hit_rate_percent: u32,
    },
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    Operation {
        operation: AppOperation,
    },
    Warning {
        message: String,
    },
    Error {
        message: String,
    },
}

/// A diagnostic event stamped with wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEvent {
    pub timestamp: DateTime<Utc>,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self::with_timestamp(kind, Utc::now())
    }

    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: DateTime<Utc>) -> Self {
        Self { timestamp, kind }
    }

    /// Serializable view with an RFC 3339 timestamp.
    #[must_use]
    pub fn to_serializable(&self) -> SerializableEvent<'_> {
        SerializableEvent {
            timestamp: self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            kind: &self.kind,
        }
    }
}

/// JSON shape of one exported event.
#[derive(Debug, Serialize)]
pub struct SerializableEvent<'a> {
    pub timestamp: String,
    #[serde(flatten)]
    pub kind: &'a DiagnosticEventKind,
}
