// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting gallery activity.
//!
//! Events are captured during application usage, stored in a
//! memory-bounded circular buffer and can be exported as JSON lines.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped user actions, operations, warnings and errors
//! - [`DiagnosticsCollector`]: Owner of the buffer, fed directly or through
//!   cloneable [`DiagnosticsHandle`]s
//! - [`export`]: Writing the log to a timestamped JSON lines file

mod buffer;
mod collector;
mod events;
pub mod export;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{AppOperation, DiagnosticEvent, DiagnosticEventKind, SerializableEvent, UserAction};
