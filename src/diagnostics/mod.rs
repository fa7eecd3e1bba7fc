// SPDX-License-Identifier: MPL-2.0
//! In-memory structured event log.
//!
//! The notification store, the modal queue and the toast manager report
//! their state transitions here through a [`DiagnosticsHandle`]. Events live
//! in a bounded [`CircularBuffer`] and can be exported as a JSON report.
//!
//! # Architecture
//!
//! - [`DiagnosticsCollector`]: owns the buffer and drains the event channel
//! - [`DiagnosticsHandle`]: non-blocking sender given to each manager
//! - [`DiagnosticEvent`]: timestamped [`StateChange`], warning or error
//!
//! # Privacy
//!
//! Warning and error messages pass through [`sanitize_message`] before they
//! are stored, so file paths and e-mail addresses never reach a report.

mod buffer;
mod collector;
mod events;
mod export;
mod sanitizer;

pub use buffer::{buffer_capacity_bounds, BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, ErrorEvent, StateChange, WarningEvent};
pub use export::{generate_default_filename, write_atomic, DiagnosticReport};
pub use sanitizer::{sanitize_message, ErrorType, WarningType};
