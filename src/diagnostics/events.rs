// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.
//!
//! Every state transition of the notification store and the modal queue can
//! be recorded as a [`StateChange`]. Warnings and errors raised through the
//! toast manager are recorded as [`WarningEvent`] / [`ErrorEvent`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ErrorType, WarningType};

/// State transitions worth keeping in the event log.
///
/// Ids are stored as strings so the log stays independent from the id types
/// of each manager.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum StateChange {
    // ==========================================================================
    // Notification store
    // ==========================================================================
    /// A notification record was added.
    NotificationAdded {
        id: String,
        /// Snake-case notification type.
        kind: String,
    },

    /// A single notification was marked read.
    NotificationRead { id: String },

    /// Every notification was marked read.
    AllNotificationsRead {
        /// How many records were unread before the call.
        previously_unread: usize,
    },

    /// A notification record was removed.
    NotificationRemoved { id: String },

    /// The whole notification collection was dropped.
    NotificationsCleared { discarded: usize },

    /// The active notification filter changed.
    FilterChanged {
        show_read: bool,
        show_unread: bool,
        type_count: usize,
    },

    // ==========================================================================
    // Modal queue
    // ==========================================================================
    /// A modal request entered the queue.
    ModalEnqueued {
        id: u64,
        /// Position in the queue right after insertion (0 = shown now).
        position: usize,
    },

    /// A modal request was dismissed individually.
    ModalDismissed {
        id: u64,
        /// Whether the request was the one on screen.
        was_current: bool,
    },

    /// A modal request was updated in place.
    ModalUpdated { id: u64 },

    /// The whole modal queue was cleared.
    ModalQueueCleared { discarded: usize },
}

/// A warning surfaced to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// An error surfaced to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// The type and data of a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A manager changed state.
    StateChange { change: StateChange },

    /// A warning was shown.
    Warning { event: WarningEvent },

    /// An error was shown.
    Error { event: ErrorEvent },
}

/// A timestamped diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticEvent {
    /// Wall-clock time the event was created.
    pub timestamp: DateTime<Utc>,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }

    /// Creates a state change event stamped with the current time.
    #[must_use]
    pub fn state(change: StateChange) -> Self {
        Self::new(DiagnosticEventKind::StateChange { change })
    }
}
