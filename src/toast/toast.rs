// SPDX-License-Identifier: MPL-2.0
//! Toast data and severity levels.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use crate::diagnostics::{ErrorType, WarningType};
use crate::domain::toast::{display_secs_bounds, DisplaySecs};

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity decides how long a toast stays up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    /// Stays until dismissed by the user.
    Error,
}

/// Auto-dismiss delays per severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Success and info toasts.
    pub short: DisplaySecs,
    /// Warning toasts.
    pub long: DisplaySecs,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            short: DisplaySecs::new(display_secs_bounds::DEFAULT_SHORT),
            long: DisplaySecs::new(display_secs_bounds::DEFAULT_LONG),
        }
    }
}

impl Timings {
    /// Delay for `severity`, `None` when manual dismissal is required.
    #[must_use]
    pub fn for_severity(&self, severity: Severity) -> Option<Duration> {
        match severity {
            Severity::Success | Severity::Info => Some(self.short.as_duration()),
            Severity::Warning => Some(self.long.as_duration()),
            Severity::Error => None,
        }
    }
}

/// A short-lived message for the user, e.g. "Booking cancelled" or
/// "Could not reach the server".
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    severity: Severity,
    message: String,
    created_at: Instant,
    custom_duration: Option<Duration>,
    warning_type: Option<WarningType>,
    error_type: Option<ErrorType>,
}

impl Toast {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: ToastId::next(),
            severity,
            message: message.into(),
            created_at: Instant::now(),
            custom_duration: None,
            warning_type: None,
            error_type: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Overrides the severity's auto-dismiss delay. Also applies to errors.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.custom_duration = Some(duration);
        self
    }

    /// Category recorded in diagnostics for warning toasts.
    #[must_use]
    pub fn with_warning_type(mut self, warning_type: WarningType) -> Self {
        self.warning_type = Some(warning_type);
        self
    }

    /// Category recorded in diagnostics for error toasts.
    #[must_use]
    pub fn with_error_type(mut self, error_type: ErrorType) -> Self {
        self.error_type = Some(error_type);
        self
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn warning_type(&self) -> Option<WarningType> {
        self.warning_type
    }

    #[must_use]
    pub fn error_type(&self) -> Option<ErrorType> {
        self.error_type
    }

    /// Whether the toast has been up long enough to go away at `now`.
    #[must_use]
    pub fn is_expired(&self, timings: &Timings, now: Instant) -> bool {
        self.custom_duration
            .or_else(|| timings.for_severity(self.severity))
            .is_some_and(|duration| now.saturating_duration_since(self.created_at) >= duration)
    }
}
