// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` limits how many toasts are visible, queues the rest, and
//! expires toasts on tick.

use std::collections::VecDeque;
use std::time::Instant;

use super::toast::{Severity, Timings, Toast, ToastId};
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, ErrorType, WarningEvent, WarningType};
use crate::domain::toast::VisibleLimit;

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
    /// Check auto-dismiss timers.
    Tick,
}

/// Visible toasts plus the ones waiting for room.
#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Toast>,
    queue: VecDeque<Toast>,
    limit: VisibleLimit,
    timings: Timings,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_settings(limit: VisibleLimit, timings: Timings) -> Self {
        Self {
            limit,
            timings,
            ..Self::default()
        }
    }

    /// Sets the diagnostics handle for logging warnings and errors.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Shows a toast now if there is room, otherwise queues it.
    ///
    /// Warnings and errors are also recorded in diagnostics; untyped ones are
    /// filed under `Other`.
    pub fn push(&mut self, toast: Toast) {
        if let Some(handle) = &self.diagnostics {
            match toast.severity() {
                Severity::Warning => handle.log_warning(WarningEvent::new(
                    toast.warning_type().unwrap_or(WarningType::Other),
                    toast.message(),
                )),
                Severity::Error => handle.log_error(ErrorEvent::new(
                    toast.error_type().unwrap_or(ErrorType::Other),
                    toast.message(),
                )),
                Severity::Success | Severity::Info => {}
            }
        }

        if self.visible.len() < self.limit.value() {
            self.visible.push_front(toast);
        } else {
            self.queue.push_back(toast);
        }
    }

    /// Dismisses a toast by ID. Returns `true` if it was found.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        if let Some(pos) = self.visible.iter().position(|t| t.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|t| t.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Dismisses visible toasts whose delay has elapsed.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// [`tick`](Self::tick) against an explicit clock reading.
    pub fn tick_at(&mut self, now: Instant) {
        let expired: Vec<ToastId> = self
            .visible
            .iter()
            .filter(|t| t.is_expired(&self.timings, now))
            .map(Toast::id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => self.tick(),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    /// Queued toasts are newer than every visible one, so each promoted toast
    /// goes to the front.
    fn promote_from_queue(&mut self) {
        while self.visible.len() < self.limit.value() {
            match self.queue.pop_front() {
                Some(toast) => self.visible.push_front(toast),
                None => break,
            }
        }
    }
}
