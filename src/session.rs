// SPDX-License-Identifier: MPL-2.0
//! Client state aggregate.
//!
//! [`ClientState`] owns every state manager of the client and routes UI
//! messages to them. Screens receive it (or a borrow of one of its parts)
//! explicitly instead of looking it up from an ambient context.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::diagnostics::DiagnosticsCollector;
use crate::error::{Error, Result};
use crate::modal::{ModalId, ModalMessage, ModalQueue};
use crate::notifications::{NotificationId, NotificationMessage, NotificationStore};
use crate::paths;
use crate::toast::{Manager as ToastManager, Toast, ToastMessage};

/// Top-level messages accepted by [`ClientState::update`].
#[derive(Debug)]
pub enum Message<C> {
    Notification(NotificationMessage),
    Modal(ModalMessage<C>),
    Toast(ToastMessage),
    /// Show a transient message.
    ShowToast(Toast),
    /// Expires due toasts.
    Tick,
}

/// What an update produced that the caller may want to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    NotificationAdded(NotificationId),
    ModalEnqueued(ModalId),
}

/// Every client-side state manager, wired to a shared diagnostics log.
pub struct ClientState<C> {
    config: Config,
    notifications: NotificationStore,
    modals: ModalQueue<C>,
    toasts: ToastManager,
    diagnostics: DiagnosticsCollector,
}

impl<C> ClientState<C> {
    /// Builds the managers from `config` and attaches diagnostics to each.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let diagnostics = DiagnosticsCollector::new(config.buffer_capacity());

        let mut notifications = NotificationStore::new().with_filter(config.notification_filter());
        notifications.set_diagnostics(diagnostics.handle());

        let mut modals = ModalQueue::with_defaults(config.modal_defaults());
        modals.set_diagnostics(diagnostics.handle());

        let mut toasts = ToastManager::with_settings(config.toast_limit(), config.toast_timings());
        toasts.set_diagnostics(diagnostics.handle());

        Self {
            config,
            notifications,
            modals,
            toasts,
            diagnostics,
        }
    }

    /// Routes a message to the manager that owns it, then drains the
    /// diagnostics it produced.
    pub fn update(&mut self, message: Message<C>) -> Effect {
        let effect = self.route(message);
        self.diagnostics.process_pending();
        effect
    }

    fn route(&mut self, message: Message<C>) -> Effect {
        match message {
            Message::Notification(NotificationMessage::Add(notification)) => {
                Effect::NotificationAdded(self.notifications.add(notification))
            }
            Message::Notification(message) => {
                self.notifications.handle_message(message);
                Effect::None
            }
            Message::Modal(message) => match self.modals.handle_message(message) {
                Some(id) => Effect::ModalEnqueued(id),
                None => Effect::None,
            },
            Message::Toast(message) => {
                self.toasts.handle_message(&message);
                Effect::None
            }
            Message::ShowToast(toast) => {
                self.toasts.push(toast);
                Effect::None
            }
            Message::Tick => {
                self.toasts.tick();
                Effect::None
            }
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn notifications(&self) -> &NotificationStore {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationStore {
        &mut self.notifications
    }

    #[must_use]
    pub fn modals(&self) -> &ModalQueue<C> {
        &self.modals
    }

    pub fn modals_mut(&mut self) -> &mut ModalQueue<C> {
        &mut self.modals
    }

    #[must_use]
    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastManager {
        &mut self.toasts
    }

    /// The diagnostics log. Changes made through the `*_mut` accessors show
    /// up after the next [`update`](Self::update) or
    /// [`sync_diagnostics`](Self::sync_diagnostics).
    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    /// Moves pending events into the log. Returns how many were moved.
    pub fn sync_diagnostics(&mut self) -> usize {
        self.diagnostics.process_pending()
    }

    /// Writes a diagnostics report into `directory`.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be serialized or written.
    pub fn export_diagnostics_to(&mut self, directory: &Path) -> Result<PathBuf> {
        self.sync_diagnostics();
        self.diagnostics.export_to_file(directory)
    }

    /// Writes a diagnostics report into the application data directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Export`] when no data directory can be resolved, or
    /// any error from [`export_diagnostics_to`](Self::export_diagnostics_to).
    pub fn export_diagnostics(&mut self) -> Result<PathBuf> {
        let directory = paths::diagnostics_export_dir()
            .ok_or_else(|| Error::Export("no data directory available".to_string()))?;
        self.export_diagnostics_to(&directory)
    }
}

impl<C> Default for ClientState<C> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
