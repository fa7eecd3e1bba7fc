// SPDX-License-Identifier: MPL-2.0
//! The notification collection and its derived views.

use std::collections::{HashSet, VecDeque};

use chrono::Utc;

use super::filter::{FilterUpdate, NotificationFilter};
use super::record::{NewNotification, NotificationId, NotificationRecord};
use crate::diagnostics::{DiagnosticsHandle, StateChange};

/// Messages mutating the store.
#[derive(Debug, Clone)]
pub enum Message {
    /// Add a locally generated notification.
    Add(NewNotification),
    /// Mark one record read.
    MarkRead(NotificationId),
    /// Mark every record read.
    MarkAllRead,
    /// Delete one record.
    Remove(NotificationId),
    /// Merge a partial filter into the active one.
    UpdateFilter(FilterUpdate),
}

/// Holds notification records and the active filter.
///
/// The collection keeps records newest-added first. Display order is never
/// stored: [`list`](Self::list) sorts by timestamp on every call.
#[derive(Debug, Default)]
pub struct NotificationStore {
    records: VecDeque<NotificationRecord>,
    filter: NotificationFilter,
    diagnostics: Option<DiagnosticsHandle>,
}

impl NotificationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with records, typically the first page of the
    /// remote feed. Records are kept in the given order; a record whose id was
    /// already seen is dropped.
    #[must_use]
    pub fn with_records(records: impl IntoIterator<Item = NotificationRecord>) -> Self {
        let mut seen = HashSet::new();
        let records = records
            .into_iter()
            .filter(|record| seen.insert(record.id().clone()))
            .collect();

        Self {
            records,
            ..Self::default()
        }
    }

    /// Uses `filter` as the initial active filter.
    #[must_use]
    pub fn with_filter(mut self, filter: NotificationFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the diagnostics handle used to record state changes.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    fn log(&self, change: StateChange) {
        if let Some(handle) = &self.diagnostics {
            handle.log_state(change);
        }
    }

    /// Records passing `filter`, newest timestamp first.
    ///
    /// The sort is stable: records with equal timestamps keep their order in
    /// the collection.
    #[must_use]
    pub fn list(&self, filter: &NotificationFilter) -> Vec<&NotificationRecord> {
        let mut view: Vec<&NotificationRecord> = self
            .records
            .iter()
            .filter(|record| filter.matches(record))
            .collect();
        view.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        view
    }

    /// [`list`](Self::list) using the active filter.
    #[must_use]
    pub fn list_active(&self) -> Vec<&NotificationRecord> {
        self.list(&self.filter)
    }

    /// Adds a notification stamped with a fresh id and the current time.
    ///
    /// The record is placed at the front of the collection.
    pub fn add(&mut self, notification: NewNotification) -> NotificationId {
        let id = NotificationId::generate();
        let kind = notification.kind();
        self.records
            .push_front(notification.into_record(id.clone(), Utc::now()));

        self.log(StateChange::NotificationAdded {
            id: id.to_string(),
            kind: kind.as_str().to_string(),
        });
        id
    }

    /// Inserts a fully formed record at the front of the collection.
    ///
    /// Returns `false`, leaving the store untouched, if a record with the same
    /// id already exists.
    pub fn insert(&mut self, record: NotificationRecord) -> bool {
        if self.position(record.id()).is_some() {
            return false;
        }

        self.log(StateChange::NotificationAdded {
            id: record.id().to_string(),
            kind: record.kind().as_str().to_string(),
        });
        self.records.push_front(record);
        true
    }

    /// Marks the record read. Unknown ids are ignored.
    pub fn mark_read(&mut self, id: &NotificationId) {
        if let Some(record) = self.records.iter_mut().find(|r| r.id() == id) {
            if !record.is_read() {
                record.set_read();
                self.log(StateChange::NotificationRead { id: id.to_string() });
            }
        }
    }

    pub fn mark_all_read(&mut self) {
        let previously_unread = self.unread_count();
        self.records.iter_mut().for_each(NotificationRecord::set_read);
        self.log(StateChange::AllNotificationsRead { previously_unread });
    }

    /// Deletes the record. Unknown ids are ignored.
    ///
    /// Returns whether a record was removed.
    pub fn remove(&mut self, id: &NotificationId) -> bool {
        match self.position(id) {
            Some(pos) => {
                self.records.remove(pos);
                self.log(StateChange::NotificationRemoved { id: id.to_string() });
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.records.iter().filter(|r| !r.is_read()).count()
    }

    /// Merges `update` into the active filter.
    pub fn update_filter(&mut self, update: FilterUpdate) {
        self.filter.merge(update);
        self.log(StateChange::FilterChanged {
            show_read: self.filter.show_read,
            show_unread: self.filter.show_unread,
            type_count: self.filter.types.len(),
        });
    }

    /// The active filter.
    #[must_use]
    pub fn filter(&self) -> &NotificationFilter {
        &self.filter
    }

    #[must_use]
    pub fn get(&self, id: &NotificationId) -> Option<&NotificationRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drops every record; the filter is kept.
    pub fn clear(&mut self) {
        let discarded = self.records.len();
        self.records.clear();
        self.log(StateChange::NotificationsCleared { discarded });
    }

    /// Applies a message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Add(notification) => {
                self.add(notification);
            }
            Message::MarkRead(id) => self.mark_read(&id),
            Message::MarkAllRead => self.mark_all_read(),
            Message::Remove(id) => {
                self.remove(&id);
            }
            Message::UpdateFilter(update) => self.update_filter(update),
        }
    }

    fn position(&self, id: &NotificationId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }
}
