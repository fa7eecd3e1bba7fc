// SPDX-License-Identifier: MPL-2.0
//! Filter criteria for the notification list.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::record::{NotificationRecord, NotificationType};

/// Which records a derived view includes.
///
/// `show_read` and `show_unread` are independent; turning both off is legal
/// and yields an empty view. An empty `types` set means every type passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationFilter {
    #[serde(default = "default_true")]
    pub show_read: bool,
    #[serde(default = "default_true")]
    pub show_unread: bool,
    #[serde(default)]
    pub types: BTreeSet<NotificationType>,
}

fn default_true() -> bool {
    true
}

impl Default for NotificationFilter {
    fn default() -> Self {
        Self {
            show_read: true,
            show_unread: true,
            types: BTreeSet::new(),
        }
    }
}

impl NotificationFilter {
    /// Only unread records, any type.
    #[must_use]
    pub fn unread_only() -> Self {
        Self {
            show_read: false,
            ..Self::default()
        }
    }

    /// Read and unread records restricted to the given types.
    pub fn of_types(types: impl IntoIterator<Item = NotificationType>) -> Self {
        Self {
            types: types.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Returns whether `record` belongs in the view.
    #[must_use]
    pub fn matches(&self, record: &NotificationRecord) -> bool {
        let read_state_passes = if record.is_read() {
            self.show_read
        } else {
            self.show_unread
        };

        read_state_passes && (self.types.is_empty() || self.types.contains(&record.kind()))
    }

    /// Overwrites every field that is set in `update`.
    pub fn merge(&mut self, update: FilterUpdate) {
        if let Some(show_read) = update.show_read {
            self.show_read = show_read;
        }
        if let Some(show_unread) = update.show_unread {
            self.show_unread = show_unread;
        }
        if let Some(types) = update.types {
            self.types = types;
        }
    }
}

/// Partial filter; `None` fields leave the active value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub show_read: Option<bool>,
    pub show_unread: Option<bool>,
    pub types: Option<BTreeSet<NotificationType>>,
}

impl FilterUpdate {
    #[must_use]
    pub fn show_read(mut self, value: bool) -> Self {
        self.show_read = Some(value);
        self
    }

    #[must_use]
    pub fn show_unread(mut self, value: bool) -> Self {
        self.show_unread = Some(value);
        self
    }

    #[must_use]
    pub fn types(mut self, types: impl IntoIterator<Item = NotificationType>) -> Self {
        self.types = Some(types.into_iter().collect());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(kind: NotificationType, is_read: bool) -> NotificationRecord {
        NotificationRecord::new("id", kind, "t", "m", Utc::now()).read(is_read)
    }

    #[test]
    fn default_filter_passes_everything() {
        let filter = NotificationFilter::default();
        assert!(filter.matches(&record(NotificationType::System, true)));
        assert!(filter.matches(&record(NotificationType::CarReady, false)));
    }

    #[test]
    fn read_flags_are_independent() {
        let unread = NotificationFilter::unread_only();
        assert!(unread.matches(&record(NotificationType::System, false)));
        assert!(!unread.matches(&record(NotificationType::System, true)));

        let nothing = NotificationFilter {
            show_read: false,
            show_unread: false,
            types: BTreeSet::new(),
        };
        assert!(!nothing.matches(&record(NotificationType::System, false)));
        assert!(!nothing.matches(&record(NotificationType::System, true)));
    }

    #[test]
    fn type_set_restricts_kinds() {
        let filter = NotificationFilter::of_types([NotificationType::Reminder]);
        assert!(filter.matches(&record(NotificationType::Reminder, true)));
        assert!(!filter.matches(&record(NotificationType::CarReady, true)));
    }

    #[test]
    fn merge_only_touches_set_fields() {
        let mut filter = NotificationFilter::of_types([NotificationType::Reminder]);
        filter.merge(FilterUpdate::default().show_read(false));

        assert!(!filter.show_read);
        assert!(filter.show_unread);
        assert_eq!(filter.types.len(), 1);

        filter.merge(FilterUpdate::default().types(Vec::new()));
        assert!(filter.types.is_empty());
    }

    #[test]
    fn filter_deserializes_with_missing_fields() {
        let filter: NotificationFilter = toml::from_str("types = [\"car_ready\"]").unwrap();
        assert!(filter.show_read);
        assert!(filter.show_unread);
        assert!(filter.types.contains(&NotificationType::CarReady));
    }
}
