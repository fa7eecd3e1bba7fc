// SPDX-License-Identifier: MPL-2.0
//! Notification records and their classification enums.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Unique identifier of a notification record.
///
/// Locally created records get a random UUID; records coming from the
/// remote feed keep whatever id the server assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(String);

impl NotificationId {
    /// Generates a fresh random id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NotificationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NotificationId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// What happened, from the customer's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    BookingConfirmed,
    BookingCancelled,
    BookingRescheduled,
    CleaningCompleted,
    AppointmentStarted,
    CarReady,
    PaymentReceived,
    Reminder,
    System,
    ServiceStarted,
    ServiceCompleted,
}

impl NotificationType {
    /// Every variant, in declaration order.
    pub const ALL: [NotificationType; 11] = [
        NotificationType::BookingConfirmed,
        NotificationType::BookingCancelled,
        NotificationType::BookingRescheduled,
        NotificationType::CleaningCompleted,
        NotificationType::AppointmentStarted,
        NotificationType::CarReady,
        NotificationType::PaymentReceived,
        NotificationType::Reminder,
        NotificationType::System,
        NotificationType::ServiceStarted,
        NotificationType::ServiceCompleted,
    ];

    /// Stable snake_case name, identical to the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BookingConfirmed => "booking_confirmed",
            Self::BookingCancelled => "booking_cancelled",
            Self::BookingRescheduled => "booking_rescheduled",
            Self::CleaningCompleted => "cleaning_completed",
            Self::AppointmentStarted => "appointment_started",
            Self::CarReady => "car_ready",
            Self::PaymentReceived => "payment_received",
            Self::Reminder => "reminder",
            Self::System => "system",
            Self::ServiceStarted => "service_started",
            Self::ServiceCompleted => "service_completed",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual severity, independent of [`NotificationType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationStatus {
    Success,
    Warning,
    Error,
    #[default]
    Info,
}

/// A notification held by the store.
///
/// Everything except the read flag is fixed once created; the read flag is
/// only changed through [`NotificationStore`](super::NotificationStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRecord {
    id: NotificationId,
    title: String,
    message: String,
    #[serde(rename = "type")]
    kind: NotificationType,
    status: NotificationStatus,
    timestamp: DateTime<Utc>,
    is_read: bool,
    #[serde(default)]
    data: Map<String, Value>,
}

impl NotificationRecord {
    /// Builds a record with an explicit id and timestamp, e.g. one received
    /// from the remote feed. The record starts unread.
    pub fn new(
        id: impl Into<NotificationId>,
        kind: NotificationType,
        title: impl Into<String>,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            message: message.into(),
            kind,
            status: NotificationStatus::default(),
            timestamp,
            is_read: false,
            data: Map::new(),
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: NotificationStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn read(mut self, is_read: bool) -> Self {
        self.is_read = is_read;
        self
    }

    /// Adds one payload entry.
    #[must_use]
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> &NotificationId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn kind(&self) -> NotificationType {
        self.kind
    }

    #[must_use]
    pub fn status(&self) -> NotificationStatus {
        self.status
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[must_use]
    pub fn is_read(&self) -> bool {
        self.is_read
    }

    /// Event-specific payload (booking id, amount, ...).
    #[must_use]
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    pub(super) fn set_read(&mut self) {
        self.is_read = true;
    }
}

/// Input of [`NotificationStore::add`](super::NotificationStore::add): a
/// record minus the id and timestamp the store assigns.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNotification {
    title: String,
    message: String,
    kind: NotificationType,
    status: NotificationStatus,
    is_read: bool,
    data: Map<String, Value>,
}

impl NewNotification {
    pub fn new(kind: NotificationType, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind,
            status: NotificationStatus::default(),
            is_read: false,
            data: Map::new(),
        }
    }

    #[must_use]
    pub fn status(mut self, status: NotificationStatus) -> Self {
        self.status = status;
        self
    }

    /// Creates the record already read.
    #[must_use]
    pub fn read(mut self, is_read: bool) -> Self {
        self.is_read = is_read;
        self
    }

    #[must_use]
    pub fn data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> NotificationType {
        self.kind
    }

    pub(super) fn into_record(
        self,
        id: NotificationId,
        timestamp: DateTime<Utc>,
    ) -> NotificationRecord {
        NotificationRecord {
            id,
            title: self.title,
            message: self.message,
            kind: self.kind,
            status: self.status,
            timestamp,
            is_read: self.is_read,
            data: self.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = NotificationId::generate();
        let b = NotificationId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn type_names_match_serialized_form() {
        for kind in NotificationType::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn record_defaults_to_unread_info() {
        let record = NotificationRecord::new(
            "n-1",
            NotificationType::CarReady,
            "Car ready",
            "Your car is ready for pickup",
            Utc::now(),
        );

        assert!(!record.is_read());
        assert_eq!(record.status(), NotificationStatus::Info);
        assert!(record.data().is_empty());
    }

    #[test]
    fn new_notification_builder_carries_payload() {
        let record = NewNotification::new(NotificationType::PaymentReceived, "Paid", "Thanks")
            .status(NotificationStatus::Success)
            .data("amount", 49.5)
            .data("booking_id", "BK-1001")
            .into_record(NotificationId::from("x"), Utc::now());

        assert_eq!(record.status(), NotificationStatus::Success);
        assert_eq!(record.data()["amount"], 49.5);
        assert_eq!(record.data()["booking_id"], "BK-1001");
    }

    #[test]
    fn record_serializes_kind_as_type() {
        let record = NotificationRecord::new(
            "n-2",
            NotificationType::Reminder,
            "Reminder",
            "Appointment tomorrow",
            Utc::now(),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "reminder");
        assert_eq!(json["id"], "n-2");
    }
}
