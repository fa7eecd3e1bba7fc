// SPDX-License-Identifier: MPL-2.0
//! In-app notification inbox.
//!
//! [`NotificationStore`] keeps booking, service and payment notifications with
//! their read state, and derives filtered views sorted newest first.
//!
//! ```
//! use valet_state::notifications::{
//!     NewNotification, NotificationFilter, NotificationStore, NotificationType,
//! };
//!
//! let mut store = NotificationStore::new();
//! let id = store.add(NewNotification::new(
//!     NotificationType::CarReady,
//!     "Your car is ready",
//!     "Pick it up at bay 4",
//! ));
//! assert_eq!(store.unread_count(), 1);
//!
//! store.mark_read(&id);
//! assert!(store.list(&NotificationFilter::unread_only()).is_empty());
//! ```

mod filter;
mod record;
mod store;

pub use filter::{FilterUpdate, NotificationFilter};
pub use record::{
    NewNotification, NotificationId, NotificationRecord, NotificationStatus, NotificationType,
};
pub use store::{Message as NotificationMessage, NotificationStore};
