// SPDX-License-Identifier: MPL-2.0
//! Modal presentation queue.
//!
//! Screens ask for overlays (booking confirmation, vehicle picker, payment
//! sheet, ...) through [`ModalQueue::enqueue`]; the renderer only ever draws
//! [`ModalQueue::current`].
//!
//! ```
//! use valet_state::modal::{ModalQueue, ModalSpec, PresentationKind};
//!
//! let mut modals = ModalQueue::new();
//! let confirm = modals.enqueue(ModalSpec::new("confirm").title("Confirm booking"));
//! modals.enqueue(ModalSpec::new("rate").presentation(PresentationKind::Sheet));
//!
//! assert_eq!(modals.current().map(|m| m.id()), Some(confirm));
//! modals.dismiss(None);
//! assert_eq!(modals.current().map(|m| *m.content()), Some("rate"));
//! ```
//!
//! # Lifecycle
//!
//! A request is queued, becomes current when it reaches the head, and is
//! dismissed. A request dismissed while still waiting is never current. Ids
//! are never reused.

mod queue;
mod request;

pub use queue::{Message as ModalMessage, ModalQueue};
pub use request::{
    ModalDefaults, ModalId, ModalRequest, ModalSpec, ModalUpdate, OnClose, PresentationKind,
    TransitionKind,
};
