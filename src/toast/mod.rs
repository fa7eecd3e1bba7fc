// SPDX-License-Identifier: MPL-2.0
//! Transient toast messages.
//!
//! Failures of collaborators outside this crate (network, clipboard, share)
//! and short confirmations are shown as toasts. They never block
//! interaction, unlike modals.
//!
//! # Design Considerations
//!
//! - Duration: ~3s for success/info, ~5s for warnings, manual dismiss for errors
//! - Max visible toasts: 3 by default (others are queued)

mod manager;
#[allow(clippy::module_inception)]
mod toast;

pub use manager::{Manager, Message as ToastMessage};
pub use toast::{Severity, Timings, Toast, ToastId};
