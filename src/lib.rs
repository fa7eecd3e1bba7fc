// SPDX-License-Identifier: MPL-2.0
//! `valet_state` holds the client-side state of the car-valet booking app.
//!
//! It provides the notification inbox, the modal presentation queue and the
//! toast manager as plain owned types, plus the configuration and diagnostics
//! layers they share. Rendering is left to whichever UI layer owns a
//! [`session::ClientState`].

#![doc(html_root_url = "https://docs.rs/valet_state/0.1.0")]

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod modal;
pub mod notifications;
pub mod paths;
pub mod session;
pub mod toast;
