// SPDX-License-Identifier: MPL-2.0
//! Toast domain types.
//!
//! - [`VisibleLimit`]: how many toasts can be shown at once
//! - [`DisplaySecs`]: auto-dismiss delay in seconds

mod newtypes;

pub use newtypes::{display_secs_bounds, visible_limit_bounds, DisplaySecs, VisibleLimit};
