// SPDX-License-Identifier: MPL-2.0
//! Default values for every configuration setting.

use crate::domain::diagnostics::buffer_capacity_bounds;
use crate::domain::toast::{display_secs_bounds, visible_limit_bounds};

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Whether read notifications are listed by default.
pub const DEFAULT_SHOW_READ: bool = true;

/// Whether unread notifications are listed by default.
pub const DEFAULT_SHOW_UNREAD: bool = true;

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Toasts visible at once before new ones are queued.
pub const DEFAULT_TOAST_MAX_VISIBLE: usize = visible_limit_bounds::DEFAULT;

/// Display time of success/info toasts, in seconds.
pub const DEFAULT_TOAST_SUCCESS_SECS: u32 = display_secs_bounds::DEFAULT_SHORT;

/// Display time of warning toasts, in seconds.
pub const DEFAULT_TOAST_WARNING_SECS: u32 = display_secs_bounds::DEFAULT_LONG;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;

/// Smallest accepted diagnostic buffer.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::MIN;

/// Largest accepted diagnostic buffer.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::MAX;
