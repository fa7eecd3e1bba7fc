// SPDX-License-Identifier: MPL-2.0
//! Toast newtypes.
//!
//! Type-safe wrappers for toast display settings, always within valid ranges.

use std::time::Duration;

// =============================================================================
// Visible Limit Bounds
// =============================================================================

/// Bounds for the number of toasts shown at once (1 to 5).
pub mod visible_limit_bounds {
    /// Minimum number of visible toasts.
    pub const MIN: usize = 1;
    /// Maximum number of visible toasts.
    pub const MAX: usize = 5;
    /// Default number of visible toasts.
    pub const DEFAULT: usize = 3;
}

// =============================================================================
// VisibleLimit
// =============================================================================

/// Maximum number of toasts visible at the same time.
///
/// Values outside 1–5 are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleLimit(usize);

impl VisibleLimit {
    /// Creates a new limit, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(visible_limit_bounds::MIN, visible_limit_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for VisibleLimit {
    fn default() -> Self {
        Self(visible_limit_bounds::DEFAULT)
    }
}

// =============================================================================
// Display Duration Bounds
// =============================================================================

/// Bounds for auto-dismiss durations in seconds (1 to 30).
pub mod display_secs_bounds {
    /// Minimum display time in seconds.
    pub const MIN: u32 = 1;
    /// Maximum display time in seconds.
    pub const MAX: u32 = 30;
    /// Default display time for success and info toasts.
    pub const DEFAULT_SHORT: u32 = 3;
    /// Default display time for warning toasts.
    pub const DEFAULT_LONG: u32 = 5;
}

// =============================================================================
// DisplaySecs
// =============================================================================

/// Auto-dismiss delay of a toast, in whole seconds (1–30).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DisplaySecs(u32);

impl DisplaySecs {
    /// Creates a new display delay, clamping to the valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(display_secs_bounds::MIN, display_secs_bounds::MAX))
    }

    /// Returns the value as u32.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_limit_clamps() {
        assert_eq!(VisibleLimit::new(0).value(), visible_limit_bounds::MIN);
        assert_eq!(VisibleLimit::new(42).value(), visible_limit_bounds::MAX);
    }

    #[test]
    fn visible_limit_default() {
        assert_eq!(VisibleLimit::default().value(), visible_limit_bounds::DEFAULT);
    }

    #[test]
    fn display_secs_clamps() {
        assert_eq!(DisplaySecs::new(0).value(), display_secs_bounds::MIN);
        assert_eq!(DisplaySecs::new(600).value(), display_secs_bounds::MAX);
    }

    #[test]
    fn display_secs_as_duration() {
        assert_eq!(DisplaySecs::new(5).as_duration(), Duration::from_secs(5));
    }
}
