// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.

/// Event log capacity bounds (100 to 10000 events).
pub mod buffer_capacity_bounds {
    /// Smallest event log.
    pub const MIN: usize = 100;
    /// Largest event log.
    pub const MAX: usize = 10_000;
    /// Event log size used when nothing is configured.
    pub const DEFAULT: usize = 1000;
}

/// Number of diagnostic events kept in memory before the oldest are evicted.
///
/// Out-of-range values are clamped, so a capacity read from a hand-edited
/// settings file can never produce an unbounded or empty log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}

impl From<usize> for BufferCapacity {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}
