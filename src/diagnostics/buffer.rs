// SPDX-License-Identifier: MPL-2.0
//! Bounded ring buffer backing the diagnostic event log.

use std::collections::VecDeque;

pub use crate::domain::diagnostics::{buffer_capacity_bounds, BufferCapacity};

/// A fixed-capacity FIFO that drops its oldest entry when full.
///
/// ```
/// use valet_state::diagnostics::CircularBuffer;
///
/// let mut log = CircularBuffer::with_raw_capacity(2);
/// log.push("booked");
/// log.push("cleaned");
/// log.push("ready");
///
/// assert_eq!(log.iter().copied().collect::<Vec<_>>(), ["cleaned", "ready"]);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Creates a buffer without going through [`BufferCapacity`] bounds.
    ///
    /// Intended for tests that need tiny buffers. Zero is raised to one.
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an item, evicting the oldest one when at capacity.
    ///
    /// Returns the evicted item, if any.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.items.len() >= self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(item);
        evicted
    }

    /// Items in insertion order (oldest first).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.items.iter()
    }

    /// Most recently pushed item.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
