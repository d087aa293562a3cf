// SPDX-License-Identifier: MPL-2.0
//! Ring buffer holding the most recent banner diagnostic events.
//!
//! Oldest entries are evicted once capacity is reached, so a long-running
//! application never grows its diagnostics memory.

use std::collections::VecDeque;

pub use crate::domain::banner::BufferCapacity;

/// Fixed-capacity FIFO; pushing into a full buffer drops the oldest element.
///
/// # Example
///
/// ```
/// use iced_snackbar::diagnostics::{BufferCapacity, CircularBuffer};
///
/// let mut buffer: CircularBuffer<&str> = CircularBuffer::new(BufferCapacity::default());
/// buffer.push("opened");
/// buffer.push("closed");
///
/// assert_eq!(buffer.latest(), Some(&"closed"));
/// assert_eq!(buffer.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates a buffer bounded by a validated capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Creates a buffer from an unvalidated capacity (at least 1).
    ///
    /// Meant for tests that need tiny buffers.
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an element, evicting the oldest one when full.
    ///
    /// Returns the evicted element, if any.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.data.len() >= self.capacity {
            self.data.pop_front()
        } else {
            None
        };
        self.data.push_back(item);
        evicted
    }

    /// Iterates oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.data.iter()
    }

    /// Returns the most recently pushed element.
    #[must_use]
    pub fn latest(&self) -> Option<&T> {
        self.data.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}
