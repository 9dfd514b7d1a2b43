// SPDX-License-Identifier: MPL-2.0
//! Bounded ring buffer for diagnostic events.
//!
//! Once full, each push drops the oldest entry.

use std::collections::VecDeque;

pub use crate::domain::diagnostics::BufferCapacity;

/// Fixed-capacity buffer that keeps the most recent entries, oldest first.
///
/// # Example
///
/// ```
/// use iced_gallery::diagnostics::CircularBuffer;
///
/// let mut buffer: CircularBuffer<u32> = CircularBuffer::with_raw_capacity(2);
/// buffer.push(1);
/// buffer.push(2);
/// assert_eq!(buffer.push(3), Some(1));
/// assert_eq!(buffer.latest(), Some(&3));
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Creates a buffer with an unchecked capacity (at least 1).
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an entry, returning the one evicted to make room.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.data.len() >= self.capacity {
            self.data.pop_front()
        } else {
            None
        };
        self.data.push_back(item);
        evicted
    }

    /// Most recently pushed entry.
    #[must_use]
    pub fn latest(&self) -> Option<&T> {
        self.data.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_evicts_oldest_in_order() {
        let mut buffer = CircularBuffer::with_raw_capacity(3);
        for value in 1..=3 {
            assert_eq!(buffer.push(value), None);
        }
        assert_eq!(buffer.push(4), Some(1));
        assert_eq!(buffer.push(5), Some(2));

        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![3, 4, 5]);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut buffer = CircularBuffer::with_raw_capacity(0);
        buffer.push("a");
        buffer.push("b");
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.latest(), Some(&"b"));
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut buffer = CircularBuffer::with_raw_capacity(4);
        buffer.push(1);
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.latest(), None);
        assert_eq!(buffer.capacity(), 4);
    }

    #[test]
    fn new_uses_clamped_capacity() {
        let buffer: CircularBuffer<u8> = CircularBuffer::new(BufferCapacity::new(3));
        assert_eq!(buffer.capacity(), 10);
    }
}
