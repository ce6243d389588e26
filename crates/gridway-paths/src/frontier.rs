//! The [`Frontier`] — a generic min-priority queue over float priorities.

use std::collections::BinaryHeap;

/// An entry in the frontier, ordered by priority.
#[derive(Clone, Copy, Debug)]
struct Entry<T> {
    item: T,
    priority: f64,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority.total_cmp(&other.priority).is_eq()
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (a max-heap) pops smallest priority first.
        other.priority.total_cmp(&self.priority)
    }
}

/// A min-priority queue of `(item, priority)` pairs.
///
/// [`pop`](Frontier::pop) returns the item with the smallest priority; tie
/// order among equal priorities is unspecified. The queue holds no state
/// between searches — it is [`clear`](Frontier::clear)ed at the start of
/// every query that uses it.
#[derive(Debug)]
pub struct Frontier<T> {
    heap: BinaryHeap<Entry<T>>,
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Insert `item` with the given priority.
    #[inline]
    pub fn put(&mut self, item: T, priority: f64) {
        self.heap.push(Entry { item, priority });
    }

    /// Remove and return the item with the smallest priority.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|e| e.item)
    }

    /// Whether the frontier holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Drop all entries, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
