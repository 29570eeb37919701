//! Common traits for heap data structures
//!
//! This module provides a two-tier trait hierarchy for priority queues:
//!
//! - [`Heap`]: Base trait for push / peek / pop
//! - [`MergeableHeap`]: Extended trait adding the union of two heaps
//!
//! The heaps in this crate are **max-heaps**, like `std::collections::BinaryHeap`:
//! the element with the greatest priority is returned first.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The operation needs an element but the queue holds none
    EmptyQueue,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyQueue => write!(f, "queue is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for heap/priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element (returns `()`)
/// - `pop` removes and returns the maximum
/// - `peek` returns the maximum without removing it
///
/// Unlike `BinaryHeap` which stores values directly (using `Ord`), these heaps
/// store (priority, item) pairs to separate the ordering key from the data.
///
/// # Example
///
/// ```rust
/// use incident_heaps::Heap;
/// use incident_heaps::leftist::LeftistHeap;
///
/// let mut heap = LeftistHeap::new();
/// heap.push(3, "three");
/// heap.push(1, "one");
/// heap.push(2, "two");
///
/// assert_eq!(heap.peek(), Some((&3, &"three")));
/// assert_eq!(heap.pop(), Some((3, "three")));
/// ```
pub trait Heap<T, P: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element with the given priority
    ///
    /// # Time Complexity
    /// O(log n) for leftist heaps.
    fn push(&mut self, priority: P, item: T);

    /// Returns the maximum priority and associated item without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<(&P, &T)>;

    /// Removes and returns the maximum priority and associated item
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<(P, T)>;
}

/// Heaps that support efficient union of two instances
pub trait MergeableHeap<T, P: Ord>: Heap<T, P> {
    /// Merges another heap into this one, consuming the other heap
    ///
    /// # Time Complexity
    /// O(log n + log m) for leftist heaps.
    fn merge(&mut self, other: Self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(HeapError::EmptyQueue.to_string(), "queue is empty");
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(HeapError::EmptyQueue);
        assert_eq!(err.to_string(), "queue is empty");
    }
}
