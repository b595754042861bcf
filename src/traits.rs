//! Common traits for priority queue data structures
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`PriorityQueue`]: Base trait with enqueue / peek / dequeue
//! - [`AdjustablePriorityQueue`]: Extended trait adding value-addressed priority changes
//!
//! Queues store (key, value) pairs and always yield the value with the smallest
//! key first. Ties between equal keys are broken by heap structure, not by
//! insertion order.

use thiserror::Error;

/// Error type for queue operations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The queue holds no entries, so there is no minimum to return
    #[error("attempted to {operation} an empty queue")]
    Empty {
        /// Name of the operation that was rejected (`"peek"` or `"dequeue"`)
        operation: &'static str,
    },
}

/// Base trait for min-ordered priority queues
///
/// # Example
///
/// ```rust
/// use binary_priority_queue::{BinaryHeapPriorityQueue, PriorityQueue};
///
/// let mut queue = BinaryHeapPriorityQueue::new();
/// queue.enqueue(3, "three");
/// queue.enqueue(1, "one");
/// queue.enqueue(2, "two");
///
/// assert_eq!(queue.peek(), Ok(&"one"));
/// assert_eq!(queue.dequeue(), Ok("one"));
/// assert_eq!(queue.len(), 2);
/// ```
pub trait PriorityQueue<K: Ord, V> {
    /// Creates a new empty queue
    fn new() -> Self;

    /// Returns true if the queue holds no entries
    fn is_empty(&self) -> bool;

    /// Returns the number of live entries
    fn len(&self) -> usize;

    /// Removes every entry without giving back allocated storage
    fn clear(&mut self);

    /// Inserts `value` with priority `key`
    ///
    /// # Time Complexity
    /// O(log n) amortized; a growth step copies every entry.
    fn enqueue(&mut self, key: K, value: V);

    /// Returns the value with the smallest key without removing it
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] if the queue is empty.
    fn peek(&self) -> Result<&V, QueueError>;

    /// Removes and returns the value with the smallest key
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] if the queue is empty.
    fn dequeue(&mut self) -> Result<V, QueueError>;

    /// Moves every entry of `other` into this queue, consuming it
    fn merge(&mut self, other: Self);
}

/// Extended queue trait for changing the priority of stored values
///
/// Entries are addressed by value equality rather than by handle, so every
/// entry whose value equals the argument is re-keyed.
///
/// # Example
///
/// ```rust
/// use binary_priority_queue::{AdjustablePriorityQueue, BinaryHeapPriorityQueue, PriorityQueue};
///
/// let mut queue = BinaryHeapPriorityQueue::new();
/// queue.enqueue(10, "item");
/// queue.enqueue(20, "other");
/// assert_eq!(queue.adjust_priority(&"other", 5), 1);
/// assert_eq!(queue.peek(), Ok(&"other"));
/// ```
pub trait AdjustablePriorityQueue<K: Ord + Clone, V: PartialEq>: PriorityQueue<K, V> {
    /// Replaces the key of every entry whose value equals `value` with `new_key`
    ///
    /// Returns the number of entries that were re-keyed. A value that is not
    /// present leaves the queue untouched and returns 0.
    ///
    /// # Time Complexity
    /// O(n) scan plus O(log n) for a single match, O(n) rebuild for several.
    fn adjust_priority(&mut self, value: &V, new_key: K) -> usize;
}
