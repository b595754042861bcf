//! Binary Heap Priority Queue for Rust
//!
//! This crate provides an array-backed binary min-heap that stores (key, value)
//! pairs and always yields the value with the smallest key first. On top of the
//! usual enqueue / peek / dequeue it supports changing the priority of stored
//! values, which schedulers and graph searches need.
//!
//! # Features
//!
//! - **Min-heap ordering**: O(log n) enqueue and dequeue, O(1) peek
//! - **Priority adjustment**: re-key every entry holding a given value
//! - **Explicit growth**: 8 initial slots, doubled whenever the queue fills up
//! - **Deep copies**: `Clone` duplicates the storage slot for slot
//! - **Layout-independent equality**: queues compare as multisets of pairs
//!
//! # Example
//!
//! ```rust
//! use binary_priority_queue::BinaryHeapPriorityQueue;
//!
//! let mut queue = BinaryHeapPriorityQueue::new();
//! queue.enqueue(5, "item1");
//! queue.enqueue(3, "item2");
//! queue.adjust_priority(&"item1", 1);
//! assert_eq!(queue.peek(), Ok(&"item1"));
//! assert_eq!(queue.to_string(), "{1:item1, 3:item2}");
//! ```
//!
//! Empty queues reject `peek` and `dequeue` with [`QueueError::Empty`].

pub mod binary_heap;
pub mod traits;

// Re-export the main types for convenience
pub use binary_heap::{BinaryHeapPriorityQueue, INITIAL_CAPACITY};
pub use traits::{AdjustablePriorityQueue, PriorityQueue, QueueError};
