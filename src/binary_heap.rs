//! Array-backed binary min-heap priority queue
//!
//! Entries live in one contiguous vector laid out as a complete binary tree:
//! the children of slot `i` are `2i + 1` and `2i + 2`, its parent is
//! `(i - 1) / 2`, and the smallest key is always in slot 0.
//!
//! Unlike `std::collections::BinaryHeap` this is a min-heap over separate
//! (key, value) pairs, and the storage follows an explicit growth rule: the
//! queue starts with [`INITIAL_CAPACITY`] slots and doubles whenever an
//! `enqueue` finds it full. Capacity never shrinks, not even on [`clear`].
//!
//! # Time Complexity
//!
//! | Operation         | Complexity           |
//! |-------------------|----------------------|
//! | `enqueue`         | O(log n) amortized   |
//! | `dequeue`         | O(log n)             |
//! | `peek`            | O(1)                 |
//! | `adjust_priority` | O(n)                 |
//! | `merge`           | O(m log (n + m))     |
//!
//! # Example
//!
//! ```rust
//! use binary_priority_queue::BinaryHeapPriorityQueue;
//!
//! let mut queue = BinaryHeapPriorityQueue::new();
//! queue.enqueue(2, "thunder");
//! queue.enqueue(3, "ironman");
//! queue.enqueue(4, "hulk");
//! queue.enqueue(1, "widow");
//!
//! assert_eq!(queue.peek(), Ok(&"widow"));
//! queue.adjust_priority(&"widow", 6);
//! assert_eq!(queue.peek(), Ok(&"thunder"));
//! ```
//!
//! [`clear`]: BinaryHeapPriorityQueue::clear

use std::fmt;

use log::{debug, trace};

use crate::traits::{AdjustablePriorityQueue, PriorityQueue, QueueError};

/// Number of slots a default-constructed queue starts with
pub const INITIAL_CAPACITY: usize = 8;

/// A binary min-heap of (key, value) pairs
///
/// The entry with the smallest key is returned first. Entries with equal keys
/// come out in an order decided by the heap layout, not by insertion order.
#[derive(Debug)]
pub struct BinaryHeapPriorityQueue<K: Ord, V> {
    /// Live entries in heap order
    entries: Vec<(K, V)>,
    /// Logical slot count; doubles when `entries` fills it
    capacity: usize,
}

impl<K: Ord, V> BinaryHeapPriorityQueue<K, V> {
    /// Creates an empty queue with [`INITIAL_CAPACITY`] slots
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates an empty queue with room for `capacity` entries before the first growth
    ///
    /// A capacity of zero is rounded up to one so that doubling always makes progress.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the number of live entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the queue holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the current slot count
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every entry while keeping the allocated slots
    pub fn clear(&mut self) {
        trace!(
            "clearing {} entries, keeping capacity {}",
            self.entries.len(),
            self.capacity
        );
        self.entries.clear();
    }

    /// Inserts `value` with priority `key`
    pub fn enqueue(&mut self, key: K, value: V) {
        if self.entries.len() == self.capacity {
            self.grow();
        }
        self.entries.push((key, value));
        self.sift_up(self.entries.len() - 1);
    }

    /// Returns the value with the smallest key
    pub fn peek(&self) -> Result<&V, QueueError> {
        self.peek_entry().map(|(_, value)| value)
    }

    /// Returns the smallest key
    pub fn peek_key(&self) -> Result<&K, QueueError> {
        self.peek_entry().map(|(key, _)| key)
    }

    /// Returns the entry with the smallest key
    pub fn peek_entry(&self) -> Result<(&K, &V), QueueError> {
        self.entries
            .first()
            .map(|(key, value)| (key, value))
            .ok_or(QueueError::Empty { operation: "peek" })
    }

    /// Removes the entry with the smallest key and returns its value
    pub fn dequeue(&mut self) -> Result<V, QueueError> {
        self.dequeue_entry().map(|(_, value)| value)
    }

    /// Removes the entry with the smallest key and returns it whole
    pub fn dequeue_entry(&mut self) -> Result<(K, V), QueueError> {
        if self.entries.is_empty() {
            return Err(QueueError::Empty {
                operation: "dequeue",
            });
        }

        // The last entry takes the root slot, then sinks into place.
        let min = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// Iterates over live entries in storage order
    ///
    /// The order is the raw heap layout: the first item is the minimum, the
    /// rest are only partially ordered.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&K, &V)> + '_ {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Consumes the queue and returns its entries in ascending key order
    pub fn into_sorted_vec(mut self) -> Vec<(K, V)> {
        let mut sorted = Vec::with_capacity(self.entries.len());
        while let Ok(entry) = self.dequeue_entry() {
            sorted.push(entry);
        }
        sorted
    }

    /// Moves every entry of `other` into this queue
    pub fn merge(&mut self, other: Self) {
        for (key, value) in other.entries {
            self.enqueue(key, value);
        }
    }

    /// Doubles the slot count; only called when every slot is live
    fn grow(&mut self) {
        let new_capacity = self.entries.len() * 2;
        trace!("growing queue storage {} -> {}", self.capacity, new_capacity);
        self.entries
            .reserve_exact(new_capacity - self.entries.len());
        self.capacity = new_capacity;
    }

    /// Slot count given to a copy holding `count` entries
    fn copy_capacity(count: usize) -> usize {
        INITIAL_CAPACITY.max(count) * 2
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index].0 < self.entries[parent].0 {
                self.entries.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        index
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.entries[left].0 < self.entries[smallest].0 {
                smallest = left;
            }
            if right < len && self.entries[right].0 < self.entries[smallest].0 {
                smallest = right;
            }

            if smallest != index {
                self.entries.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
        index
    }

    /// Restores heap order over the whole storage, bottom-up
    fn rebuild(&mut self) {
        for index in (0..self.entries.len() / 2).rev() {
            self.sift_down(index);
        }
    }
}

impl<K: Ord + Clone, V: PartialEq> BinaryHeapPriorityQueue<K, V> {
    /// Re-keys every entry whose value equals `value` and restores heap order
    ///
    /// All matches are found before anything moves, so each one is updated
    /// exactly once. A single match is sifted in place; several matches are
    /// followed by a full rebuild. Returns how many entries were re-keyed.
    pub fn adjust_priority(&mut self, value: &V, new_key: K) -> usize {
        let matches: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, (_, candidate))| candidate == value)
            .map(|(index, _)| index)
            .collect();

        match matches.as_slice() {
            [] => {}
            &[index] => {
                self.entries[index].0 = new_key;
                let index = self.sift_down(index);
                self.sift_up(index);
            }
            many => {
                for &index in many {
                    self.entries[index].0 = new_key.clone();
                }
                self.rebuild();
            }
        }

        if !matches.is_empty() {
            debug!("adjusted priority of {} entries", matches.len());
        }
        matches.len()
    }
}

impl<K: Ord, V> PriorityQueue<K, V> for BinaryHeapPriorityQueue<K, V> {
    fn new() -> Self {
        BinaryHeapPriorityQueue::new()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        BinaryHeapPriorityQueue::clear(self)
    }

    fn enqueue(&mut self, key: K, value: V) {
        BinaryHeapPriorityQueue::enqueue(self, key, value)
    }

    fn peek(&self) -> Result<&V, QueueError> {
        BinaryHeapPriorityQueue::peek(self)
    }

    fn dequeue(&mut self) -> Result<V, QueueError> {
        BinaryHeapPriorityQueue::dequeue(self)
    }

    fn merge(&mut self, other: Self) {
        BinaryHeapPriorityQueue::merge(self, other)
    }
}

impl<K: Ord + Clone, V: PartialEq> AdjustablePriorityQueue<K, V>
    for BinaryHeapPriorityQueue<K, V>
{
    fn adjust_priority(&mut self, value: &V, new_key: K) -> usize {
        BinaryHeapPriorityQueue::adjust_priority(self, value, new_key)
    }
}

impl<K: Ord, V> Default for BinaryHeapPriorityQueue<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone, V: Clone> Clone for BinaryHeapPriorityQueue<K, V> {
    fn clone(&self) -> Self {
        let capacity = Self::copy_capacity(self.entries.len());
        let mut entries = Vec::with_capacity(capacity);
        entries.extend(self.entries.iter().cloned());
        Self { entries, capacity }
    }

    fn clone_from(&mut self, source: &Self) {
        // Slot-for-slot copy, so the heap layout carries over unchanged.
        self.capacity = Self::copy_capacity(source.entries.len());
        self.entries = Vec::with_capacity(self.capacity);
        self.entries.extend(source.entries.iter().cloned());
    }
}

/// Two queues are equal when they hold the same multiset of (key, value)
/// pairs, whatever their internal layout.
impl<K: Ord, V: PartialEq> PartialEq for BinaryHeapPriorityQueue<K, V> {
    fn eq(&self, other: &Self) -> bool {
        if self.entries.len() != other.entries.len() {
            return false;
        }

        let mut ours: Vec<&(K, V)> = self.entries.iter().collect();
        let mut theirs: Vec<&(K, V)> = other.entries.iter().collect();
        ours.sort_by(|a, b| a.0.cmp(&b.0));
        theirs.sort_by(|a, b| a.0.cmp(&b.0));

        if !ours.iter().zip(&theirs).all(|(a, b)| a.0 == b.0) {
            return false;
        }

        // Keys line up, so each run of equal keys covers the same range in
        // both; values inside a run may appear in any order.
        let mut start = 0;
        while start < ours.len() {
            let key = &ours[start].0;
            let run = ours[start..]
                .iter()
                .take_while(|entry| entry.0 == *key)
                .count();
            let end = start + run;
            if !same_values(&ours[start..end], &theirs[start..end]) {
                return false;
            }
            start = end;
        }
        true
    }
}

impl<K: Ord, V: Eq> Eq for BinaryHeapPriorityQueue<K, V> {}

/// Checks that two equally long runs hold the same values, counting duplicates
fn same_values<K, V: PartialEq>(ours: &[&(K, V)], theirs: &[&(K, V)]) -> bool {
    let mut used = vec![false; theirs.len()];
    ours.iter().all(|(_, value)| {
        let found = theirs
            .iter()
            .enumerate()
            .position(|(index, (_, candidate))| !used[index] && candidate == value);
        match found {
            Some(index) => {
                used[index] = true;
                true
            }
            None => false,
        }
    })
}

/// Renders `{key:value, key:value}` in storage order, or `{}` when empty
impl<K: Ord + fmt::Display, V: fmt::Display> fmt::Display for BinaryHeapPriorityQueue<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, (key, value)) in self.entries.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}:{}", key, value)?;
        }
        f.write_str("}")
    }
}

impl<K: Ord, V> Extend<(K, V)> for BinaryHeapPriorityQueue<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.enqueue(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BinaryHeapPriorityQueue<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
