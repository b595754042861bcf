//! Stress tests that push the queue through long operation sequences
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use binary_priority_queue::{AdjustablePriorityQueue, BinaryHeapPriorityQueue, PriorityQueue};

/// Test massive numbers of enqueues and dequeues
fn test_massive_operations<H: PriorityQueue<i32, i32>>() {
    let mut queue = H::new();

    for i in (0..10_000).rev() {
        queue.enqueue(i, i);
    }
    assert_eq!(queue.len(), 10_000);

    for i in 0..10_000 {
        assert_eq!(queue.dequeue(), Ok(i));
    }
    assert!(queue.is_empty());
}

/// Test many priority adjustments
fn test_many_adjustments<H: AdjustablePriorityQueue<i32, i32>>() {
    let mut queue = H::new();

    for i in 0..500 {
        queue.enqueue(10_000 + i, i);
    }

    // Reverse the order: item i ends up with key 500 - i
    for i in 0..500 {
        assert_eq!(queue.adjust_priority(&i, 500 - i), 1);
    }

    for i in (0..500).rev() {
        assert_eq!(queue.dequeue(), Ok(i));
    }
}

/// Test interleaved growth, drain and reuse
fn test_fill_drain_cycles<H: PriorityQueue<u64, u64>>() {
    let mut queue = H::new();

    for round in 0..20u64 {
        let count = 64 * (round + 1);
        // Multiplicative scramble keeps keys distinct within a round
        for i in 0..count {
            queue.enqueue((i * 2_654_435_761) % 1_000_003, i);
        }
        let mut last = 0;
        for _ in 0..count {
            let value = queue.dequeue().unwrap();
            let key = (value * 2_654_435_761) % 1_000_003;
            assert!(key >= last);
            last = key;
        }
        assert!(queue.is_empty());
    }
}

/// Test clear between large batches
fn test_clear_under_load<H: PriorityQueue<i32, String>>() {
    let mut queue = H::new();
    for batch in 0..10 {
        for i in 0..1_000 {
            queue.enqueue(i % 97, format!("{}-{}", batch, i));
        }
        assert_eq!(queue.len(), 1_000);
        queue.clear();
        assert!(queue.is_empty());
    }
}

#[test]
fn binary_heap_massive_operations() {
    test_massive_operations::<BinaryHeapPriorityQueue<i32, i32>>();
}

#[test]
fn binary_heap_many_adjustments() {
    test_many_adjustments::<BinaryHeapPriorityQueue<i32, i32>>();
}

#[test]
fn binary_heap_fill_drain_cycles() {
    test_fill_drain_cycles::<BinaryHeapPriorityQueue<u64, u64>>();
}

#[test]
fn binary_heap_clear_under_load() {
    test_clear_under_load::<BinaryHeapPriorityQueue<i32, String>>();
}

#[test]
fn binary_heap_capacity_after_load() {
    let mut queue = BinaryHeapPriorityQueue::new();
    for i in 0..1_000 {
        queue.enqueue(i, ());
    }
    assert_eq!(queue.capacity(), 1_024);

    while queue.dequeue().is_ok() {}
    assert_eq!(queue.capacity(), 1_024);
}
