//! Sharing a queue between threads behind an external lock
//!
//! The queue itself is single-threaded; callers that need concurrent access
//! wrap the whole container in a mutex. These tests check that the queue is
//! `Send` for sendable contents and behaves correctly under that pattern.

use std::sync::Arc;
use std::thread;

use binary_priority_queue::BinaryHeapPriorityQueue;
use parking_lot::Mutex;

fn assert_send<T: Send>() {}

#[test]
fn queue_is_send() {
    assert_send::<BinaryHeapPriorityQueue<u64, String>>();
}

#[test]
fn concurrent_producers_behind_mutex() {
    let queue = Arc::new(Mutex::new(BinaryHeapPriorityQueue::<u64, u64>::new()));

    let producers: Vec<_> = (0..8u64)
        .map(|thread_id| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                for i in 0..250u64 {
                    let key = i * 8 + thread_id;
                    queue.lock().enqueue(key, key);
                }
            })
        })
        .collect();

    for producer in producers {
        producer.join().unwrap();
    }

    let mut queue = queue.lock();
    assert_eq!(queue.len(), 2_000);
    for expected in 0..2_000u64 {
        assert_eq!(queue.dequeue(), Ok(expected));
    }
    assert!(queue.is_empty());
}

#[test]
fn concurrent_consumers_drain_everything_once() {
    let queue = Arc::new(Mutex::new(BinaryHeapPriorityQueue::<u32, u32>::new()));
    {
        let mut guard = queue.lock();
        for i in 0..1_000u32 {
            guard.enqueue(i, i);
        }
    }

    let consumers: Vec<_> = (0..4)
        .map(|_| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                let mut taken = Vec::new();
                // Each lock holds for one dequeue, so the keys a single
                // consumer sees are strictly increasing.
                while let Ok(value) = queue.lock().dequeue() {
                    taken.push(value);
                }
                taken
            })
        })
        .collect();

    let mut all = Vec::new();
    for consumer in consumers {
        let taken = consumer.join().unwrap();
        assert!(taken.windows(2).all(|w| w[0] < w[1]));
        all.extend(taken);
    }

    all.sort_unstable();
    assert_eq!(all, (0..1_000u32).collect::<Vec<_>>());
}
