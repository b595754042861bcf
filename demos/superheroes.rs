//! Demonstration of the queue: enqueue a few heroes, peek, then demote one
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=trace cargo run --example superheroes
//! ```

use binary_priority_queue::{BinaryHeapPriorityQueue, QueueError};

fn main() -> Result<(), QueueError> {
    env_logger::init();

    let mut queue = BinaryHeapPriorityQueue::new();
    for (key, value) in [(2, "thunder"), (3, "ironman"), (4, "hulk"), (1, "widow")] {
        println!("queue.enqueue({}, {:?});", key, value);
        queue.enqueue(key, value);
    }
    println!("queue.peek()  {}", queue.peek()?);
    println!("queue         {}", queue);
    println!("-------------------------------");

    println!("queue.adjust_priority(&\"widow\", 6);");
    queue.adjust_priority(&"widow", 6);
    println!("queue.peek()  {}", queue.peek()?);
    println!("queue         {}", queue);
    println!("-------------------------------");

    while !queue.is_empty() {
        println!("queue.dequeue()  {}", queue.dequeue()?);
    }
    Ok(())
}
