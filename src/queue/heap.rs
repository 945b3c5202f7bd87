use crate::prelude::*;
use log::{debug, trace};
use std::collections::BinaryHeap;
use std::iter::FromIterator;

/// Binary max-heap keyed on `(priority, earliest sequence)`.
///
/// `enqueue` and `dequeue` are both O(log n).
#[derive(Debug)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    sequence: SequenceCounter,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        let heap = BinaryHeap::default();
        let sequence = SequenceCounter::default();
        Self { heap, sequence }
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let heap = BinaryHeap::with_capacity(capacity);
        let sequence = SequenceCounter::default();
        Self { heap, sequence }
    }

    pub fn enqueue(&mut self, value: T, priority: Priority) {
        let sequence = self.sequence.fresh();
        trace!("enqueue priority {} as {:?}", priority, sequence);
        self.heap.push(Entry::new(value, priority, sequence));
    }

    pub fn dequeue(&mut self) -> Result<T, EmptyQueue> {
        let entry = self.heap.pop().ok_or_else(|| {
            debug!("dequeue from empty queue");
            EmptyQueue
        })?;
        trace!("dequeue priority {}", entry.priority());
        Ok(entry.into_value())
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Queue<T> for PriorityQueue<T> {
    fn enqueue(&mut self, value: T, priority: Priority) {
        PriorityQueue::enqueue(self, value, priority)
    }

    fn dequeue(&mut self) -> Result<T, EmptyQueue> {
        PriorityQueue::dequeue(self)
    }

    fn len(&self) -> usize {
        PriorityQueue::len(self)
    }
}

impl<T> Extend<(T, Priority)> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = (T, Priority)>>(&mut self, items: I) {
        for (value, priority) in items {
            self.enqueue(value, priority);
        }
    }
}

impl<T> FromIterator<(T, Priority)> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = (T, Priority)>>(items: I) -> Self {
        let mut queue = Self::new();
        queue.extend(items);
        queue
    }
}
