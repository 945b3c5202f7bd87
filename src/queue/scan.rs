use crate::prelude::*;
use log::{debug, trace};
use std::iter::FromIterator;

/// Entries kept in insertion order; `dequeue` scans for the maximum.
///
/// `enqueue` is O(1), `dequeue` is O(n). Observable ordering is the same
/// as [`PriorityQueue`].
#[derive(Debug)]
pub struct LinearQueue<T> {
    entries: Vec<Entry<T>>,
    sequence: SequenceCounter,
}

impl<T> Default for LinearQueue<T> {
    fn default() -> Self {
        let entries = vec![];
        let sequence = SequenceCounter::default();
        Self { entries, sequence }
    }
}

impl<T> LinearQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let entries = Vec::with_capacity(capacity);
        let sequence = SequenceCounter::default();
        Self { entries, sequence }
    }

    pub fn enqueue(&mut self, value: T, priority: Priority) {
        let sequence = self.sequence.fresh();
        trace!("enqueue priority {} as {:?}", priority, sequence);
        self.entries.push(Entry::new(value, priority, sequence));
    }

    pub fn dequeue(&mut self) -> Result<T, EmptyQueue> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .max_by(|(_, left), (_, right)| left.cmp(right))
            .map(|(index, _)| index)
            .ok_or_else(|| {
                debug!("dequeue from empty queue");
                EmptyQueue
            })?;
        // `remove` rather than `swap_remove`: the rest stay in insertion order
        let entry = self.entries.remove(index);
        trace!("dequeue priority {}", entry.priority());
        Ok(entry.into_value())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Queue<T> for LinearQueue<T> {
    fn enqueue(&mut self, value: T, priority: Priority) {
        LinearQueue::enqueue(self, value, priority)
    }

    fn dequeue(&mut self) -> Result<T, EmptyQueue> {
        LinearQueue::dequeue(self)
    }

    fn len(&self) -> usize {
        LinearQueue::len(self)
    }
}

impl<T> Extend<(T, Priority)> for LinearQueue<T> {
    fn extend<I: IntoIterator<Item = (T, Priority)>>(&mut self, items: I) {
        for (value, priority) in items {
            self.enqueue(value, priority);
        }
    }
}

impl<T> FromIterator<(T, Priority)> for LinearQueue<T> {
    fn from_iter<I: IntoIterator<Item = (T, Priority)>>(items: I) -> Self {
        let mut queue = Self::new();
        queue.extend(items);
        queue
    }
}
