//! Priority queues with FIFO tie-breaking.
//!
//! Both realizations hand out values highest priority first. Values of
//! equal priority come out in the order they went in, whatever else has
//! been enqueued or dequeued in between.

pub(crate) mod entry;
mod heap;
mod scan;

pub use heap::PriorityQueue;
pub use scan::LinearQueue;

use crate::error::EmptyQueue;
use std::marker::PhantomData;

/// Higher values are dequeued first. Any value is accepted.
pub type Priority = i64;

/// Operations shared by every queue realization.
pub trait Queue<T> {
    /// Add `value` behind every entry already present with the same
    /// `priority`. Never fails.
    fn enqueue(&mut self, value: T, priority: Priority);

    /// Remove and return the highest-priority value, earliest-inserted
    /// first among equals. An empty queue is left untouched.
    fn dequeue(&mut self) -> Result<T, EmptyQueue>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dequeue until the queue is empty.
    fn drain(&mut self) -> Drain<'_, T, Self>
    where
        Self: Sized,
    {
        Drain {
            queue: self,
            _phantom: PhantomData,
        }
    }
}

/// Iterator returned by [`Queue::drain`].
///
/// Dropping it early leaves the remaining entries in the queue.
pub struct Drain<'queue, T, Q> {
    queue: &'queue mut Q,
    _phantom: PhantomData<T>,
}

impl<T, Q: Queue<T>> Iterator for Drain<'_, T, Q> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T, Q: Queue<T>> ExactSizeIterator for Drain<'_, T, Q> {}
