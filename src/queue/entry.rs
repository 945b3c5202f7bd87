use crate::prelude::*;
use std::cmp::{Ordering, Reverse};
use std::fmt;

/// One enqueued value with its ordering metadata.
///
/// Entries order by priority, then by *reverse* sequence, so the maximum
/// entry is the highest-priority one inserted earliest. The value takes no
/// part in the ordering.
pub(crate) struct Entry<T> {
    value: T,
    priority: Priority,
    sequence: Sequence,
}

impl<T> Entry<T> {
    pub(crate) fn new(value: T, priority: Priority, sequence: Sequence) -> Self {
        Self {
            value,
            priority,
            sequence,
        }
    }

    pub(crate) fn priority(&self) -> Priority {
        self.priority
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }

    fn key(&self) -> (Priority, Reverse<Sequence>) {
        (self.priority, Reverse(self.sequence))
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl<T: fmt::Debug> fmt::Debug for Entry<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:?} (priority {}, {:?})",
            self.value, self.priority, self.sequence
        )
    }
}
