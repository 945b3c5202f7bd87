pub use crate::error::EmptyQueue;
pub use crate::queue::{LinearQueue, Priority, PriorityQueue, Queue};
pub(crate) use crate::queue::entry::Entry;
pub(crate) use crate::util::sequence::{Sequence, SequenceCounter};
