pub mod error;
pub mod prelude;
pub mod queue;
pub mod script;
mod util;

pub use crate::error::EmptyQueue;
pub use crate::queue::{LinearQueue, Priority, PriorityQueue, Queue};
