use thiserror::Error;

/// The only way a queue operation can fail: extracting from a queue with
/// no entries left.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("The queue is empty.")]
pub struct EmptyQueue;
