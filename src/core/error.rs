//! Error types for queue operations.

use thiserror::Error;

use crate::core::pod::Uid;

/// Errors produced by the scheduling queue and its heap.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// Pop was attempted on an empty heap.
    #[error("heap is empty")]
    Empty,
    /// The item is not present in the heap.
    #[error("pod {0} not found in the active queue")]
    NotFound(Uid),
    /// The pod is not tracked as in-flight. The pod must have been popped
    /// and not yet passed to `done`; seeing this error is likely a bug in
    /// the scheduler calling the queue.
    #[error("in-flight pod {0} not found in the scheduling queue")]
    NotInFlight(Uid),
    /// Internal bookkeeping corruption (heap index mismatch).
    #[error("queue invariant violated: {0}")]
    Invariant(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
