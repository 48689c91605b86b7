//! Configuration models for the active queue.

pub mod queue;

pub use queue::ActiveQueueConfig;
