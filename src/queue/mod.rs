//! Queue machinery: the keyed heap, the in-flight timeline, and the
//! active queue composing them.

pub mod active;
pub mod heap;
pub mod timeline;

pub use active::{ActiveQueue, UnlockedActiveQueue, UnlockedActiveQueueReader};
pub use heap::Heap;
pub use timeline::{EntryRef, Timeline, TimelineEntry};
