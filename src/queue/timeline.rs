//! The in-flight timeline: one ordered list interleaving pod-started
//! markers and cluster-event records.
//!
//! A doubly linked list over a slab (`Vec` of slots plus a free list), so
//! targeted removal by node reference is O(1) without unsafe code. Handles
//! carry a generation counter; a handle to a removed entry goes stale
//! instead of aliasing whatever reuses the slot.
//!
//! Not thread-safe on its own; the active queue provides synchronization.

use std::sync::Arc;

use crate::core::event::ClusterEvent;
use crate::core::pod::{Pod, Uid};

/// One timeline entry: either the start marker of an in-flight pod or a
/// recorded cluster event.
#[derive(Debug, Clone)]
pub enum TimelineEntry {
    /// A pod's scheduling attempt started here.
    PodMarker {
        /// UID of the in-flight pod.
        uid: Uid,
        /// Pod snapshot at the time scheduling started.
        pod: Arc<Pod>,
    },
    /// A cluster event observed while at least one pod was in flight.
    Event(ClusterEvent),
}

impl TimelineEntry {
    /// Whether this entry is a pod marker.
    #[must_use]
    pub fn is_pod_marker(&self) -> bool {
        matches!(self, Self::PodMarker { .. })
    }

    /// The event record, if this entry is one.
    #[must_use]
    pub fn as_event(&self) -> Option<&ClusterEvent> {
        match self {
            Self::Event(event) => Some(event),
            Self::PodMarker { .. } => None,
        }
    }
}

/// Stable reference to a timeline entry.
///
/// Becomes stale once the entry is removed; stale references are rejected
/// by every accessor rather than resolving to a recycled slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryRef {
    index: usize,
    generation: u64,
}

#[derive(Debug)]
struct Slot {
    entry: TimelineEntry,
    generation: u64,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Ordered sequence of pod markers and event records.
#[derive(Debug, Default)]
pub struct Timeline {
    slots: Vec<Option<Slot>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    next_generation: u64,
}

impl Timeline {
    /// Create an empty timeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty timeline with pre-allocated slots.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            next_generation: 0,
        }
    }

    /// Append an entry at the tail and return a reference to it.
    pub fn push_back(&mut self, entry: TimelineEntry) -> EntryRef {
        let generation = self.next_generation;
        self.next_generation += 1;

        let slot = Slot {
            entry,
            generation,
            prev: self.tail,
            next: None,
        };
        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(slot);
                index
            }
            None => {
                self.slots.push(Some(slot));
                self.slots.len() - 1
            }
        };

        if let Some(tail) = self.tail {
            if let Some(tail_slot) = self.slots[tail].as_mut() {
                tail_slot.next = Some(index);
            }
        } else {
            self.head = Some(index);
        }
        self.tail = Some(index);
        self.len += 1;

        EntryRef { index, generation }
    }

    /// Remove the referenced entry, returning it, or `None` if the
    /// reference is stale.
    pub fn remove(&mut self, entry_ref: EntryRef) -> Option<TimelineEntry> {
        if !self.is_live(entry_ref) {
            return None;
        }
        let slot = self.slots.get_mut(entry_ref.index)?.take()?;

        match slot.prev {
            Some(prev) => {
                if let Some(prev_slot) = self.slots[prev].as_mut() {
                    prev_slot.next = slot.next;
                }
            }
            None => self.head = slot.next,
        }
        match slot.next {
            Some(next) => {
                if let Some(next_slot) = self.slots[next].as_mut() {
                    next_slot.prev = slot.prev;
                }
            }
            None => self.tail = slot.prev,
        }

        self.free.push(entry_ref.index);
        self.len -= 1;
        Some(slot.entry)
    }

    /// Reference to the first entry.
    #[must_use]
    pub fn front(&self) -> Option<EntryRef> {
        self.reference_at(self.head?)
    }

    /// Reference to the entry after `entry_ref`, or `None` at the tail or
    /// for a stale reference.
    #[must_use]
    pub fn next(&self, entry_ref: EntryRef) -> Option<EntryRef> {
        if !self.is_live(entry_ref) {
            return None;
        }
        let next = self.slots.get(entry_ref.index)?.as_ref()?.next?;
        self.reference_at(next)
    }

    /// The referenced entry, or `None` for a stale reference.
    #[must_use]
    pub fn get(&self, entry_ref: EntryRef) -> Option<&TimelineEntry> {
        let slot = self.slots.get(entry_ref.index)?.as_ref()?;
        (slot.generation == entry_ref.generation).then_some(&slot.entry)
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the timeline has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate entries from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            timeline: self,
            cursor: self.head,
        }
    }

    fn is_live(&self, entry_ref: EntryRef) -> bool {
        matches!(
            self.slots.get(entry_ref.index),
            Some(Some(slot)) if slot.generation == entry_ref.generation
        )
    }

    fn reference_at(&self, index: usize) -> Option<EntryRef> {
        let slot = self.slots.get(index)?.as_ref()?;
        Some(EntryRef {
            index,
            generation: slot.generation,
        })
    }
}

/// Head-to-tail iterator over timeline entries.
#[derive(Debug)]
pub struct Iter<'a> {
    timeline: &'a Timeline,
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a TimelineEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        let slot = self.timeline.slots.get(index)?.as_ref()?;
        self.cursor = slot.next;
        Some(&slot.entry)
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelineEntry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
