//! The active queue: the priority-ordered work queue a scheduler pops pods
//! from, with tracking of every cluster event that happens while a pod is
//! being scheduled.
//!
//! All state lives behind one `parking_lot::Mutex` paired with a `Condvar`;
//! `pop` is the only operation that suspends. In-flight bookkeeping (pod
//! markers and event records interleaved on one timeline) lets the
//! scheduler ask, after a failed attempt, which events happened during the
//! attempt and might make a retry succeed.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Condvar, Mutex};
use tracing::{debug, info, warn};

use crate::config::ActiveQueueConfig;
use crate::core::error::QueueError;
use crate::core::event::{ClusterEvent, ClusterEventKind, ClusterObject};
use crate::core::metrics::MetricsSink;
use crate::core::pod::{Pod, QueuedPodInfo, Uid};
use crate::queue::heap::Heap;
use crate::queue::timeline::{EntryRef, Timeline, TimelineEntry};

/// Restricted exclusive handle passed to [`ActiveQueue::under_lock`]
/// callbacks: heap reads plus `add_or_update`, nothing else.
pub struct UnlockedActiveQueue<'a> {
    heap: &'a mut Heap<QueuedPodInfo>,
}

impl UnlockedActiveQueue<'_> {
    /// Insert or update a queued pod. Callers that enqueue through this
    /// handle must invoke [`ActiveQueue::broadcast`] afterwards so blocked
    /// consumers observe the new item.
    pub fn add_or_update(&mut self, p_info: QueuedPodInfo) {
        self.heap.add_or_update(p_info);
    }

    /// The stored entry sharing `p_info`'s pod UID.
    #[must_use]
    pub fn get(&self, p_info: &QueuedPodInfo) -> Option<&QueuedPodInfo> {
        self.heap.get(p_info)
    }

    /// The stored entry for the given pod UID.
    #[must_use]
    pub fn get_by_key(&self, uid: &Uid) -> Option<&QueuedPodInfo> {
        self.heap.get_by_key(uid)
    }

    /// Whether an entry sharing `p_info`'s pod UID is queued.
    #[must_use]
    pub fn has(&self, p_info: &QueuedPodInfo) -> bool {
        self.heap.has(p_info)
    }
}

/// Restricted shared handle passed to [`ActiveQueue::under_rlock`]
/// callbacks: heap reads only.
pub struct UnlockedActiveQueueReader<'a> {
    heap: &'a Heap<QueuedPodInfo>,
}

impl UnlockedActiveQueueReader<'_> {
    /// The stored entry sharing `p_info`'s pod UID.
    #[must_use]
    pub fn get(&self, p_info: &QueuedPodInfo) -> Option<&QueuedPodInfo> {
        self.heap.get(p_info)
    }

    /// The stored entry for the given pod UID.
    #[must_use]
    pub fn get_by_key(&self, uid: &Uid) -> Option<&QueuedPodInfo> {
        self.heap.get_by_key(uid)
    }

    /// Whether an entry sharing `p_info`'s pod UID is queued.
    #[must_use]
    pub fn has(&self, p_info: &QueuedPodInfo) -> bool {
        self.heap.has(p_info)
    }
}

struct ActiveQueueState {
    /// Heap the scheduler actively looks at to find pods to schedule.
    /// Head of heap is the highest priority pod.
    heap: Heap<QueuedPodInfo>,

    /// The UIDs of all pods which have been popped and for which `done`
    /// has not been called yet, mapped to the pod's marker entry on the
    /// timeline. Every key appears on the timeline exactly once.
    in_flight_pods: HashMap<Uid, EntryRef>,

    /// Interleaved pod markers and event records. Markers are appended in
    /// `pop` and removed in `done`; events get appended at the tail while
    /// the lock is held, so they are serialized. After a pod's marker is
    /// removed, events at the head of the list precede every remaining
    /// in-flight pod and are pruned.
    timeline: Timeline,

    /// Sequence number of the scheduling cycle; incremented on each pop.
    sched_cycle: u64,

    /// Lets `pop` exit its wait loop while blocked on an empty queue.
    closed: bool,
}

/// Concurrent, priority-ordered scheduling queue with in-flight event
/// tracking.
///
/// Lock ordering: an enclosing scheduling queue holding a coarser lock
/// must always take that lock before calling in here; this queue never
/// acquires caller locks. Do not call [`ActiveQueue::pop`] while holding
/// an outer lock shared with producers, and do not call any other method
/// of this queue from an [`ActiveQueue::under_lock`] /
/// [`ActiveQueue::under_rlock`] callback.
pub struct ActiveQueue {
    state: Mutex<ActiveQueueState>,
    /// Notified when a pod is added to the heap or the queue closes.
    cond: Condvar,
    metrics: Arc<dyn MetricsSink>,
    /// Gates the entire in-flight bookkeeping path. When false the queue
    /// degrades to a plain priority queue.
    hints_enabled: bool,
}

impl ActiveQueue {
    /// Create a queue around a caller-built heap.
    ///
    /// The heap's comparator defines pop order; the queue does not
    /// interpret priority.
    #[must_use]
    pub fn new(
        heap: Heap<QueuedPodInfo>,
        config: &ActiveQueueConfig,
        metrics: Arc<dyn MetricsSink>,
    ) -> Self {
        Self {
            state: Mutex::new(ActiveQueueState {
                heap,
                in_flight_pods: HashMap::new(),
                timeline: Timeline::with_capacity(config.initial_capacity),
                sched_cycle: 0,
                closed: false,
            }),
            cond: Condvar::new(),
            metrics,
            hints_enabled: config.hints_enabled,
        }
    }

    /// Create a queue with the standard pod ordering: higher spec priority
    /// first, earlier enqueue time as tie-break, keyed by pod UID.
    #[must_use]
    pub fn with_default_ordering(
        config: &ActiveQueueConfig,
        metrics: Arc<dyn MetricsSink>,
    ) -> Self {
        let heap = Heap::with_capacity(
            config.initial_capacity,
            |p_info: &QueuedPodInfo| p_info.pod.uid.clone(),
            default_pod_less,
        );
        Self::new(heap, config, metrics)
    }

    /// Run `f` with the lock held exclusively, passing a handle restricted
    /// to heap reads plus `add_or_update`. `f` must not call any other
    /// method of this queue; re-entry would deadlock.
    pub fn under_lock<R>(&self, f: impl FnOnce(&mut UnlockedActiveQueue<'_>) -> R) -> R {
        let mut state = self.state.lock();
        f(&mut UnlockedActiveQueue {
            heap: &mut state.heap,
        })
    }

    /// Run `f` with the lock held, passing a read-only heap handle. `f`
    /// must not call any other method of this queue; re-entry would
    /// deadlock.
    pub fn under_rlock<R>(&self, f: impl FnOnce(&UnlockedActiveQueueReader<'_>) -> R) -> R {
        let state = self.state.lock();
        f(&UnlockedActiveQueueReader { heap: &state.heap })
    }

    /// Update the queued entry for `old_pod_info`'s pod to carry `new_pod`,
    /// re-sift it, and return the updated entry. Returns `None` without
    /// inserting when the pod is not queued.
    pub fn update(&self, new_pod: &Arc<Pod>, old_pod_info: &QueuedPodInfo) -> Option<QueuedPodInfo> {
        let mut state = self.state.lock();
        let mut p_info = state.heap.get(old_pod_info)?.clone();
        p_info.update(Arc::clone(new_pod));
        state.heap.add_or_update(p_info.clone());
        Some(p_info)
    }

    /// Delete the queued entry sharing `p_info`'s pod UID.
    ///
    /// # Errors
    ///
    /// `QueueError::NotFound` if the pod is not queued.
    pub fn delete(&self, p_info: &QueuedPodInfo) -> Result<(), QueueError> {
        self.state.lock().heap.delete(p_info).map(|_| ())
    }

    /// Remove and return the head of the queue, blocking while the queue
    /// is empty.
    ///
    /// Returns `Ok(None)` once the queue has been closed and drained. On
    /// success the entry's attempt counter and the scheduling cycle are
    /// incremented,
    /// the pod is recorded as in-flight (when hints are enabled), the
    /// unschedulable-reason gauge is decremented for every plugin that
    /// held the pod back, and both plugin sets are cleared for the next
    /// attempt.
    ///
    /// # Errors
    ///
    /// Only on internal heap corruption; an empty queue waits instead.
    pub fn pop(&self) -> Result<Option<QueuedPodInfo>, QueueError> {
        let mut state = self.state.lock();
        while state.heap.is_empty() {
            // When the queue is empty, pop blocks until a new item is
            // enqueued. close() sets the flag and the condition is
            // broadcast, which lets this loop observe the close and return
            // instead of waiting forever. Wakeups may be spurious; the
            // predicate is re-checked every time.
            if state.closed {
                info!("scheduling queue is closed");
                return Ok(None);
            }
            self.cond.wait(&mut state);
        }
        let mut p_info = state.heap.pop()?;
        p_info.attempts += 1;
        state.sched_cycle += 1;

        // In flight, no concurrent events yet.
        if self.hints_enabled {
            let marker = state.timeline.push_back(TimelineEntry::PodMarker {
                uid: p_info.pod.uid.clone(),
                pod: Arc::clone(&p_info.pod),
            });
            state.in_flight_pods.insert(p_info.pod.uid.clone(), marker);
        }

        // Update metrics and reset the plugin sets for the next attempt.
        for plugin in p_info.plugins_union() {
            self.metrics
                .dec_unschedulable_reason(&plugin, &p_info.pod.scheduler_name);
        }
        p_info.unschedulable_plugins.clear();
        p_info.pending_plugins.clear();

        Ok(Some(p_info))
    }

    /// Snapshot of all queued pods.
    #[must_use]
    pub fn list(&self) -> Vec<Arc<Pod>> {
        self.state
            .lock()
            .heap
            .list()
            .into_iter()
            .map(|p_info| p_info.pod)
            .collect()
    }

    /// Number of queued pods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().heap.len()
    }

    /// Whether no pods are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.lock().heap.is_empty()
    }

    /// Whether an entry sharing `p_info`'s pod UID is queued.
    #[must_use]
    pub fn has(&self, p_info: &QueuedPodInfo) -> bool {
        self.state.lock().heap.has(p_info)
    }

    /// Snapshot of the full timeline: markers and events in order.
    #[must_use]
    pub fn list_in_flight_events(&self) -> Vec<TimelineEntry> {
        self.state.lock().timeline.iter().cloned().collect()
    }

    /// Snapshot of all in-flight pods.
    #[must_use]
    pub fn list_in_flight_pods(&self) -> Vec<Arc<Pod>> {
        let state = self.state.lock();
        state
            .in_flight_pods
            .values()
            .filter_map(|&marker| match state.timeline.get(marker) {
                Some(TimelineEntry::PodMarker { pod, .. }) => Some(Arc::clone(pod)),
                _ => None,
            })
            .collect()
    }

    /// All cluster events recorded since `p_info`'s pod was popped, in
    /// timeline order. Markers of other in-flight pods are skipped; their
    /// attempts started later and carry no event information.
    ///
    /// # Errors
    ///
    /// `QueueError::NotInFlight` when the pod is not tracked, which means
    /// it was never popped, was already passed to `done`, or hints are
    /// disabled. The pod should have been popped before this is called,
    /// so seeing the error is likely a bug in the calling scheduler.
    pub fn cluster_events_for_pod(
        &self,
        p_info: &QueuedPodInfo,
    ) -> Result<Vec<ClusterEvent>, QueueError> {
        let state = self.state.lock();
        debug!(
            pod = %p_info.pod.name,
            uid = %p_info.pod.uid,
            timeline_len = state.timeline.len(),
            in_flight_pods = state.in_flight_pods.len(),
            "checking events for in-flight pod"
        );

        let Some(&marker) = state.in_flight_pods.get(&p_info.pod.uid) else {
            warn!(
                uid = %p_info.pod.uid,
                "in-flight pod not found in the scheduling queue; likely a scheduler bug"
            );
            return Err(QueueError::NotInFlight(p_info.pod.uid.clone()));
        };

        let mut events = Vec::new();
        let mut cursor = state.timeline.next(marker);
        while let Some(entry_ref) = cursor {
            if let Some(event) = state.timeline.get(entry_ref).and_then(TimelineEntry::as_event) {
                events.push(event.clone());
            }
            cursor = state.timeline.next(entry_ref);
        }
        Ok(events)
    }

    /// Record a pod event on the timeline if `new_pod` is in flight.
    /// Returns whether the event was recorded.
    pub fn add_event_if_pod_in_flight(
        &self,
        old_pod: Option<&Arc<Pod>>,
        new_pod: &Arc<Pod>,
        kind: ClusterEventKind,
    ) -> bool {
        let mut state = self.state.lock();
        let in_flight = state.in_flight_pods.contains_key(&new_pod.uid);
        if in_flight {
            state.timeline.push_back(TimelineEntry::Event(ClusterEvent::new(
                kind,
                old_pod.map(|pod| ClusterObject::Pod(Arc::clone(pod))),
                Some(ClusterObject::Pod(Arc::clone(new_pod))),
            )));
        }
        in_flight
    }

    /// Record a cluster event on the timeline if any pod is in flight.
    /// Returns whether the event was recorded. Events recorded while
    /// nothing is in flight are dropped; no future attempt could observe
    /// them.
    pub fn add_event_if_any_in_flight(
        &self,
        old_obj: Option<ClusterObject>,
        new_obj: Option<ClusterObject>,
        kind: ClusterEventKind,
    ) -> bool {
        let mut state = self.state.lock();
        if state.in_flight_pods.is_empty() {
            return false;
        }
        state
            .timeline
            .push_back(TimelineEntry::Event(ClusterEvent::new(kind, old_obj, new_obj)));
        true
    }

    /// Sequence number of the scheduling cycle: the total number of
    /// successful pops since construction.
    #[must_use]
    pub fn scheduling_cycle(&self) -> u64 {
        self.state.lock().sched_cycle
    }

    /// Mark the scheduling attempt for `uid` as finished. Must be called
    /// for every pod returned by [`ActiveQueue::pop`]; idempotent.
    ///
    /// Removes the pod's marker and prunes event records from the head of
    /// the timeline up to the first remaining marker. Those events precede
    /// the attempt of every pod still in flight, so nothing can observe
    /// them anymore.
    pub fn done(&self, uid: &Uid) {
        let mut state = self.state.lock();
        let Some(marker) = state.in_flight_pods.remove(uid) else {
            // Already done()ed.
            return;
        };
        state.timeline.remove(marker);

        while let Some(front) = state.timeline.front() {
            match state.timeline.get(front) {
                Some(entry) if entry.is_pod_marker() => break,
                Some(_) => {
                    state.timeline.remove(front);
                }
                None => break,
            }
        }
    }

    /// Close the queue. Callers must invoke [`ActiveQueue::broadcast`]
    /// afterwards to wake blocked consumers; the two are separate so an
    /// enclosing queue can batch wake-ups.
    pub fn close(&self) {
        self.state.lock().closed = true;
    }

    /// Wake every consumer blocked in [`ActiveQueue::pop`]. Always a full
    /// broadcast: multiple consumers may race for a single queued pod, and
    /// the losers re-check the predicate and block again.
    pub fn broadcast(&self) {
        self.cond.notify_all();
    }
}

/// Standard pod ordering: higher spec priority first, then earlier enqueue
/// time.
fn default_pod_less(a: &QueuedPodInfo, b: &QueuedPodInfo) -> bool {
    if a.pod.priority != b.pod.priority {
        return a.pod.priority > b.pod.priority;
    }
    a.timestamp < b.timestamp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metrics::{InMemoryMetricsSink, NoopMetricsSink};
    use std::time::Instant;

    fn queue(hints_enabled: bool) -> ActiveQueue {
        let config = ActiveQueueConfig::new().with_hints_enabled(hints_enabled);
        ActiveQueue::with_default_ordering(&config, Arc::new(NoopMetricsSink))
    }

    fn enqueue(aq: &ActiveQueue, p_info: QueuedPodInfo) {
        aq.under_lock(|unlocked| unlocked.add_or_update(p_info));
        aq.broadcast();
    }

    fn pod_info(uid: &str, priority: i32) -> QueuedPodInfo {
        let pod = Arc::new(Pod::new(uid, uid).with_priority(priority));
        QueuedPodInfo::new(pod, Instant::now())
    }

    #[test]
    fn test_pop_follows_priority_then_fifo() {
        let aq = queue(true);
        enqueue(&aq, pod_info("low", 1));
        enqueue(&aq, pod_info("high", 10));
        enqueue(&aq, pod_info("mid", 5));

        assert_eq!(aq.pop().unwrap().unwrap().pod.uid, Uid::from("high"));
        assert_eq!(aq.pop().unwrap().unwrap().pod.uid, Uid::from("mid"));
        assert_eq!(aq.pop().unwrap().unwrap().pod.uid, Uid::from("low"));
        assert_eq!(aq.scheduling_cycle(), 3);
    }

    #[test]
    fn test_pop_increments_attempts_and_clears_plugins() {
        let metrics = Arc::new(InMemoryMetricsSink::new());
        let config = ActiveQueueConfig::new().with_hints_enabled(true);
        let aq = ActiveQueue::with_default_ordering(
            &config,
            Arc::clone(&metrics) as Arc<dyn MetricsSink>,
        );

        let mut p_info = pod_info("a", 0);
        p_info.attempts = 2;
        p_info.unschedulable_plugins.insert("NodeResourcesFit".to_string());
        p_info.pending_plugins.insert("VolumeBinding".to_string());
        metrics.inc_unschedulable_reason("NodeResourcesFit", "default-scheduler");
        metrics.inc_unschedulable_reason("VolumeBinding", "default-scheduler");
        enqueue(&aq, p_info);

        let popped = aq.pop().unwrap().unwrap();
        assert_eq!(popped.attempts, 3);
        assert!(popped.unschedulable_plugins.is_empty());
        assert!(popped.pending_plugins.is_empty());
        assert_eq!(metrics.unschedulable_reason("NodeResourcesFit", "default-scheduler"), 0);
        assert_eq!(metrics.unschedulable_reason("VolumeBinding", "default-scheduler"), 0);
    }

    #[test]
    fn test_update_never_inserts() {
        let aq = queue(true);
        let absent = pod_info("ghost", 0);
        let new_pod = Arc::new(Pod::new("ghost", "ghost").with_priority(3));

        assert!(aq.update(&new_pod, &absent).is_none());
        assert_eq!(aq.len(), 0);
    }

    #[test]
    fn test_update_mutates_and_resifts() {
        let aq = queue(true);
        enqueue(&aq, pod_info("a", 1));
        enqueue(&aq, pod_info("b", 5));

        let stored_a = aq
            .under_rlock(|reader| reader.get_by_key(&Uid::from("a")).cloned())
            .unwrap();
        let raised = Arc::new(Pod::new("a", "a").with_priority(50));
        let updated = aq.update(&raised, &stored_a).unwrap();
        assert_eq!(updated.pod.priority, 50);

        assert_eq!(aq.pop().unwrap().unwrap().pod.uid, Uid::from("a"));
        assert_eq!(aq.pop().unwrap().unwrap().pod.uid, Uid::from("b"));
    }

    #[test]
    fn test_delete_absent_surfaces_not_found() {
        let aq = queue(true);
        let err = aq.delete(&pod_info("missing", 0)).unwrap_err();
        assert_eq!(err, QueueError::NotFound(Uid::from("missing")));
    }

    #[test]
    fn test_event_capture_between_pop_and_done() {
        let aq = queue(true);
        enqueue(&aq, pod_info("a", 0));
        let popped = aq.pop().unwrap().unwrap();

        let old_pod = Arc::new(Pod::new("a", "a"));
        let new_pod = Arc::new(Pod::new("a", "a").with_priority(1));
        assert!(aq.add_event_if_pod_in_flight(Some(&old_pod), &new_pod, ClusterEventKind::PodUpdate));

        let events = aq.cluster_events_for_pod(&popped).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, ClusterEventKind::PodUpdate);

        aq.done(&popped.pod.uid);
        let err = aq.cluster_events_for_pod(&popped).unwrap_err();
        assert_eq!(err, QueueError::NotInFlight(Uid::from("a")));
        assert!(aq.list_in_flight_events().is_empty());
    }

    #[test]
    fn test_events_for_pod_not_in_flight_are_dropped() {
        let aq = queue(true);
        let pod = Arc::new(Pod::new("a", "a"));
        assert!(!aq.add_event_if_pod_in_flight(None, &pod, ClusterEventKind::PodAdd));
        assert!(!aq.add_event_if_any_in_flight(None, None, ClusterEventKind::NodeAdd));
        assert!(aq.list_in_flight_events().is_empty());
    }

    #[test]
    fn test_timeline_pruning_on_done() {
        let aq = queue(true);
        enqueue(&aq, pod_info("a", 2));
        enqueue(&aq, pod_info("b", 1));

        let a = aq.pop().unwrap().unwrap();
        let b = aq.pop().unwrap().unwrap();
        assert!(aq.add_event_if_any_in_flight(None, None, ClusterEventKind::NodeAdd));
        assert!(aq.add_event_if_any_in_flight(None, None, ClusterEventKind::NodeTaintChange));

        // Both attempts started before either event, so both observe both.
        let events_a = aq.cluster_events_for_pod(&a).unwrap();
        let events_b = aq.cluster_events_for_pod(&b).unwrap();
        assert_eq!(
            events_a.iter().map(|e| e.kind).collect::<Vec<_>>(),
            vec![ClusterEventKind::NodeAdd, ClusterEventKind::NodeTaintChange]
        );
        assert_eq!(
            events_b.iter().map(|e| e.kind).collect::<Vec<_>>(),
            vec![ClusterEventKind::NodeAdd, ClusterEventKind::NodeTaintChange]
        );

        // Removing the older marker leaves b's marker at the head; the
        // events sit behind it and stay observable for b.
        aq.done(&a.pod.uid);
        let remaining = aq.list_in_flight_events();
        assert!(remaining[0].is_pod_marker());
        assert_eq!(remaining.len(), 3);
        assert_eq!(aq.cluster_events_for_pod(&b).unwrap().len(), 2);

        // Last marker out prunes the timeline to empty.
        aq.done(&b.pod.uid);
        assert!(aq.list_in_flight_events().is_empty());
        assert!(aq.list_in_flight_pods().is_empty());
    }

    #[test]
    fn test_done_is_idempotent() {
        let aq = queue(true);
        enqueue(&aq, pod_info("a", 0));
        let popped = aq.pop().unwrap().unwrap();

        aq.done(&popped.pod.uid);
        aq.done(&popped.pod.uid);
        assert!(aq.list_in_flight_pods().is_empty());
    }

    #[test]
    fn test_hints_disabled_degrades_to_plain_queue() {
        let aq = queue(false);
        enqueue(&aq, pod_info("a", 0));
        let popped = aq.pop().unwrap().unwrap();

        // No in-flight bookkeeping: event APIs refuse and the walk errors.
        let pod = Arc::new(Pod::new("a", "a"));
        assert!(!aq.add_event_if_pod_in_flight(None, &pod, ClusterEventKind::PodUpdate));
        assert!(!aq.add_event_if_any_in_flight(None, None, ClusterEventKind::NodeAdd));
        assert_eq!(
            aq.cluster_events_for_pod(&popped).unwrap_err(),
            QueueError::NotInFlight(Uid::from("a"))
        );
        assert!(aq.list_in_flight_events().is_empty());

        // done stays callable and inert.
        aq.done(&popped.pod.uid);
        assert_eq!(aq.scheduling_cycle(), 1);
    }

    #[test]
    fn test_pop_drains_then_returns_none_after_close() {
        let aq = queue(true);
        enqueue(&aq, pod_info("a", 0));
        aq.close();
        aq.broadcast();

        // Pods already queued are still handed out after close; only an
        // empty closed queue refuses.
        let drained = aq.pop().unwrap().expect("queued pod should drain");
        assert_eq!(drained.pod.uid, Uid::from("a"));
        assert!(aq.pop().unwrap().is_none());

        // The queue stays usable for everything but blocking.
        enqueue(&aq, pod_info("b", 0));
        assert_eq!(aq.len(), 1);
        assert!(aq.pop().unwrap().is_some());
    }

    #[test]
    fn test_list_and_has() {
        let aq = queue(true);
        enqueue(&aq, pod_info("a", 0));
        enqueue(&aq, pod_info("b", 0));

        let listed = aq.list();
        assert_eq!(listed.len(), 2);
        assert!(aq.has(&pod_info("a", 99)));
        assert!(!aq.has(&pod_info("c", 0)));
        assert!(!aq.is_empty());
    }

    #[test]
    fn test_in_flight_snapshots() {
        let aq = queue(true);
        enqueue(&aq, pod_info("a", 1));
        enqueue(&aq, pod_info("b", 0));
        let a = aq.pop().unwrap().unwrap();

        let in_flight = aq.list_in_flight_pods();
        assert_eq!(in_flight.len(), 1);
        assert_eq!(in_flight[0].uid, a.pod.uid);

        let entries = aq.list_in_flight_events();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_pod_marker());
    }
}
