//! Pod snapshot types and the unit stored by the active queue.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Opaque, globally unique pod identifier.
///
/// Stable across updates of the same logical pod; used as the key for heap
/// indexing and in-flight tracking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Uid(String);

impl Uid {
    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Uid {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Uid {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable pod snapshot taken at enqueue or event time.
///
/// The queue and timeline share snapshots by `Arc`; a pod update produces a
/// fresh snapshot rather than mutating an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pod {
    /// Unique identifier, stable across updates.
    pub uid: Uid,
    /// Pod name.
    pub name: String,
    /// Namespace the pod lives in.
    pub namespace: String,
    /// Name of the scheduler responsible for this pod. Used to label the
    /// unschedulable-reason metric.
    pub scheduler_name: String,
    /// Scheduling priority. Interpretation belongs to the comparator.
    pub priority: i32,
    /// Node the pod is bound to, if any.
    pub node_name: Option<String>,
    /// Pod labels.
    pub labels: BTreeMap<String, String>,
}

impl Pod {
    /// Create a pod snapshot with the given identity and defaults elsewhere.
    #[must_use]
    pub fn new(uid: impl Into<Uid>, name: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            name: name.into(),
            namespace: "default".to_string(),
            scheduler_name: "default-scheduler".to_string(),
            priority: 0,
            node_name: None,
            labels: BTreeMap::new(),
        }
    }

    /// Set the namespace.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the scheduler name.
    #[must_use]
    pub fn with_scheduler_name(mut self, scheduler_name: impl Into<String>) -> Self {
        self.scheduler_name = scheduler_name.into();
        self
    }

    /// Set the scheduling priority.
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Add a label.
    #[must_use]
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }
}

/// The unit the active queue's heap stores.
///
/// Identity for lookup and update is the pod UID; ordering is supplied by
/// the comparator given to the heap at construction.
#[derive(Debug, Clone)]
pub struct QueuedPodInfo {
    /// The pod snapshot at enqueue time.
    pub pod: Arc<Pod>,
    /// Number of schedule attempts; incremented on each pop.
    pub attempts: usize,
    /// The time the pod was (last) added to the queue. Comparator tie-break.
    pub timestamp: Instant,
    /// The time the pod was added to the queue for the first time. The pod
    /// may be re-added multiple times before it is successfully scheduled;
    /// this is not updated once set.
    pub initial_attempt_timestamp: Option<Instant>,
    /// Plugins that reported the pod unschedulable in the last attempt.
    pub unschedulable_plugins: HashSet<String>,
    /// Plugins that put the pod into a waiting state in the last attempt.
    pub pending_plugins: HashSet<String>,
}

impl QueuedPodInfo {
    /// Wrap a pod snapshot for queueing, stamping `now` as the enqueue time.
    #[must_use]
    pub fn new(pod: Arc<Pod>, now: Instant) -> Self {
        Self {
            pod,
            attempts: 0,
            timestamp: now,
            initial_attempt_timestamp: Some(now),
            unschedulable_plugins: HashSet::new(),
            pending_plugins: HashSet::new(),
        }
    }

    /// UID of the wrapped pod.
    #[must_use]
    pub fn uid(&self) -> &Uid {
        &self.pod.uid
    }

    /// Replace the pod snapshot in place, keeping attempt bookkeeping.
    pub fn update(&mut self, pod: Arc<Pod>) {
        self.pod = pod;
    }

    /// Union of unschedulable and pending plugin names.
    #[must_use]
    pub fn plugins_union(&self) -> HashSet<String> {
        self.unschedulable_plugins
            .union(&self.pending_plugins)
            .cloned()
            .collect()
    }
}
