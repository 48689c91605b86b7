//! # activeq
//!
//! Active scheduling queue with in-flight cluster event tracking for pod
//! schedulers.
//!
//! The queue feeds one or more scheduling loops through a blocking
//! [`ActiveQueue::pop`] while producers insert and update pods through a
//! keyed priority heap. While a pod is being scheduled (between `pop` and
//! [`ActiveQueue::done`]), every cluster event handed to the queue is
//! recorded on a single timeline, so the scheduler can ask afterwards
//! which events happened during the attempt and decide whether a failed
//! attempt is worth retrying.
//!
//! ## Modules
//!
//! - [`queue`] - the keyed heap, the in-flight timeline, and the active
//!   queue composing them
//! - [`core`] - pods, nodes, cluster events, change detection, errors,
//!   and metrics
//! - [`config`] - queue configuration
//!
//! ## Examples
//!
//! ### Enqueue and pop
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Instant;
//!
//! use activeq::config::ActiveQueueConfig;
//! use activeq::core::{NoopMetricsSink, Pod, QueuedPodInfo};
//! use activeq::queue::ActiveQueue;
//!
//! let config = ActiveQueueConfig::new();
//! let aq = ActiveQueue::with_default_ordering(&config, Arc::new(NoopMetricsSink));
//!
//! let pod = Arc::new(Pod::new("uid-1", "nginx").with_priority(10));
//! aq.under_lock(|unlocked| unlocked.add_or_update(QueuedPodInfo::new(pod, Instant::now())));
//! aq.broadcast();
//!
//! let popped = aq.pop().unwrap().expect("queue is open");
//! assert_eq!(popped.pod.name, "nginx");
//! aq.done(&popped.pod.uid);
//! ```
//!
//! ### Tracking events during a scheduling attempt
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Instant;
//!
//! use activeq::config::ActiveQueueConfig;
//! use activeq::core::{ClusterEventKind, ClusterObject, Node, NoopMetricsSink, Pod, QueuedPodInfo};
//! use activeq::queue::ActiveQueue;
//!
//! let config = ActiveQueueConfig::new().with_hints_enabled(true);
//! let aq = ActiveQueue::with_default_ordering(&config, Arc::new(NoopMetricsSink));
//!
//! let pod = Arc::new(Pod::new("uid-1", "nginx"));
//! aq.under_lock(|unlocked| unlocked.add_or_update(QueuedPodInfo::new(pod, Instant::now())));
//! aq.broadcast();
//! let in_flight = aq.pop().unwrap().expect("queue is open");
//!
//! // A node joins while the attempt is running.
//! let node = Arc::new(Node::new("node-1"));
//! aq.add_event_if_any_in_flight(
//!     None,
//!     Some(ClusterObject::Node(node)),
//!     ClusterEventKind::NodeAdd,
//! );
//!
//! let events = aq.cluster_events_for_pod(&in_flight).unwrap();
//! assert_eq!(events[0].kind, ClusterEventKind::NodeAdd);
//! aq.done(&in_flight.pod.uid);
//! ```
//!
//! ### Shutting down blocked consumers
//!
//! ```
//! use std::sync::Arc;
//!
//! use activeq::config::ActiveQueueConfig;
//! use activeq::core::NoopMetricsSink;
//! use activeq::queue::ActiveQueue;
//!
//! let aq = ActiveQueue::with_default_ordering(&ActiveQueueConfig::new(), Arc::new(NoopMetricsSink));
//! aq.close();
//! aq.broadcast();
//! assert!(aq.pop().unwrap().is_none());
//! ```

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod config;
pub mod core;
pub mod queue;

/// Initialize tracing for queue diagnostics.
///
/// Users can install their own subscriber; this helper installs an
/// env-based one (`RUST_LOG`) if none is set, falling back to `activeq=info`
/// so queue-close notices and in-flight lookup warnings stay visible when
/// the environment says nothing.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("activeq=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

// Re-export main types for convenience
pub use crate::config::ActiveQueueConfig;
pub use crate::core::{
    AppResult, ClusterEvent, ClusterEventKind, ClusterObject, MetricsSink, Node, Pod, QueueError,
    QueuedPodInfo, Uid,
};
pub use crate::queue::{ActiveQueue, Heap, Timeline, TimelineEntry};
