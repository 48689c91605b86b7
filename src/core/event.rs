//! Cluster events and the pure change-detection helpers that produce them.
//!
//! The helpers diff two versions of a node and report which abstract event
//! kinds the diff implies. They are total, deterministic, and
//! side-effect-free; the informer adapters call them and feed the results
//! into the active queue's in-flight event API.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::node::{Node, NodeCondition};
use crate::core::pod::Pod;

/// Closed enumeration of cluster event kinds the scheduler reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClusterEventKind {
    /// A node was added to the cluster.
    NodeAdd,
    /// A node was deleted from the cluster.
    NodeDelete,
    /// A node's allocatable resources changed.
    NodeAllocatableChange,
    /// A node's labels changed.
    NodeLabelChange,
    /// A node's taints changed.
    NodeTaintChange,
    /// A node's conditions changed.
    NodeConditionChange,
    /// A node's annotations changed.
    NodeAnnotationChange,
    /// A node's spec.unschedulable flag flipped.
    NodeSpecUnschedulableChange,
    /// A pod was added.
    PodAdd,
    /// A pod was updated.
    PodUpdate,
    /// A pod was deleted.
    PodDelete,
}

/// Reference to the object a cluster event is about.
#[derive(Debug, Clone)]
pub enum ClusterObject {
    /// A pod snapshot.
    Pod(Arc<Pod>),
    /// A node snapshot.
    Node(Arc<Node>),
}

/// A cluster event together with the object versions that produced it.
#[derive(Debug, Clone)]
pub struct ClusterEvent {
    /// The abstract event kind.
    pub kind: ClusterEventKind,
    /// Object version before the change, if any.
    pub old_obj: Option<ClusterObject>,
    /// Object version after the change, if any.
    pub new_obj: Option<ClusterObject>,
}

impl ClusterEvent {
    /// Build an event from a kind and the surrounding object versions.
    #[must_use]
    pub fn new(
        kind: ClusterEventKind,
        old_obj: Option<ClusterObject>,
        new_obj: Option<ClusterObject>,
    ) -> Self {
        Self {
            kind,
            old_obj,
            new_obj,
        }
    }
}

/// Returns the allocatable-change event iff allocatable resources differ.
#[must_use]
pub fn extract_node_allocatable_change(new_node: &Node, old_node: &Node) -> Option<ClusterEventKind> {
    (new_node.allocatable != old_node.allocatable).then_some(ClusterEventKind::NodeAllocatableChange)
}

/// Returns the label-change event iff label maps differ.
#[must_use]
pub fn extract_node_labels_change(new_node: &Node, old_node: &Node) -> Option<ClusterEventKind> {
    (new_node.labels != old_node.labels).then_some(ClusterEventKind::NodeLabelChange)
}

/// Returns the taint-change event iff the multiset of taints differs.
#[must_use]
pub fn extract_node_taints_change(new_node: &Node, old_node: &Node) -> Option<ClusterEventKind> {
    let mut new_taints = new_node.taints.clone();
    let mut old_taints = old_node.taints.clone();
    new_taints.sort();
    old_taints.sort();
    (new_taints != old_taints).then_some(ClusterEventKind::NodeTaintChange)
}

/// Returns the condition-change event iff the set of `(type, status)` pairs
/// differs. Heartbeat and transition timestamps update on every node status
/// report and are deliberately ignored.
#[must_use]
pub fn extract_node_conditions_change(new_node: &Node, old_node: &Node) -> Option<ClusterEventKind> {
    fn stripped(conditions: &[NodeCondition]) -> Vec<(u8, u8)> {
        let mut pairs: Vec<(u8, u8)> = conditions
            .iter()
            .map(|c| (c.condition_type as u8, c.status as u8))
            .collect();
        pairs.sort_unstable();
        pairs
    }
    (stripped(&new_node.conditions) != stripped(&old_node.conditions))
        .then_some(ClusterEventKind::NodeConditionChange)
}

/// Returns the annotation-change event iff annotation maps differ.
#[must_use]
pub fn extract_node_annotations_change(new_node: &Node, old_node: &Node) -> Option<ClusterEventKind> {
    (new_node.annotations != old_node.annotations).then_some(ClusterEventKind::NodeAnnotationChange)
}

/// Returns the unschedulable-change event iff `spec.unschedulable` flipped.
#[must_use]
pub fn extract_node_spec_unschedulable_change(
    new_node: &Node,
    old_node: &Node,
) -> Option<ClusterEventKind> {
    (new_node.unschedulable != old_node.unschedulable)
        .then_some(ClusterEventKind::NodeSpecUnschedulableChange)
}

/// Aggregate diff: every event kind implied by the change from `old_node`
/// to `new_node`, in a fixed order (unschedulable, allocatable, label,
/// taint, annotation, condition).
#[must_use]
pub fn node_scheduling_properties_change(new_node: &Node, old_node: &Node) -> Vec<ClusterEventKind> {
    [
        extract_node_spec_unschedulable_change(new_node, old_node),
        extract_node_allocatable_change(new_node, old_node),
        extract_node_labels_change(new_node, old_node),
        extract_node_taints_change(new_node, old_node),
        extract_node_annotations_change(new_node, old_node),
        extract_node_conditions_change(new_node, old_node),
    ]
    .into_iter()
    .flatten()
    .collect()
}
