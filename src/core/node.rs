//! Node snapshot types consumed by the change-event helpers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Resource quantity in milli-units (1000 = one whole unit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Quantity(
    /// Value in milli-units.
    pub i64,
);

/// Map from resource name (cpu, memory, extended resources) to quantity.
pub type ResourceList = BTreeMap<String, Quantity>;

/// Effect a taint has on pods that do not tolerate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaintEffect {
    /// Do not schedule new pods onto the node.
    NoSchedule,
    /// Avoid scheduling new pods onto the node if possible.
    PreferNoSchedule,
    /// Evict running pods that do not tolerate the taint.
    NoExecute,
}

/// A taint applied to a node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Taint {
    /// Taint key.
    pub key: String,
    /// Taint value.
    pub value: String,
    /// Effect on non-tolerating pods.
    pub effect: TaintEffect,
}

/// Known node condition types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeConditionType {
    /// Node is healthy and ready to accept pods.
    Ready,
    /// Node is under memory pressure.
    MemoryPressure,
    /// Node is under disk pressure.
    DiskPressure,
    /// Node is running out of process IDs.
    PidPressure,
    /// Node network is misconfigured.
    NetworkUnavailable,
}

/// Status of a node condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionStatus {
    /// The condition holds.
    True,
    /// The condition does not hold.
    False,
    /// The condition cannot be determined.
    Unknown,
}

/// An observed node condition.
///
/// The change detector compares only `(condition_type, status)` pairs; the
/// two timestamp fields update on every heartbeat and carry no scheduling
/// signal. If fields are added here, `extract_node_conditions_change` must
/// be reevaluated (a test constructs this struct exhaustively to force
/// that).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeCondition {
    /// Which aspect of the node this condition reports.
    pub condition_type: NodeConditionType,
    /// Whether the condition currently holds.
    pub status: ConditionStatus,
    /// Machine-readable reason for the last transition.
    pub reason: String,
    /// Human-readable transition details.
    pub message: String,
    /// Last heartbeat, milliseconds since epoch.
    pub last_heartbeat_time: Option<u64>,
    /// Last status transition, milliseconds since epoch.
    pub last_transition_time: Option<u64>,
}

impl NodeCondition {
    /// Create a condition with empty reason/message and no timestamps.
    #[must_use]
    pub fn new(condition_type: NodeConditionType, status: ConditionStatus) -> Self {
        Self {
            condition_type,
            status,
            reason: String::new(),
            message: String::new(),
            last_heartbeat_time: None,
            last_transition_time: None,
        }
    }
}

/// Node snapshot carrying the properties the scheduler reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Node name.
    pub name: String,
    /// Node labels.
    pub labels: BTreeMap<String, String>,
    /// Node annotations.
    pub annotations: BTreeMap<String, String>,
    /// Whether the node is marked unschedulable in its spec.
    pub unschedulable: bool,
    /// Taints applied to the node.
    pub taints: Vec<Taint>,
    /// Allocatable resources reported by the node.
    pub allocatable: ResourceList,
    /// Observed conditions.
    pub conditions: Vec<NodeCondition>,
}

impl Node {
    /// Create a schedulable node with no labels, taints, or conditions.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            labels: BTreeMap::new(),
            annotations: BTreeMap::new(),
            unschedulable: false,
            taints: Vec::new(),
            allocatable: ResourceList::new(),
            conditions: Vec::new(),
        }
    }

    /// Add a label.
    #[must_use]
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Add an annotation.
    #[must_use]
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }

    /// Mark the node (un)schedulable.
    #[must_use]
    pub fn with_unschedulable(mut self, unschedulable: bool) -> Self {
        self.unschedulable = unschedulable;
        self
    }

    /// Replace the taint list.
    #[must_use]
    pub fn with_taints(mut self, taints: Vec<Taint>) -> Self {
        self.taints = taints;
        self
    }

    /// Set one allocatable resource quantity.
    #[must_use]
    pub fn with_allocatable(mut self, resource: impl Into<String>, quantity: Quantity) -> Self {
        self.allocatable.insert(resource.into(), quantity);
        self
    }

    /// Append an observed condition.
    #[must_use]
    pub fn with_condition(mut self, condition: NodeCondition) -> Self {
        self.conditions.push(condition);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_accumulates() {
        let node = Node::new("node-1")
            .with_label("zone", "us-east-1a")
            .with_annotation("owner", "team-a")
            .with_unschedulable(true)
            .with_allocatable("cpu", Quantity(4000))
            .with_condition(NodeCondition::new(
                NodeConditionType::Ready,
                ConditionStatus::True,
            ));

        assert_eq!(node.labels.get("zone").map(String::as_str), Some("us-east-1a"));
        assert_eq!(node.annotations.len(), 1);
        assert!(node.unschedulable);
        assert_eq!(node.allocatable.get("cpu"), Some(&Quantity(4000)));
        assert_eq!(node.conditions.len(), 1);
    }
}
