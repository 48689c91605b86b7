//! Core domain types: pods, nodes, cluster events, errors, and metrics.

pub mod error;
pub mod event;
pub mod metrics;
pub mod node;
pub mod pod;

pub use error::{AppResult, QueueError};
pub use event::{
    extract_node_allocatable_change, extract_node_annotations_change,
    extract_node_conditions_change, extract_node_labels_change,
    extract_node_spec_unschedulable_change, extract_node_taints_change,
    node_scheduling_properties_change, ClusterEvent, ClusterEventKind, ClusterObject,
};
pub use metrics::{InMemoryMetricsSink, MetricsSink, NoopMetricsSink};
pub use node::{
    ConditionStatus, Node, NodeCondition, NodeConditionType, Quantity, ResourceList, Taint,
    TaintEffect,
};
pub use pod::{Pod, QueuedPodInfo, Uid};
