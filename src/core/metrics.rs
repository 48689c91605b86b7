//! Metrics sink implementations.
//!
//! The queue reports one signal: the per-plugin unschedulable-reason gauge,
//! decremented when a pod leaves the queue for a new attempt. Sinks must be
//! callable from any thread and must never block or fail the queue.

use std::collections::HashMap;

use parking_lot::RwLock;

/// Sink for the unschedulable-reason gauge, labeled by plugin and scheduler.
pub trait MetricsSink: Send + Sync {
    /// Increment the gauge for `(plugin, scheduler)`.
    fn inc_unschedulable_reason(&self, plugin: &str, scheduler: &str);
    /// Decrement the gauge for `(plugin, scheduler)`.
    fn dec_unschedulable_reason(&self, plugin: &str, scheduler: &str);
}

/// Sink that drops every observation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMetricsSink;

impl MetricsSink for NoopMetricsSink {
    fn inc_unschedulable_reason(&self, _plugin: &str, _scheduler: &str) {}
    fn dec_unschedulable_reason(&self, _plugin: &str, _scheduler: &str) {}
}

/// In-memory sink for testing and dev.
#[derive(Debug, Default)]
pub struct InMemoryMetricsSink {
    gauges: RwLock<HashMap<(String, String), i64>>,
}

impl InMemoryMetricsSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current gauge value for `(plugin, scheduler)`; zero if never touched.
    #[must_use]
    pub fn unschedulable_reason(&self, plugin: &str, scheduler: &str) -> i64 {
        self.gauges
            .read()
            .get(&(plugin.to_string(), scheduler.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Snapshot of all gauges with non-zero history.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<(String, String), i64> {
        self.gauges.read().clone()
    }
}

impl MetricsSink for InMemoryMetricsSink {
    fn inc_unschedulable_reason(&self, plugin: &str, scheduler: &str) {
        let mut gauges = self.gauges.write();
        *gauges
            .entry((plugin.to_string(), scheduler.to_string()))
            .or_insert(0) += 1;
    }

    fn dec_unschedulable_reason(&self, plugin: &str, scheduler: &str) {
        let mut gauges = self.gauges.write();
        *gauges
            .entry((plugin.to_string(), scheduler.to_string()))
            .or_insert(0) -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_gauge_roundtrip() {
        let sink = InMemoryMetricsSink::new();
        sink.inc_unschedulable_reason("NodeResourcesFit", "default-scheduler");
        sink.inc_unschedulable_reason("NodeResourcesFit", "default-scheduler");
        sink.dec_unschedulable_reason("NodeResourcesFit", "default-scheduler");

        assert_eq!(sink.unschedulable_reason("NodeResourcesFit", "default-scheduler"), 1);
        assert_eq!(sink.unschedulable_reason("TaintToleration", "default-scheduler"), 0);
    }

    #[test]
    fn test_labels_are_independent() {
        let sink = InMemoryMetricsSink::new();
        sink.dec_unschedulable_reason("PluginA", "sched-1");
        sink.inc_unschedulable_reason("PluginA", "sched-2");

        assert_eq!(sink.unschedulable_reason("PluginA", "sched-1"), -1);
        assert_eq!(sink.unschedulable_reason("PluginA", "sched-2"), 1);
        assert_eq!(sink.snapshot().len(), 2);
    }
}
