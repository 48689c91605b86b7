//! Benchmarks for the active scheduling queue.
//!
//! Benchmarks cover:
//! - Keyed heap churn (add_or_update/pop)
//! - Targeted update of queued pods
//! - Full pop -> record events -> done cycles with in-flight tracking

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::sync::Arc;
use std::time::Instant;

use activeq::config::ActiveQueueConfig;
use activeq::core::{ClusterEventKind, NoopMetricsSink, Pod, QueuedPodInfo, Uid};
use activeq::queue::{ActiveQueue, Heap};

fn build_pod_info(id: u64, priority: i32) -> QueuedPodInfo {
    let pod = Arc::new(Pod::new(format!("uid-{id}"), format!("pod-{id}")).with_priority(priority));
    QueuedPodInfo::new(pod, Instant::now())
}

fn pod_heap() -> Heap<QueuedPodInfo> {
    Heap::new(
        |p_info: &QueuedPodInfo| p_info.pod.uid.clone(),
        |a: &QueuedPodInfo, b: &QueuedPodInfo| {
            if a.pod.priority != b.pod.priority {
                a.pod.priority > b.pod.priority
            } else {
                a.timestamp < b.timestamp
            }
        },
    )
}

fn bench_heap_add_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_add_pop");

    for size in [100u64, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut heap = pod_heap();
                for i in 0..size {
                    heap.add_or_update(build_pod_info(i, (i % 16) as i32));
                }
                while let Ok(p_info) = heap.pop() {
                    black_box(p_info);
                }
            });
        });
    }
    group.finish();
}

fn bench_heap_keyed_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_keyed_update");

    for size in [100u64, 1_000, 5_000] {
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut heap = pod_heap();
                for i in 0..size {
                    heap.add_or_update(build_pod_info(i, 0));
                }
                // Re-prioritize every entry in place.
                for i in 0..size {
                    heap.add_or_update(build_pod_info(i, (size - i) as i32));
                }
                black_box(heap.len());
            });
        });
    }
    group.finish();
}

fn bench_pop_record_done_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("pop_record_done_cycle");

    for size in [100u64, 1_000] {
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let config = ActiveQueueConfig::new().with_hints_enabled(true);
                let aq = ActiveQueue::with_default_ordering(&config, Arc::new(NoopMetricsSink));

                aq.under_lock(|unlocked| {
                    for i in 0..size {
                        unlocked.add_or_update(build_pod_info(i, (i % 4) as i32));
                    }
                });
                aq.broadcast();

                for _ in 0..size {
                    let p_info = aq.pop().unwrap().expect("queue is open");
                    aq.add_event_if_any_in_flight(None, None, ClusterEventKind::NodeAdd);
                    black_box(aq.cluster_events_for_pod(&p_info).unwrap().len());
                    aq.done(&p_info.pod.uid);
                }
            });
        });
    }
    group.finish();
}

fn bench_lookup_by_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_by_key");

    group.bench_function("get_by_key_10k", |b| {
        let mut heap = pod_heap();
        for i in 0..10_000u64 {
            heap.add_or_update(build_pod_info(i, (i % 16) as i32));
        }
        b.iter(|| {
            for i in (0..10_000u64).step_by(97) {
                black_box(heap.get_by_key(&Uid::from(format!("uid-{i}"))));
            }
        });
    });
    group.finish();
}

criterion_group!(
    heap_benches,
    bench_heap_add_pop,
    bench_heap_keyed_update,
    bench_lookup_by_key
);

criterion_group!(queue_benches, bench_pop_record_done_cycle);

criterion_main!(heap_benches, queue_benches);
