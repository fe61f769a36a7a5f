//! Benchmarks comparing SlotList against std sequence types.
//!
//! Run with: cargo bench
//!
//! All containers are pre-allocated where the type allows, so the numbers
//! compare steady-state structural edits rather than allocator behavior.

use std::collections::{LinkedList, VecDeque};

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use slotlist::SlotList;

const CAPACITY: usize = 100_000;

// ============================================================================
// Queue churn: push_back + pop_front
// ============================================================================

fn bench_queue_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_churn");
    group.throughput(Throughput::Elements(CAPACITY as u64));

    let mut list: SlotList<u64> = SlotList::with_capacity(CAPACITY).unwrap();
    let mut deque: VecDeque<u64> = VecDeque::with_capacity(CAPACITY);
    let mut linked: LinkedList<u64> = LinkedList::new();

    group.bench_function("slotlist", |b| {
        b.iter(|| {
            for i in 0..CAPACITY as u64 {
                black_box(list.push_back(i).unwrap());
            }
            while let Ok(v) = list.pop_front() {
                black_box(v);
            }
        });
    });

    group.bench_function("vecdeque", |b| {
        b.iter(|| {
            for i in 0..CAPACITY as u64 {
                deque.push_back(i);
            }
            while let Some(v) = deque.pop_front() {
                black_box(v);
            }
        });
    });

    group.bench_function("linkedlist", |b| {
        b.iter(|| {
            for i in 0..CAPACITY as u64 {
                linked.push_back(i);
            }
            while let Some(v) = linked.pop_front() {
                black_box(v);
            }
        });
    });

    group.finish();
}

// ============================================================================
// Mid-list splice: insert_after + remove_at by handle
// ============================================================================

fn bench_mid_splice(c: &mut Criterion) {
    const SPLICES: usize = 10_000;

    let mut group = c.benchmark_group("mid_splice");
    group.throughput(Throughput::Elements(SPLICES as u64));

    // Fill half the buffer so splices land in a populated chain
    let mut list: SlotList<u64> = SlotList::with_capacity(CAPACITY).unwrap();
    let anchors: Vec<_> = (0..CAPACITY as u64 / 2)
        .map(|i| list.push_back(i).unwrap())
        .collect();

    group.bench_function("slotlist", |b| {
        b.iter(|| {
            for i in 0..SPLICES {
                let anchor = anchors[i * 7 % anchors.len()];
                let h = list.insert_after(anchor, i as u64).unwrap();
                black_box(list.remove_at(h).unwrap());
            }
        });
    });

    group.finish();
}

// ============================================================================
// Iteration over a churned list (non-sequential slot order)
// ============================================================================

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");
    group.throughput(Throughput::Elements(CAPACITY as u64));

    // Churn the free chain first so list order diverges from offset order
    let mut list: SlotList<u64> = SlotList::with_capacity(CAPACITY).unwrap();
    let handles: Vec<_> = (0..CAPACITY as u64)
        .map(|i| list.push_back(i).unwrap())
        .collect();
    for h in handles.iter().step_by(2) {
        list.remove_at(*h).unwrap();
    }
    for i in 0..CAPACITY as u64 / 2 {
        list.push_back(i).unwrap();
    }

    let deque: VecDeque<u64> = (0..CAPACITY as u64).collect();

    group.bench_function("slotlist", |b| {
        b.iter(|| {
            let sum: u64 = list.iter().sum();
            black_box(sum)
        });
    });

    group.bench_function("vecdeque", |b| {
        b.iter(|| {
            let sum: u64 = deque.iter().sum();
            black_box(sum)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_queue_churn, bench_mid_splice, bench_iterate);
criterion_main!(benches);
