//! IAI-Callgrind benchmark for CascadeQueue.
//!
//! Measures instruction counts for push-all-then-pop-all over pseudo-random
//! input, for several run capacities, against `BinaryHeap` as a baseline.

use cascade_heap::cascade::CascadeQueue;
use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::hint::black_box;

/// Deterministic pseudo-random input (multiplicative hashing of the index).
fn setup_values_10000() -> Vec<u32> {
    (0u32..10_000)
        .map(|index| index.wrapping_mul(2_654_435_761) % 1_000_000_000)
        .collect()
}

fn push_pop(values: Vec<u32>, run_capacity: usize) -> u64 {
    let mut queue = CascadeQueue::with_run_capacity(run_capacity);
    for value in values {
        queue.push(black_box(value)).unwrap();
    }
    let mut checksum = 0u64;
    while let Ok(value) = queue.pop() {
        checksum = checksum.wrapping_add(u64::from(value));
    }
    checksum
}

#[library_benchmark]
#[bench::with_setup(setup_values_10000())]
fn cascade_k16_10000(values: Vec<u32>) -> u64 {
    black_box(push_pop(black_box(values), 16))
}

#[library_benchmark]
#[bench::with_setup(setup_values_10000())]
fn cascade_k64_10000(values: Vec<u32>) -> u64 {
    black_box(push_pop(black_box(values), 64))
}

#[library_benchmark]
#[bench::with_setup(setup_values_10000())]
fn binary_heap_10000(values: Vec<u32>) -> u64 {
    let mut heap = BinaryHeap::new();
    for value in black_box(values) {
        heap.push(Reverse(value));
    }
    let mut checksum = 0u64;
    while let Some(Reverse(value)) = heap.pop() {
        checksum = checksum.wrapping_add(u64::from(value));
    }
    black_box(checksum)
}

library_benchmark_group!(
    name = cascade_queue_group;
    benchmarks = cascade_k16_10000, cascade_k64_10000, binary_heap_10000
);

main!(library_benchmark_groups = cascade_queue_group);
