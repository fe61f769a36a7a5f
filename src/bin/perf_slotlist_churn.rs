//! Profiling binary for splice churn (insert/remove cycles).
//!
//! Run with:
//!   cargo build --release --bin perf_slotlist_churn
//!   perf stat -e cycles,instructions,cache-misses,cache-references \
//!       ./target/release/perf_slotlist_churn

use std::hint::black_box;

use slotlist::SlotList;

const CYCLES: usize = 10_000_000;
const CAPACITY: usize = 1024;

fn main() {
    let mut list: SlotList<u64> = SlotList::with_capacity(CAPACITY).unwrap();

    // Keep the chain half full so splices rewire real neighbors
    let anchors: Vec<_> = (0..CAPACITY as u64 / 2)
        .map(|i| list.push_back(i).unwrap())
        .collect();

    // Timed section - insert after a rotating anchor, then remove (hot cache)
    for i in 0..CYCLES {
        let anchor = anchors[i % anchors.len()];
        let h = list.insert_after(anchor, i as u64).unwrap();
        black_box(list.remove_at(h).unwrap());
    }
}
