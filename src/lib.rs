//! Fixed-capacity indexed list with O(1) splice and stable handles.
//!
//! This crate provides one container, [`SlotList`]: a contiguously-stored
//! sequence built for latency-critical systems like trading infrastructure
//! and fixed-tick simulation loops. The key insight: thread the list order
//! through slot offsets instead of pointers, and recycle slots through a
//! free chain instead of the allocator.
//!
//! # Design Philosophy
//!
//! Traditional sequence types pay for structural edits:
//!
//! ```text
//! Vec<Order>        - O(n) insert/remove in the middle, elements shift
//! VecDeque<Order>   - O(1) ends only, no stable positions
//! LinkedList<Order> - per-node allocation, pointer chasing
//! ```
//!
//! [`SlotList`] keeps everything in one pre-allocated buffer:
//!
//! ```text
//! occupied chain - doubly linked through slot offsets, in list order
//! free chain     - singly linked LIFO of vacant slots, ready for reuse
//! ```
//!
//! Benefits:
//! - **Zero allocation on the hot path**: capacity is reserved at startup;
//!   growth is explicit and opt-in ([`SlotList::expand_to`])
//! - **Stable handles**: insertion returns a [`SlotIndex`] handle that stays
//!   valid until that element is removed, however much the rest churns
//! - **O(1) structural edits**: push/pop at both ends, insert before/after
//!   any handle, remove at any handle - each a constant-time link rewrite
//! - **No element shifting**: values never move once written; removal drops
//!   the value in place and recycles the slot
//!
//! # Quick Start
//!
//! ```
//! use slotlist::SlotList;
//!
//! let mut queue: SlotList<u64> = SlotList::with_capacity(1000).unwrap();
//!
//! let first = queue.push_back(10).unwrap();
//! let second = queue.push_back(30).unwrap();
//!
//! // Splice into the middle at a known position - O(1)
//! queue.insert_after(first, 20).unwrap();
//!
//! // Remove at a known position - O(1)
//! queue.remove_at(second).unwrap();
//!
//! let values: Vec<_> = queue.iter().copied().collect();
//! assert_eq!(values, vec![10, 20]);
//! ```
//!
//! # Capacity Model
//!
//! Capacity is a one-way watermark. Insertions never allocate: when the
//! free chain is empty they fail with [`Full`], handing the value back.
//! The caller decides when to pay the O(N) cost of [`SlotList::expand_to`]
//! (typically during a quiescent period), after which every outstanding
//! handle is still valid. There is no shrink and no sort - both would
//! break the container's performance contract, so neither is in the API.
//!
//! ```
//! use slotlist::SlotList;
//!
//! let mut list: SlotList<u64> = SlotList::with_capacity(2).unwrap();
//! list.push_back(1).unwrap();
//! list.push_back(2).unwrap();
//!
//! let rejected = list.push_back(3).unwrap_err();
//! list.expand_to(4).unwrap();
//! list.push_back(rejected.into_inner()).unwrap();
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```
//!
//! # Handle Types
//!
//! Handles are plain integers implementing [`SlotIndex`] (default `u32`).
//! Smaller handle types halve the link overhead per slot at the cost of a
//! lower capacity ceiling:
//!
//! | Handle | Max capacity | Link overhead per slot |
//! |--------|--------------|------------------------|
//! | `u16`  | 65,535       | 4 bytes                |
//! | `u32`  | ~4.2 billion | 8 bytes                |
//! | `u64`  | practically unbounded | 16 bytes      |
//!
//! # Single-Owner Model
//!
//! The container assumes one logical owner performing one mutation at a
//! time; there is no internal locking. Iterators borrow the list, so
//! structural mutation mid-traversal is a compile error rather than a
//! runtime hazard. Handles carry no generation tag: using a handle after
//! its element was removed is a caller bug, reported as
//! [`Error::InvalidHandle`] when the slot is vacant but silently aliasing
//! a recycled element when it is not.

#![warn(missing_docs)]

mod error;
mod index;
mod list;
mod slot;

pub use error::{Error, Full, InsertError};
pub use index::SlotIndex;
pub use list::{Indices, Iter, SlotList};

pub(crate) use slot::Slot;
