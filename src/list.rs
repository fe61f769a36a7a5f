//! Fixed-capacity doubly-linked list threaded through a slot buffer.
//!
//! All slots live in one contiguous buffer owned by the list. Two disjoint
//! chains are threaded through that buffer as integer offsets: the occupied
//! chain (doubly linked, in list order) and the free chain (singly linked,
//! LIFO). Every structural edit is a constant-time link rewrite; nothing is
//! shifted and nothing is allocated outside of [`SlotList::expand_to`].
//!
//! # Example
//!
//! ```
//! use slotlist::SlotList;
//!
//! let mut list: SlotList<u64> = SlotList::with_capacity(16).unwrap();
//!
//! // Insert returns a stable handle for O(1) access/removal later
//! let a = list.push_back(1).unwrap();
//! let b = list.push_back(2).unwrap();
//! let c = list.push_back(3).unwrap();
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.get(b), Some(&2));
//!
//! // Remove from the middle - O(1), other handles stay valid
//! assert_eq!(list.remove_at(b), Ok(2));
//! assert_eq!(list.get(a), Some(&1));
//! assert_eq!(list.get(c), Some(&3));
//!
//! let values: Vec<_> = list.iter().copied().collect();
//! assert_eq!(values, vec![1, 3]);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use crate::{Error, Full, InsertError, Slot, SlotIndex};

/// A fixed-capacity list with O(1) splice at any known position.
///
/// Elements are stored in a contiguous buffer of slots; list order is a
/// doubly-linked threading of slot offsets, and vacant slots form a
/// singly-linked free chain. Insertion and removal rewire a handful of
/// links - no element ever moves, so handles returned by insertion remain
/// valid until their slot is removed.
///
/// Capacity is a one-way watermark: it is set at construction, raised only
/// by the explicit, O(N) [`expand_to`](SlotList::expand_to), and never
/// lowered. There is deliberately no sort - reordering by value cannot be
/// done in O(1) and is outside this container's contract.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `I`: Handle type (default `u32`, see [`SlotIndex`])
///
/// # Handle Discipline
///
/// A handle is a bare slot offset. It is `Copy` and freely shareable, but
/// carries no generation tag: once its element is removed, the handle is
/// invalid, and a later insertion may recycle the same offset. Holding a
/// handle across the removal of its element is a caller bug.
///
/// # Use Case: Order Queue
///
/// ```
/// use slotlist::SlotList;
///
/// #[derive(Debug, PartialEq)]
/// struct Order {
///     id: u64,
///     qty: u64,
/// }
///
/// // Pre-allocate at startup; no allocation while trading
/// let mut queue: SlotList<Order> = SlotList::with_capacity(100_000).unwrap();
///
/// let first = queue.push_back(Order { id: 1, qty: 50 }).unwrap();
/// let second = queue.push_back(Order { id: 2, qty: 75 }).unwrap();
///
/// // Cancel from the middle of the queue - O(1)
/// let cancelled = queue.remove_at(first).unwrap();
/// assert_eq!(cancelled.id, 1);
///
/// // Remaining orders keep their handles and their queue position
/// assert_eq!(queue.front_index(), Some(second));
/// ```
pub struct SlotList<T, I: SlotIndex = u32> {
    /// Backing buffer; its length IS the capacity.
    slots: Vec<Slot<T, I>>,
    /// First occupied slot, or `NONE` if empty.
    head: I,
    /// Last occupied slot, or `NONE` if empty.
    tail: I,
    /// First free slot, or `NONE` if full.
    free_head: I,
    /// Number of occupied slots.
    len: usize,
}

impl<T, I: SlotIndex> SlotList<T, I> {
    /// Creates a list with exactly `capacity` slots, all free.
    ///
    /// The free chain is linked in offset order, so the first insertions
    /// fill the buffer front to back.
    ///
    /// # Errors
    ///
    /// - [`Error::ZeroCapacity`] if `capacity` is zero.
    /// - [`Error::CapacityOverflow`] if `capacity` cannot be addressed by
    ///   the handle type (the sentinel offset must stay invalid).
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }

        let max = I::NONE.as_usize();
        if capacity > max {
            return Err(Error::CapacityOverflow {
                requested: capacity,
                max,
            });
        }

        let mut slots = Vec::with_capacity(capacity);
        for i in 1..capacity {
            slots.push(Slot::Vacant {
                next_free: I::from_usize(i),
            });
        }
        slots.push(Slot::Vacant { next_free: I::NONE });

        Ok(Self {
            slots,
            head: I::NONE,
            tail: I::NONE,
            free_head: I::from_usize(0),
            len: 0,
        })
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if every slot is occupied.
    ///
    /// The next insertion will fail until an element is removed or
    /// [`expand_to`](SlotList::expand_to) is called.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.free_head.is_none()
    }

    /// Returns the total number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if `pos` references a currently occupied slot.
    #[inline]
    pub fn contains(&self, pos: I) -> bool {
        matches!(self.slots.get(pos.as_usize()), Some(slot) if slot.is_occupied())
    }

    /// Returns a reference to the element at `pos`.
    ///
    /// Returns `None` if the handle is out of range or its slot is vacant.
    #[inline]
    pub fn get(&self, pos: I) -> Option<&T> {
        match self.slots.get(pos.as_usize()) {
            Some(Slot::Occupied { value, .. }) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the element at `pos`.
    ///
    /// This is the in-place update path: rewriting an element through it
    /// touches no links and invalidates no handles.
    #[inline]
    pub fn get_mut(&mut self, pos: I) -> Option<&mut T> {
        match self.slots.get_mut(pos.as_usize()) {
            Some(Slot::Occupied { value, .. }) => Some(value),
            _ => None,
        }
    }

    /// Returns a reference to the first element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(self.head)
    }

    /// Returns a mutable reference to the first element.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let head = self.head;
        self.get_mut(head)
    }

    /// Returns a reference to the last element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.get(self.tail)
    }

    /// Returns a mutable reference to the last element.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let tail = self.tail;
        self.get_mut(tail)
    }

    /// Returns the handle of the first element, or `None` if empty.
    #[inline]
    pub fn front_index(&self) -> Option<I> {
        if self.head.is_none() { None } else { Some(self.head) }
    }

    /// Returns the handle of the last element, or `None` if empty.
    #[inline]
    pub fn back_index(&self) -> Option<I> {
        if self.tail.is_none() { None } else { Some(self.tail) }
    }

    /// Returns the handle of the element after `pos`.
    ///
    /// Returns `None` if `pos` is the tail, out of range, or vacant.
    #[inline]
    pub fn next_index(&self, pos: I) -> Option<I> {
        let (_, next) = self.links(pos)?;
        if next.is_none() { None } else { Some(next) }
    }

    /// Returns the handle of the element before `pos`.
    ///
    /// Returns `None` if `pos` is the head, out of range, or vacant.
    #[inline]
    pub fn prev_index(&self, pos: I) -> Option<I> {
        let (prev, _) = self.links(pos)?;
        if prev.is_none() { None } else { Some(prev) }
    }

    // ========================================================================
    // Push / insert
    // ========================================================================

    /// Appends `value` at the back of the list.
    ///
    /// Returns the handle of the new element.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if no free slot is available. The list is
    /// left untouched; the caller may [`expand_to`](SlotList::expand_to)
    /// and retry with the recovered value.
    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<I, Full<T>> {
        let Some(index) = self.take_free_slot() else {
            return Err(Full(value));
        };

        self.slots[index.as_usize()] = Slot::Occupied {
            value,
            prev: self.tail,
            next: I::NONE,
        };

        if self.tail.is_some() {
            self.set_next(self.tail, index);
        } else {
            self.head = index;
        }

        self.tail = index;
        self.len += 1;
        Ok(index)
    }

    /// Prepends `value` at the front of the list.
    ///
    /// Returns the handle of the new element.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if no free slot is available.
    #[inline]
    pub fn push_front(&mut self, value: T) -> Result<I, Full<T>> {
        let Some(index) = self.take_free_slot() else {
            return Err(Full(value));
        };

        self.slots[index.as_usize()] = Slot::Occupied {
            value,
            prev: I::NONE,
            next: self.head,
        };

        if self.head.is_some() {
            self.set_prev(self.head, index);
        } else {
            self.tail = index;
        }

        self.head = index;
        self.len += 1;
        Ok(index)
    }

    /// Inserts `value` immediately after the element at `pos`.
    ///
    /// Returns the handle of the new element. Exactly four link fields are
    /// rewritten (plus `tail` when `pos` is the last element).
    ///
    /// # Errors
    ///
    /// - [`InsertError::InvalidHandle`] if `pos` does not reference an
    ///   occupied slot (checked before a free slot is taken).
    /// - [`InsertError::Full`] if no free slot is available.
    #[inline]
    pub fn insert_after(&mut self, pos: I, value: T) -> Result<I, InsertError<T>> {
        let Some((_, next)) = self.links(pos) else {
            return Err(InsertError::InvalidHandle(value));
        };
        let Some(index) = self.take_free_slot() else {
            return Err(InsertError::Full(value));
        };

        self.slots[index.as_usize()] = Slot::Occupied {
            value,
            prev: pos,
            next,
        };
        self.set_next(pos, index);

        if next.is_some() {
            self.set_prev(next, index);
        } else {
            self.tail = index;
        }

        self.len += 1;
        Ok(index)
    }

    /// Inserts `value` immediately before the element at `pos`.
    ///
    /// Returns the handle of the new element.
    ///
    /// # Errors
    ///
    /// - [`InsertError::InvalidHandle`] if `pos` does not reference an
    ///   occupied slot (checked before a free slot is taken).
    /// - [`InsertError::Full`] if no free slot is available.
    #[inline]
    pub fn insert_before(&mut self, pos: I, value: T) -> Result<I, InsertError<T>> {
        let Some((prev, _)) = self.links(pos) else {
            return Err(InsertError::InvalidHandle(value));
        };
        let Some(index) = self.take_free_slot() else {
            return Err(InsertError::Full(value));
        };

        self.slots[index.as_usize()] = Slot::Occupied {
            value,
            prev,
            next: pos,
        };
        self.set_prev(pos, index);

        if prev.is_some() {
            self.set_next(prev, index);
        } else {
            self.head = index;
        }

        self.len += 1;
        Ok(index)
    }

    // ========================================================================
    // Remove / pop
    // ========================================================================

    /// Removes and returns the element at `pos`.
    ///
    /// The slot is pushed on the front of the free chain; `pos` is invalid
    /// from this point on and the offset may be recycled by a later
    /// insertion. All other handles remain valid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHandle`] if `pos` does not reference an
    /// occupied slot. The list is left untouched.
    #[inline]
    pub fn remove_at(&mut self, pos: I) -> Result<T, Error> {
        let Some((prev, next)) = self.links(pos) else {
            return Err(Error::InvalidHandle);
        };

        if prev.is_some() {
            self.set_next(prev, next);
        } else {
            self.head = next;
        }

        if next.is_some() {
            self.set_prev(next, prev);
        } else {
            self.tail = prev;
        }

        let slot = mem::replace(
            &mut self.slots[pos.as_usize()],
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = pos;
        self.len -= 1;

        match slot {
            Slot::Occupied { value, .. } => Ok(value),
            // links() only succeeds on occupied slots.
            Slot::Vacant { .. } => unreachable!("removed slot was vacant"),
        }
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    #[inline]
    pub fn pop_front(&mut self) -> Result<T, Error> {
        if self.head.is_none() {
            return Err(Error::Empty);
        }
        self.remove_at(self.head)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    #[inline]
    pub fn pop_back(&mut self) -> Result<T, Error> {
        if self.tail.is_none() {
            return Err(Error::Empty);
        }
        self.remove_at(self.tail)
    }

    // ========================================================================
    // Growth
    // ========================================================================

    /// Grows the buffer to `new_capacity` slots.
    ///
    /// This is the only allocating operation; call it from a quiescent
    /// path, never from the hot path. Existing slots keep their offsets and
    /// link values, so every outstanding handle remains valid and traversal
    /// order is unchanged. The new slots are chained in offset order and
    /// spliced onto the FRONT of the free chain, so insertions after growth
    /// fill the new region first.
    ///
    /// # Errors
    ///
    /// - [`Error::NotLarger`] if `new_capacity` is at or below the current
    ///   capacity. Shrinking is not supported, by design.
    /// - [`Error::CapacityOverflow`] if `new_capacity` cannot be addressed
    ///   by the handle type.
    pub fn expand_to(&mut self, new_capacity: usize) -> Result<(), Error> {
        let capacity = self.slots.len();
        if new_capacity <= capacity {
            return Err(Error::NotLarger {
                requested: new_capacity,
                current: capacity,
            });
        }

        let max = I::NONE.as_usize();
        if new_capacity > max {
            return Err(Error::CapacityOverflow {
                requested: new_capacity,
                max,
            });
        }

        self.slots.reserve_exact(new_capacity - capacity);
        for i in capacity..new_capacity - 1 {
            self.slots.push(Slot::Vacant {
                next_free: I::from_usize(i + 1),
            });
        }
        self.slots.push(Slot::Vacant {
            next_free: self.free_head,
        });
        self.free_head = I::from_usize(capacity);

        Ok(())
    }

    // ========================================================================
    // Bulk operations
    // ========================================================================

    /// Removes every element, dropping the stored values.
    ///
    /// Capacity is unchanged; the free chain is relinked in offset order as
    /// at construction. O(capacity).
    pub fn clear(&mut self) {
        let capacity = self.slots.len();
        for i in 0..capacity {
            let next_free = if i + 1 < capacity {
                I::from_usize(i + 1)
            } else {
                I::NONE
            };
            self.slots[i] = Slot::Vacant { next_free };
        }

        self.head = I::NONE;
        self.tail = I::NONE;
        self.free_head = I::from_usize(0);
        self.len = 0;
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over the elements in list order.
    ///
    /// Each call starts a fresh walk from the head. The iterator borrows
    /// the list, so structural mutation mid-traversal is rejected at
    /// compile time.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, I> {
        Iter {
            slots: &self.slots,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Returns an iterator over `(handle, element)` pairs in list order.
    ///
    /// Useful when the handles themselves are needed, e.g. to collect
    /// removal candidates before mutating.
    #[inline]
    pub fn indices(&self) -> Indices<'_, T, I> {
        Indices {
            slots: &self.slots,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    // ========================================================================
    // Internal link plumbing
    // ========================================================================

    /// Returns `(prev, next)` of the occupied slot at `index`, or `None`
    /// if the handle is out of range or the slot is vacant.
    #[inline]
    fn links(&self, index: I) -> Option<(I, I)> {
        match self.slots.get(index.as_usize()) {
            Some(Slot::Occupied { prev, next, .. }) => Some((*prev, *next)),
            _ => None,
        }
    }

    /// Pops the first slot off the free chain, or `None` if full.
    ///
    /// The slot is left vacant; the caller overwrites it with the occupied
    /// payload, so no failure path may run between the two.
    #[inline]
    fn take_free_slot(&mut self) -> Option<I> {
        if self.free_head.is_none() {
            return None;
        }

        let index = self.free_head;
        self.free_head = match &self.slots[index.as_usize()] {
            Slot::Vacant { next_free } => *next_free,
            // Free-chain invariant: every chained slot is vacant.
            Slot::Occupied { .. } => unreachable!("free chain points at an occupied slot"),
        };
        Some(index)
    }

    #[inline]
    fn set_next(&mut self, index: I, to: I) {
        match &mut self.slots[index.as_usize()] {
            Slot::Occupied { next, .. } => *next = to,
            // Occupied-chain invariant: links only reference occupied slots.
            Slot::Vacant { .. } => unreachable!("occupied chain points at a vacant slot"),
        }
    }

    #[inline]
    fn set_prev(&mut self, index: I, to: I) {
        match &mut self.slots[index.as_usize()] {
            Slot::Occupied { prev, .. } => *prev = to,
            Slot::Vacant { .. } => unreachable!("occupied chain points at a vacant slot"),
        }
    }
}

impl<T: fmt::Debug, I: SlotIndex> fmt::Debug for SlotList<T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, I: SlotIndex> IntoIterator for &'a SlotList<T, I> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over list elements in list order. See [`SlotList::iter`].
pub struct Iter<'a, T, I: SlotIndex> {
    slots: &'a [Slot<T, I>],
    front: I,
    back: I,
    remaining: usize,
}

impl<'a, T, I: SlotIndex> Iterator for Iter<'a, T, I> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        match &self.slots[self.front.as_usize()] {
            Slot::Occupied { value, next, .. } => {
                self.front = *next;
                Some(value)
            }
            Slot::Vacant { .. } => unreachable!("occupied chain points at a vacant slot"),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, I: SlotIndex> DoubleEndedIterator for Iter<'_, T, I> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        match &self.slots[self.back.as_usize()] {
            Slot::Occupied { value, prev, .. } => {
                self.back = *prev;
                Some(value)
            }
            Slot::Vacant { .. } => unreachable!("occupied chain points at a vacant slot"),
        }
    }
}

impl<T, I: SlotIndex> ExactSizeIterator for Iter<'_, T, I> {}
impl<T, I: SlotIndex> FusedIterator for Iter<'_, T, I> {}

/// Iterator over `(handle, element)` pairs. See [`SlotList::indices`].
pub struct Indices<'a, T, I: SlotIndex> {
    slots: &'a [Slot<T, I>],
    front: I,
    back: I,
    remaining: usize,
}

impl<'a, T, I: SlotIndex> Iterator for Indices<'a, T, I> {
    type Item = (I, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let index = self.front;
        match &self.slots[index.as_usize()] {
            Slot::Occupied { value, next, .. } => {
                self.front = *next;
                Some((index, value))
            }
            Slot::Vacant { .. } => unreachable!("occupied chain points at a vacant slot"),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, I: SlotIndex> DoubleEndedIterator for Indices<'_, T, I> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let index = self.back;
        match &self.slots[index.as_usize()] {
            Slot::Occupied { value, prev, .. } => {
                self.back = *prev;
                Some((index, value))
            }
            Slot::Vacant { .. } => unreachable!("occupied chain points at a vacant slot"),
        }
    }
}

impl<T, I: SlotIndex> ExactSizeIterator for Indices<'_, T, I> {}
impl<T, I: SlotIndex> FusedIterator for Indices<'_, T, I> {}
