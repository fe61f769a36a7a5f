//! Slot representation: one fixed-offset storage cell.
//!
//! A slot is either vacant (part of the free chain) or occupied (threaded
//! into the list's doubly-linked traversal order). A vacant slot needs only
//! one link, so the discriminant lets the same cell carry either the free
//! link or the prev/next pair without extra bookkeeping.

use crate::SlotIndex;

/// A storage cell at a stable offset in the backing buffer.
///
/// Offsets never move; a cell cycles between `Vacant` and `Occupied` in
/// place as elements are removed and inserted.
#[derive(Debug)]
pub(crate) enum Slot<T, I: SlotIndex> {
    /// Not holding an element. `next_free` is the next slot in the free
    /// chain, or `NONE` at the end of the chain.
    Vacant { next_free: I },
    /// Holding an element, with its predecessor and successor in the
    /// occupied chain (`NONE` at either end of the list).
    Occupied { value: T, prev: I, next: I },
}

impl<T, I: SlotIndex> Slot<T, I> {
    /// Returns `true` if the slot holds an element.
    #[inline]
    pub(crate) fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupancy_check() {
        let vacant: Slot<u64, u32> = Slot::Vacant { next_free: u32::NONE };
        let occupied: Slot<u64, u32> = Slot::Occupied {
            value: 7,
            prev: u32::NONE,
            next: u32::NONE,
        };

        assert!(!vacant.is_occupied());
        assert!(occupied.is_occupied());
    }

    #[test]
    fn slot_size_check() {
        // For a u64 payload with u32 links: value + 2 links + discriminant,
        // padded to 8-byte alignment.
        assert!(std::mem::size_of::<Slot<u64, u32>>() <= 24);

        // A zero-sized payload still carries two links plus the discriminant.
        assert!(std::mem::size_of::<Slot<(), u32>>() <= 16);
    }
}
