//! Handle trait for slot offsets.
//!
//! The [`SlotIndex`] trait abstracts over the integer type used to address
//! slots. It provides a sentinel value (`NONE`) and conversion to/from
//! `usize`, so links can be stored as plain integers instead of `Option`s.

/// Trait for handle types addressing slots in a [`SlotList`](crate::SlotList).
///
/// Provides a sentinel value (`NONE`) and conversion to/from `usize`.
/// Implemented for the unsigned integer types; the sentinel is the type's
/// `MAX`, which doubles as the capacity ceiling (the sentinel offset must
/// never be a valid slot).
///
/// # Example
///
/// ```
/// use slotlist::SlotIndex;
///
/// // u32 is a SlotIndex with NONE = u32::MAX
/// let idx: u32 = 42;
/// assert!(idx.is_some());
/// assert!(u32::NONE.is_none());
/// ```
///
/// # Custom Handle Types
///
/// ```
/// use slotlist::SlotIndex;
///
/// #[derive(Copy, Clone, PartialEq, Eq)]
/// struct OrderRef(u32);
///
/// impl SlotIndex for OrderRef {
///     const NONE: Self = OrderRef(u32::MAX);
///
///     fn from_usize(val: usize) -> Self {
///         OrderRef(val as u32)
///     }
///
///     fn as_usize(&self) -> usize {
///         self.0 as usize
///     }
/// }
/// ```
pub trait SlotIndex: Copy + Eq {
    /// Sentinel value representing "no slot" / "end of chain".
    ///
    /// Used internally to terminate the occupied and free chains.
    /// For integer types, this is the type's `MAX`.
    const NONE: Self;

    /// Creates a handle from a slot offset.
    fn from_usize(val: usize) -> Self;

    /// Returns the handle as a slot offset.
    ///
    /// Used for indexing into the backing buffer and bounds checking.
    fn as_usize(&self) -> usize;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Returns `true` if this is NOT the sentinel value.
    #[inline]
    fn is_some(&self) -> bool {
        !self.is_none()
    }
}

// =============================================================================
// Implementations for integer types
// =============================================================================

macro_rules! impl_slot_index {
    ($($int:ty),* $(,)?) => {$(
        impl SlotIndex for $int {
            const NONE: Self = <$int>::MAX;

            #[inline]
            fn from_usize(val: usize) -> Self {
                val as $int
            }

            #[inline]
            fn as_usize(&self) -> usize {
                *self as usize
            }
        }
    )*};
}

impl_slot_index!(u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u32_handle_basics() {
        let idx: u32 = 42;
        assert!(!idx.is_none());
        assert!(idx.is_some());
        assert_eq!(idx.as_usize(), 42);

        assert!(u32::NONE.is_none());
        assert!(!u32::NONE.is_some());
    }

    #[test]
    fn from_usize_roundtrip() {
        for i in [0usize, 1, 100, 1000, u16::MAX as usize] {
            let idx = u32::from_usize(i);
            assert_eq!(idx.as_usize(), i);
        }
    }

    #[test]
    fn sentinels_are_max() {
        assert_eq!(u8::NONE, u8::MAX);
        assert_eq!(u16::NONE, u16::MAX);
        assert_eq!(u32::NONE, u32::MAX);
        assert_eq!(u64::NONE, u64::MAX);
        assert_eq!(usize::NONE, usize::MAX);
    }
}
