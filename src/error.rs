//! Error types.
//!
//! Insertions hand the rejected value back to the caller (the usual
//! recovery is `expand_to` followed by a retry), so the insert-family
//! errors are generic over the element type. Everything else is reported
//! through the plain [`Error`] enum.

/// Error returned when an insertion finds no free slot.
///
/// Contains the value that could not be inserted, allowing recovery.
///
/// # Example
///
/// ```
/// use slotlist::SlotList;
///
/// let mut list: SlotList<u64> = SlotList::with_capacity(1).unwrap();
/// list.push_back(1).unwrap();
///
/// let rejected = list.push_back(2).unwrap_err();
/// assert_eq!(rejected.into_inner(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Full<T>(
    /// The value that could not be inserted.
    pub T,
);

impl<T> Full<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> core::fmt::Display for Full<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "list is full")
    }
}

impl<T: core::fmt::Debug> std::error::Error for Full<T> {}

/// Error returned by positional insertion (`insert_before` / `insert_after`).
///
/// The anchor handle is validated before a free slot is taken, so a failed
/// insertion never disturbs the chains. The rejected value rides along in
/// either variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertError<T> {
    /// No free slot available.
    Full(T),
    /// The anchor handle is out of range or references a vacant slot.
    InvalidHandle(T),
}

impl<T> InsertError<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        match self {
            InsertError::Full(value) | InsertError::InvalidHandle(value) => value,
        }
    }
}

impl<T> From<Full<T>> for InsertError<T> {
    fn from(err: Full<T>) -> Self {
        InsertError::Full(err.0)
    }
}

impl<T> core::fmt::Display for InsertError<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InsertError::Full(_) => write!(f, "list is full"),
            InsertError::InvalidHandle(_) => {
                write!(f, "handle does not reference an occupied slot")
            }
        }
    }
}

impl<T: core::fmt::Debug> std::error::Error for InsertError<T> {}

/// Error for operations that do not consume a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A handle was out of range or referenced a vacant slot.
    InvalidHandle,
    /// A pop was requested on an empty list.
    Empty,
    /// Construction was requested with zero capacity.
    ZeroCapacity,
    /// A capacity would collide with the handle type's sentinel.
    CapacityOverflow {
        /// The capacity that was requested.
        requested: usize,
        /// The largest capacity the handle type can address.
        max: usize,
    },
    /// `expand_to` was given a capacity at or below the current one.
    /// Capacity is a one-way watermark; the list never shrinks.
    NotLarger {
        /// The capacity that was requested.
        requested: usize,
        /// The current capacity.
        current: usize,
    },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidHandle => write!(f, "handle does not reference an occupied slot"),
            Error::Empty => write!(f, "list is empty"),
            Error::ZeroCapacity => write!(f, "capacity cannot be zero"),
            Error::CapacityOverflow { requested, max } => {
                write!(f, "capacity ({requested}) exceeds handle maximum ({max})")
            }
            Error::NotLarger { requested, current } => {
                write!(
                    f,
                    "new capacity ({requested}) does not exceed current capacity ({current})"
                )
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_recovers_value() {
        let err = Full("order");
        assert_eq!(err.into_inner(), "order");
    }

    #[test]
    fn insert_error_recovers_value() {
        assert_eq!(InsertError::Full(7).into_inner(), 7);
        assert_eq!(InsertError::InvalidHandle(7).into_inner(), 7);
    }

    #[test]
    fn full_converts_to_insert_error() {
        let err: InsertError<u64> = Full(9).into();
        assert_eq!(err, InsertError::Full(9));
    }

    #[test]
    fn display_messages() {
        assert_eq!(Error::Empty.to_string(), "list is empty");
        assert_eq!(
            Error::NotLarger {
                requested: 4,
                current: 8
            }
            .to_string(),
            "new capacity (4) does not exceed current capacity (8)"
        );
        assert_eq!(Full(1u8).to_string(), "list is full");
    }
}
