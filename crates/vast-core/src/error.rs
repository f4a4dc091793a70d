//! Error types for wide-index array operations.

use std::error::Error;
use std::fmt;

/// Errors that can occur during wide-index array operations.
///
/// Every failure is a deterministic function of the arguments — the
/// container performs no I/O and never retries internally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// Requested length exceeds what the partition geometry can address.
    /// Raised at construction only, before anything is allocated.
    CapacityExceeded {
        /// The length that was requested.
        requested: u64,
        /// Largest length the geometry can address.
        max_length: u64,
    },
    /// An index at or beyond the array length on a get or set.
    IndexOutOfBounds {
        /// The offending index.
        index: u64,
        /// Length of the array.
        length: u64,
    },
    /// A flat view was requested while overflow partitions exist.
    ///
    /// A single slice cannot represent indices beyond the primary bound,
    /// and the view must never silently truncate.
    FlatViewUnavailable {
        /// Length of the array.
        length: u64,
        /// Largest length a flat view can represent.
        limit: u64,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                max_length,
            } => {
                write!(
                    f,
                    "capacity exceeded: requested {requested} elements, geometry addresses at most {max_length}"
                )
            }
            Self::IndexOutOfBounds { index, length } => {
                write!(f, "index {index} out of bounds for length {length}")
            }
            Self::FlatViewUnavailable { length, limit } => {
                write!(
                    f,
                    "flat view unavailable: length {length} exceeds the {limit}-element primary bound"
                )
            }
        }
    }
}

impl Error for ArrayError {}
