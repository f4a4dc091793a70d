//! Vast: fixed-capacity arrays indexable beyond the 32-bit boundary.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Vast sub-crates. For most users, adding `vast` as a single dependency
//! is sufficient.
//!
//! A [`prelude::WideArray`] behaves as one logically contiguous,
//! zero-initialized array addressed by `u64`, while internally splitting
//! storage into a primary partition plus power-of-two overflow partitions
//! so that no single backing allocation needs more than a 32-bit-safe
//! element count.
//!
//! # Quick start
//!
//! ```rust
//! use vast::prelude::*;
//!
//! // A reduced geometry keeps the example tiny; `WideArray::new` uses the
//! // real 2^31 - 1 primary bound.
//! let layout = Partitioning::new(8, 2);
//! let mut cells = WideArray::<u32>::with_partitioning(20, layout)?;
//!
//! cells.set(3, 7)?;
//! cells.set(11, 9)?; // lands in an overflow partition
//! assert_eq!(cells.get(3)?, 7);
//! assert_eq!(cells.get(11)?, 9);
//! assert_eq!(cells.len(), 20);
//!
//! // Indices at or past the length are rejected, never wrapped.
//! assert!(cells.get(20).is_err());
//!
//! // A clone duplicates every partition.
//! let frozen = cells.clone();
//! cells.set(3, 0)?;
//! assert_eq!(frozen.get(3)?, 7);
//! # Ok::<(), vast::types::ArrayError>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `vast-array` | The [`array::WideArray`] container and its iterator |
//! | [`types`] | `vast-core` | Partition geometry and error types |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The wide-index container (`vast-array`).
///
/// Most users only need [`array::WideArray`] from this module — it is also
/// available in the [`prelude`].
pub use vast_array as array;

/// Partition geometry and error types (`vast-core`).
///
/// Contains [`types::Partitioning`] (primary bound + overflow exponent),
/// [`types::Slot`] (a resolved element location), and
/// [`types::ArrayError`].
pub use vast_core as types;

/// Common imports for typical Vast usage.
///
/// ```rust
/// use vast::prelude::*;
/// ```
pub mod prelude {
    // Container
    pub use vast_array::{Iter, WideArray};

    // Geometry and errors
    pub use vast_core::{ArrayError, Partitioning, Slot};
}
