//! Fixed-capacity storage addressable by 64-bit wide indices.
//!
//! [`WideArray`] behaves as one logically contiguous, zero-initialized
//! array of up to the geometry's addressable ceiling, while internally
//! splitting storage into a primary partition plus power-of-two overflow
//! partitions:
//!
//! ```text
//! WideArray<T>
//! ├── primary: Vec<T>        (indices 0 .. primary_capacity)
//! └── overflow: Vec<Vec<T>>  (indices primary_capacity ..)
//!     ├── partition 0 (2^P elements)
//!     ├── partition 1 (2^P elements)
//!     └── partition n (1 ..= 2^P elements)
//! ```
//!
//! Every get/set resolves to exactly one partition in O(1) via a
//! subtract/shift/mask decomposition. Capacity is fixed at construction
//! and is part of the array's identity — there is no growth, shrink, or
//! partition reclamation.
//!
//! The container performs no internal synchronization; `&mut self` on the
//! mutating operations gives single-writer exclusion statically, and
//! callers sharing an array across threads must wrap it in a lock.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod iter;

// Public re-exports for the primary API surface.
pub use array::WideArray;
pub use iter::Iter;
