//! Core types for the Vast wide-index array family.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! partition geometry ([`Partitioning`] and the resolved [`Slot`] location)
//! and the error type ([`ArrayError`]) shared by the storage crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod partition;

// Public re-exports for the primary API surface.
pub use error::ArrayError;
pub use partition::{Partitioning, Slot};
