//! Partition geometry for wide-index arrays.
//!
//! [`Partitioning`] fixes how a `u64` index space is split across one
//! primary partition and an ordered sequence of power-of-two overflow
//! partitions. [`Slot`] is the result of resolving a single index against
//! that geometry. All of the arithmetic here is pure — the storage crate
//! owns the buffers and the length checks.

use crate::error::ArrayError;

/// Resolved location of one element within a partitioned array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Offset within the primary partition.
    Primary(u64),
    /// Location within the overflow sequence.
    Overflow {
        /// Which overflow partition holds the element.
        partition: u64,
        /// Offset within that partition.
        offset: u64,
    },
}

/// Partition sizing for wide-index arrays.
///
/// Controls the primary partition bound and the power-of-two length of each
/// overflow partition. Validated at construction; all values are immutable
/// after creation. The defaults keep every backing allocation within a
/// 32-bit-safe element count, which is what lets a `u64`-indexed array work
/// even where a single allocation cannot span the full index space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Partitioning {
    /// Element-count bound of the primary partition.
    primary_capacity: u64,
    /// log2 of each overflow partition's length.
    exponent: u32,
}

impl Partitioning {
    /// Default primary partition bound: every index whose offset fits a
    /// 32-bit signed integer (2^31 - 1 elements).
    pub const DEFAULT_PRIMARY_CAPACITY: u64 = i32::MAX as u64;

    /// Default overflow partition length: 2^30 elements.
    pub const DEFAULT_EXPONENT: u32 = 30;

    /// Ceiling on the overflow partition count.
    ///
    /// Matches the signed-32-bit partition selector range; with the default
    /// exponent this puts the addressable ceiling near 2^61.
    pub const MAX_PARTITIONS: u64 = i32::MAX as u64;

    /// Create a geometry with the given primary bound and partition exponent.
    ///
    /// # Panics
    ///
    /// Panics if `primary_capacity` is zero or `exponent` is outside
    /// `1..=40`. These are construction-site programmer errors, not
    /// recoverable conditions.
    pub fn new(primary_capacity: u64, exponent: u32) -> Self {
        assert!(primary_capacity > 0, "primary capacity must be non-zero");
        assert!(
            (1..=40).contains(&exponent),
            "partition exponent {exponent} outside 1..=40",
        );
        Self {
            primary_capacity,
            exponent,
        }
    }

    /// Element-count bound of the primary partition.
    pub fn primary_capacity(&self) -> u64 {
        self.primary_capacity
    }

    /// Length of every full overflow partition, in elements.
    pub fn partition_len(&self) -> u64 {
        1u64 << self.exponent
    }

    /// Mask extracting the intra-partition offset from a rebased index.
    pub fn offset_mask(&self) -> u64 {
        self.partition_len() - 1
    }

    /// Largest total length this geometry can address.
    ///
    /// Saturates at `u64::MAX` for extreme geometries rather than wrapping.
    pub fn max_length(&self) -> u64 {
        self.primary_capacity
            .saturating_add(Self::MAX_PARTITIONS.saturating_mul(self.partition_len()))
    }

    /// Resolve an index to its partition and offset.
    ///
    /// Index `primary_capacity - 1` is the last primary slot; index
    /// `primary_capacity` is overflow partition 0, offset 0. The overflow
    /// decomposition rebases by subtracting `primary_capacity` (not
    /// `primary_capacity + 1`), then shifts for the partition selector and
    /// masks for the offset.
    ///
    /// `locate` is pure arithmetic — the caller owns the length check.
    pub fn locate(&self, index: u64) -> Slot {
        if index < self.primary_capacity {
            return Slot::Primary(index);
        }
        let rebased = index - self.primary_capacity;
        Slot::Overflow {
            partition: rebased >> self.exponent,
            offset: rebased & self.offset_mask(),
        }
    }

    /// Primary partition length for an array of `length` elements.
    pub fn primary_len(&self, length: u64) -> u64 {
        length.min(self.primary_capacity)
    }

    /// Overflow partition lengths for an array of `length` elements.
    ///
    /// Yields one length per partition: every partition is full except
    /// possibly the last, which is never empty. Empty for any length that
    /// fits the primary partition.
    pub fn overflow_partition_lens(&self, length: u64) -> impl Iterator<Item = u64> {
        let rebased = length.saturating_sub(self.primary_capacity);
        let full = self.partition_len();
        let count = rebased.div_ceil(full);
        (0..count).map(move |i| {
            if i + 1 < count || rebased % full == 0 {
                full
            } else {
                rebased % full
            }
        })
    }

    /// Check that `length` is addressable under this geometry.
    ///
    /// Construction calls this before allocating anything, so a rejected
    /// length allocates nothing.
    pub fn check_length(&self, length: u64) -> Result<(), ArrayError> {
        if length > self.max_length() {
            return Err(ArrayError::CapacityExceeded {
                requested: length,
                max_length: self.max_length(),
            });
        }
        Ok(())
    }
}

impl Default for Partitioning {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PRIMARY_CAPACITY, Self::DEFAULT_EXPONENT)
    }
}
