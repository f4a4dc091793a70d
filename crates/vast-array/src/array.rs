//! The wide-index array container.

use std::fmt;

use vast_core::{ArrayError, Partitioning, Slot};

use crate::iter::Iter;

/// A fixed-capacity, zero-initialized array indexed by `u64`.
///
/// Storage is one primary partition holding every index below the
/// geometry's primary bound, plus zero or more power-of-two overflow
/// partitions covering the indices above it. No single backing allocation
/// exceeds a 32-bit-safe element count under the default geometry, which
/// is what lets the array span index ranges a single `Vec` cannot.
///
/// Partition count and sizes are fixed at construction; only element
/// values mutate afterwards. Cloning duplicates every partition — the
/// clone shares no storage with the original.
#[derive(Clone)]
pub struct WideArray<T> {
    layout: Partitioning,
    /// Total logical element count. Fixed for the array's lifetime.
    length: u64,
    /// Holds indices below `layout.primary_capacity()`.
    primary: Vec<T>,
    /// Holds indices from `layout.primary_capacity()` upward. Every
    /// partition is full except possibly the last.
    overflow: Vec<Vec<T>>,
}

impl<T: Copy + Default> WideArray<T> {
    /// Create a zero-initialized array of `length` elements under the
    /// default partition geometry.
    pub fn new(length: u64) -> Result<Self, ArrayError> {
        Self::with_partitioning(length, Partitioning::default())
    }

    /// Create a zero-initialized array of `length` elements under an
    /// explicit partition geometry.
    ///
    /// Fails with [`ArrayError::CapacityExceeded`] if `length` is beyond
    /// what `layout` can address. The check runs before any allocation, so
    /// a rejected length allocates nothing.
    pub fn with_partitioning(length: u64, layout: Partitioning) -> Result<Self, ArrayError> {
        layout.check_length(length)?;
        let primary = vec![T::default(); layout.primary_len(length) as usize];
        let overflow = layout
            .overflow_partition_lens(length)
            .map(|len| vec![T::default(); len as usize])
            .collect();
        Ok(Self {
            layout,
            length,
            primary,
            overflow,
        })
    }

    /// Read the element at `index`.
    ///
    /// O(1): one bounds check, one partition resolution, one indexed read.
    pub fn get(&self, index: u64) -> Result<T, ArrayError> {
        match self.resolve(index)? {
            Slot::Primary(offset) => Ok(self.primary[offset as usize]),
            Slot::Overflow { partition, offset } => {
                Ok(self.overflow[partition as usize][offset as usize])
            }
        }
    }

    /// Write `value` at `index`.
    ///
    /// Mutates exactly one element in exactly one partition; no other
    /// state changes.
    pub fn set(&mut self, index: u64, value: T) -> Result<(), ArrayError> {
        match self.resolve(index)? {
            Slot::Primary(offset) => self.primary[offset as usize] = value,
            Slot::Overflow { partition, offset } => {
                self.overflow[partition as usize][offset as usize] = value;
            }
        }
        Ok(())
    }

    /// Overwrite every element with `value`.
    pub fn fill(&mut self, value: T) {
        self.primary.fill(value);
        for partition in &mut self.overflow {
            partition.fill(value);
        }
    }

    /// Bounds-check `index` against the array length, then resolve it.
    fn resolve(&self, index: u64) -> Result<Slot, ArrayError> {
        if index >= self.length {
            return Err(ArrayError::IndexOutOfBounds {
                index,
                length: self.length,
            });
        }
        Ok(self.layout.locate(index))
    }
}

impl<T> WideArray<T> {
    /// Total logical element count.
    pub fn len(&self) -> u64 {
        self.length
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The partition geometry this array was built with.
    pub fn partitioning(&self) -> Partitioning {
        self.layout
    }

    /// Number of overflow partitions backing this array.
    pub fn overflow_partition_count(&self) -> usize {
        self.overflow.len()
    }

    /// Borrow the whole array as one contiguous slice.
    ///
    /// Zero-copy: this is the primary partition itself, and it is only a
    /// complete view while no overflow partitions exist — a single slice
    /// cannot represent indices beyond the primary bound. Fails with
    /// [`ArrayError::FlatViewUnavailable`] rather than ever truncating.
    pub fn as_flat(&self) -> Result<&[T], ArrayError> {
        self.check_flat()?;
        Ok(&self.primary)
    }

    /// Mutable variant of [`WideArray::as_flat`].
    pub fn as_flat_mut(&mut self) -> Result<&mut [T], ArrayError> {
        self.check_flat()?;
        Ok(&mut self.primary)
    }

    fn check_flat(&self) -> Result<(), ArrayError> {
        if !self.overflow.is_empty() {
            return Err(ArrayError::FlatViewUnavailable {
                length: self.length,
                limit: self.layout.primary_capacity(),
            });
        }
        Ok(())
    }

    /// Iterate over every element in ascending index order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.primary, &self.overflow)
    }
}

impl<'a, T> IntoIterator for &'a WideArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Element-wise equality, independent of partition geometry.
impl<T: PartialEq> PartialEq for WideArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for WideArray<T> {}

/// Summarizes length and topology; printing billions of elements is
/// never useful.
impl<T> fmt::Debug for WideArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WideArray")
            .field("length", &self.length)
            .field("primary_len", &self.primary.len())
            .field("overflow_partitions", &self.overflow.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Eight primary slots, four-element overflow partitions.
    fn tiny() -> Partitioning {
        Partitioning::new(8, 2)
    }

    #[test]
    fn construction_zero_initializes_every_slot() {
        let arr = WideArray::<u32>::with_partitioning(14, tiny()).unwrap();
        assert_eq!(arr.len(), 14);
        for index in 0..14 {
            assert_eq!(arr.get(index).unwrap(), 0);
        }
    }

    #[test]
    fn boundary_indices_resolve_on_both_sides_of_the_seam() {
        // One element past the primary bound: the last primary index and
        // the first overflow index must both succeed.
        let mut arr = WideArray::<u32>::with_partitioning(9, tiny()).unwrap();
        arr.set(7, 70).unwrap();
        arr.set(8, 80).unwrap();
        assert_eq!(arr.get(7).unwrap(), 70);
        assert_eq!(arr.get(8).unwrap(), 80);
        assert_eq!(arr.overflow_partition_count(), 1);
    }

    #[test]
    fn set_then_get_round_trips_across_partitions() {
        let mut arr = WideArray::<u64>::with_partitioning(20, tiny()).unwrap();
        for index in 0..20 {
            arr.set(index, index * 10 + 1).unwrap();
        }
        for index in 0..20 {
            assert_eq!(arr.get(index).unwrap(), index * 10 + 1);
        }
    }

    #[test]
    fn out_of_bounds_get_and_set_report_index_and_length() {
        let mut arr = WideArray::<u8>::with_partitioning(10, tiny()).unwrap();
        let expected = ArrayError::IndexOutOfBounds {
            index: 10,
            length: 10,
        };
        assert_eq!(arr.get(10), Err(expected));
        assert_eq!(arr.set(10, 1), Err(expected));
        assert_eq!(
            arr.get(u64::MAX),
            Err(ArrayError::IndexOutOfBounds {
                index: u64::MAX,
                length: 10,
            })
        );
    }

    #[test]
    fn zero_length_array_rejects_every_index() {
        let mut arr = WideArray::<u8>::new(0).unwrap();
        assert!(arr.is_empty());
        assert_eq!(
            arr.get(0),
            Err(ArrayError::IndexOutOfBounds {
                index: 0,
                length: 0,
            })
        );
        assert!(arr.set(0, 1).is_err());
    }

    #[test]
    fn clone_shares_no_storage_with_the_original() {
        let mut original = WideArray::<u32>::with_partitioning(14, tiny()).unwrap();
        original.set(3, 33).unwrap();
        original.set(12, 120).unwrap();

        let copy = original.clone();

        // Mutating the original must not show through the copy, in either
        // the primary or an overflow partition.
        original.set(3, 999).unwrap();
        original.set(12, 999).unwrap();
        assert_eq!(copy.get(3).unwrap(), 33);
        assert_eq!(copy.get(12).unwrap(), 120);

        // And the reverse.
        let mut copy = copy;
        copy.set(5, 55).unwrap();
        assert_eq!(original.get(5).unwrap(), 0);
    }

    #[test]
    fn partition_sizing_full_then_remainder() {
        // length = primary + one full partition + 5 leftover elements.
        let layout = Partitioning::new(8, 3);
        let arr = WideArray::<u8>::with_partitioning(8 + 8 + 5, layout).unwrap();
        assert_eq!(arr.overflow_partition_count(), 2);
        // The last addressable index sits in the short tail partition.
        assert!(arr.get(20).is_ok());
        assert!(arr.get(21).is_err());
    }

    #[test]
    fn flat_view_covers_a_full_primary_partition() {
        let arr = WideArray::<u16>::with_partitioning(8, tiny()).unwrap();
        let flat = arr.as_flat().unwrap();
        assert_eq!(flat.len(), 8);
        assert!(flat.iter().all(|&v| v == 0));
    }

    #[test]
    fn flat_view_refused_once_overflow_partitions_exist() {
        let arr = WideArray::<u16>::with_partitioning(9, tiny()).unwrap();
        assert_eq!(
            arr.as_flat().err(),
            Some(ArrayError::FlatViewUnavailable {
                length: 9,
                limit: 8,
            })
        );
    }

    #[test]
    fn flat_view_mutations_are_visible_through_get() {
        let mut arr = WideArray::<u16>::with_partitioning(6, tiny()).unwrap();
        arr.as_flat_mut().unwrap()[4] = 44;
        assert_eq!(arr.get(4).unwrap(), 44);
    }

    #[test]
    fn capacity_ceiling_rejected_before_allocating() {
        let layout = Partitioning::new(8, 2);
        let result = WideArray::<u8>::with_partitioning(u64::MAX, layout);
        assert_eq!(
            result.err(),
            Some(ArrayError::CapacityExceeded {
                requested: u64::MAX,
                max_length: layout.max_length(),
            })
        );
    }

    #[test]
    fn fill_overwrites_every_partition() {
        let mut arr = WideArray::<u8>::with_partitioning(14, tiny()).unwrap();
        arr.fill(7);
        assert!(arr.iter().all(|&v| v == 7));
    }

    #[test]
    fn equality_is_element_wise_across_geometries() {
        let mut a = WideArray::<u32>::with_partitioning(10, Partitioning::new(8, 2)).unwrap();
        let mut b = WideArray::<u32>::with_partitioning(10, Partitioning::new(4, 2)).unwrap();
        for index in 0..10 {
            a.set(index, index as u32).unwrap();
            b.set(index, index as u32).unwrap();
        }
        assert_eq!(a, b);
        b.set(9, 99).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn debug_summarizes_topology() {
        let arr = WideArray::<u8>::with_partitioning(14, tiny()).unwrap();
        let rendered = format!("{arr:?}");
        assert!(rendered.contains("length: 14"));
        assert!(rendered.contains("overflow_partitions: 2"));
    }

    // Exercises the real 2^31 - 1 boundary. Needs roughly 3 GiB of memory,
    // so it only runs on explicit request (`cargo test -- --ignored`).
    #[test]
    #[ignore]
    fn default_geometry_boundary_with_real_allocation() {
        let bound = Partitioning::DEFAULT_PRIMARY_CAPACITY;
        let mut arr = WideArray::<u8>::new(bound + 1).unwrap();
        arr.set(bound - 1, 1).unwrap();
        arr.set(bound, 2).unwrap();
        assert_eq!(arr.get(bound - 1).unwrap(), 1);
        assert_eq!(arr.get(bound).unwrap(), 2);
        assert_eq!(arr.overflow_partition_count(), 1);
        assert!(arr.as_flat().is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn writes_land_exactly_where_reads_look(
                writes in proptest::collection::vec((0u64..21, any::<u32>()), 1..40),
            ) {
                let layout = Partitioning::new(8, 3);
                let mut arr = WideArray::with_partitioning(21, layout).unwrap();
                let mut model = vec![0u32; 21];
                for &(index, value) in &writes {
                    arr.set(index, value).unwrap();
                    model[index as usize] = value;
                }
                for (index, &expected) in model.iter().enumerate() {
                    prop_assert_eq!(arr.get(index as u64).unwrap(), expected);
                }
            }

            #[test]
            fn a_write_disturbs_no_other_slot(
                index in 0u64..21,
                value in 1u32..,
            ) {
                let layout = Partitioning::new(8, 3);
                let mut arr = WideArray::with_partitioning(21, layout).unwrap();
                arr.set(index, value).unwrap();
                for other in 0..21 {
                    let expected = if other == index { value } else { 0 };
                    prop_assert_eq!(arr.get(other).unwrap(), expected);
                }
            }

            #[test]
            fn clones_never_alias(
                writes in proptest::collection::vec((0u64..21, 1u32..), 1..20),
            ) {
                let layout = Partitioning::new(8, 3);
                let mut original = WideArray::with_partitioning(21, layout).unwrap();
                let copy = original.clone();
                for &(index, value) in &writes {
                    original.set(index, value).unwrap();
                }
                for index in 0..21 {
                    prop_assert_eq!(copy.get(index).unwrap(), 0u32);
                }
            }
        }
    }
}
