//! Benchmark profiles for the Vast wide-index array family.
//!
//! Provides pre-built geometries and arrays sized so benches measure the
//! addressing paths without allocating gigabytes:
//!
//! - [`bench_partitioning`]: 1M-element primary bound, 256K-element
//!   overflow partitions
//! - [`spanning_array`]: an array crossing the primary bound into three
//!   overflow partitions

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use vast_array::WideArray;
use vast_core::Partitioning;

/// Reduced geometry for benchmarking: 2^20-element primary partition,
/// 2^18-element overflow partitions.
pub fn bench_partitioning() -> Partitioning {
    Partitioning::new(1 << 20, 18)
}

/// Total length of [`spanning_array`]: the primary bound plus three full
/// overflow partitions.
pub fn spanning_len() -> u64 {
    (1 << 20) + 3 * (1 << 18)
}

/// Build a zero-initialized array spanning the primary bound and three
/// overflow partitions.
pub fn spanning_array() -> WideArray<u64> {
    WideArray::with_partitioning(spanning_len(), bench_partitioning())
        .expect("bench geometry addresses the spanning length")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanning_array_crosses_the_seam() {
        let arr = spanning_array();
        assert_eq!(arr.len(), spanning_len());
        assert_eq!(arr.overflow_partition_count(), 3);
    }

    #[test]
    fn spanning_array_is_addressable_at_both_ends() {
        let mut arr = spanning_array();
        let last = spanning_len() - 1;
        arr.set(0, 1).unwrap();
        arr.set(last, 2).unwrap();
        assert_eq!(arr.get(0).unwrap(), 1);
        assert_eq!(arr.get(last).unwrap(), 2);
    }
}
