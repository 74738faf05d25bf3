//! Splitting the offer collection into contiguous partitions.
//!
//! Partitions are disjoint index ranges in ascending order whose union is
//! the whole collection, so concatenating per-partition results in
//! partition order reproduces collection order.

use std::ops::Range;

/// Splits `len` items into `partition_count` contiguous ranges of
/// `ceil(len / partition_count)` items; trailing ranges may be shorter or
/// empty.
///
/// A `partition_count` of zero is treated as one.
///
/// # Examples
///
/// ```
/// use ridematch_engine::partition_ranges;
///
/// assert_eq!(partition_ranges(10, 4), vec![0..3, 3..6, 6..9, 9..10]);
/// assert_eq!(partition_ranges(2, 3), vec![0..1, 1..2, 2..2]);
/// ```
pub fn partition_ranges(len: usize, partition_count: usize) -> Vec<Range<usize>> {
    let partition_count = partition_count.max(1);
    let chunk_size = len.div_ceil(partition_count);

    (0..partition_count)
        .map(|i| {
            let start = (i * chunk_size).min(len);
            let end = ((i + 1) * chunk_size).min(len);
            start..end
        })
        .collect()
}

/// Chooses how many partitions a collection is split into.
///
/// The partition count is the resolved worker count, capped at
/// `len / min_partition_size`. Every non-empty partition before the last
/// one then holds at least `min_partition_size` offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContiguousPartitioner {
    worker_count: usize,
    min_partition_size: usize,
}

impl ContiguousPartitioner {
    /// Creates a partitioner for `worker_count` workers.
    pub fn new(worker_count: usize) -> Self {
        Self {
            worker_count: worker_count.max(1),
            min_partition_size: 1,
        }
    }

    /// Sets the smallest partition worth a separate worker.
    pub fn with_min_partition_size(mut self, size: usize) -> Self {
        self.min_partition_size = size.max(1);
        self
    }

    /// Returns the number of partitions for a collection of `len` offers.
    pub fn partition_count(&self, len: usize) -> usize {
        let by_size = (len / self.min_partition_size).max(1);
        self.worker_count.min(by_size)
    }

    /// Splits `len` offers into ranges.
    pub fn partition(&self, len: usize) -> Vec<Range<usize>> {
        partition_ranges(len, self.partition_count(len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_complete(len: usize, ranges: &[Range<usize>]) {
        let mut next = 0;
        for range in ranges {
            assert_eq!(range.start, next, "gap or overlap in {ranges:?}");
            assert!(range.start <= range.end);
            next = range.end;
        }
        assert_eq!(next, len, "ranges {ranges:?} do not cover 0..{len}");
    }

    #[test]
    fn test_even_split() {
        assert_eq!(partition_ranges(8, 4), vec![0..2, 2..4, 4..6, 6..8]);
    }

    #[test]
    fn test_last_partition_shorter() {
        assert_eq!(partition_ranges(7, 3), vec![0..3, 3..6, 6..7]);
    }

    #[test]
    fn test_more_partitions_than_items() {
        let ranges = partition_ranges(3, 5);
        assert_eq!(ranges.len(), 5);
        assert_eq!(ranges, vec![0..1, 1..2, 2..3, 3..3, 3..3]);
    }

    #[test]
    fn test_empty_collection() {
        let ranges = partition_ranges(0, 4);
        assert_eq!(ranges.len(), 4);
        assert!(ranges.iter().all(|r| r.is_empty()));
    }

    #[test]
    fn test_zero_partitions_treated_as_one() {
        assert_eq!(partition_ranges(5, 0), vec![0..5]);
    }

    #[test]
    fn test_ranges_cover_each_index_once() {
        for len in 0..40 {
            for count in 1..12 {
                let ranges = partition_ranges(len, count);
                assert_eq!(ranges.len(), count);
                assert_complete(len, &ranges);
            }
        }
    }

    #[test]
    fn test_partition_count_capped_by_min_size() {
        let partitioner = ContiguousPartitioner::new(8).with_min_partition_size(100);
        assert_eq!(partitioner.partition_count(0), 1);
        assert_eq!(partitioner.partition_count(50), 1);
        assert_eq!(partitioner.partition_count(199), 1);
        assert_eq!(partitioner.partition_count(250), 2);
        assert_eq!(partitioner.partition_count(10_000), 8);
    }

    #[test]
    fn test_partitions_respect_min_size() {
        assert_eq!(
            ContiguousPartitioner::new(8)
                .with_min_partition_size(100)
                .partition(250),
            vec![0..125, 125..250]
        );

        for workers in 1..10 {
            for min in 1..20 {
                let partitioner =
                    ContiguousPartitioner::new(workers).with_min_partition_size(min);
                for len in 0..120 {
                    let ranges = partitioner.partition(len);
                    assert_complete(len, &ranges);
                    let busy: Vec<_> = ranges.iter().filter(|r| !r.is_empty()).collect();
                    for range in busy.iter().rev().skip(1) {
                        assert!(
                            range.len() >= min,
                            "partition {range:?} of {len} has fewer than {min} offers"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_partitioner_zero_inputs() {
        let partitioner = ContiguousPartitioner::new(0).with_min_partition_size(0);
        assert_eq!(partitioner.partition(5), vec![0..5]);
    }
}
