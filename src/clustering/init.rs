//! Deterministic initial centroids from contiguous blocks of the input order.

use std::ops::Range;

use super::{Centroid, ClusterError};
use crate::points::PointStore;

/// Splits `0..n` into `k` contiguous blocks.
///
/// The first `k - 1` blocks hold `n / k` points each; the last block takes
/// everything that is left, remainder included.
///
/// # Errors
/// [`ClusterError::ZeroClusters`] when `k` is 0, [`ClusterError::TooManyClusters`]
/// when `k > n` (the block size would be 0).
pub fn block_ranges(n: usize, k: usize) -> Result<Vec<Range<usize>>, ClusterError> {
    if k == 0 {
        return Err(ClusterError::ZeroClusters);
    }
    let block_size = n / k;
    if block_size == 0 {
        return Err(ClusterError::TooManyClusters { k, points: n });
    }

    let mut ranges: Vec<Range<usize>> = (0..k - 1)
        .map(|block| interior_block(block, block_size))
        .collect();
    ranges.push(final_block(k, block_size, n));
    Ok(ranges)
}

fn interior_block(block: usize, block_size: usize) -> Range<usize> {
    let start = block * block_size;
    start..start + block_size
}

fn final_block(k: usize, block_size: usize, n: usize) -> Range<usize> {
    (k - 1) * block_size..n
}

/// Computes the `k` seed centroids as the means of the blocks from [`block_ranges`].
///
/// # Errors
/// Same conditions as [`block_ranges`].
pub fn initial_centroids(points: &PointStore, k: usize) -> Result<Vec<Centroid>, ClusterError> {
    let ranges = block_ranges(points.len(), k)?;
    let slice = points.as_slice();
    let centroids = ranges
        .into_iter()
        .filter_map(|range| Centroid::mean_of(&slice[range]))
        .collect::<Vec<_>>();
    // Every block is non-empty because block_size >= 1.
    debug_assert_eq!(centroids.len(), k);
    Ok(centroids)
}
