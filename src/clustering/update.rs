//! Centroid recomputation.
//!
//! A cluster that ends up with no points keeps the centroid it had on the
//! previous iteration; its index is reported so the caller can surface it.

use super::{Centroid, ClusterError, CoordinateSum};
use crate::points::PointStore;

/// Result of one update step.
#[derive(Debug, Clone, PartialEq)]
pub struct CentroidUpdate {
    pub centroids: Vec<Centroid>,
    /// Cluster indices that received no points, in ascending order.
    pub empty: Vec<usize>,
}

/// Recomputes each centroid as the mean of the points assigned to it.
///
/// `previous` supplies k and the fallback position for empty clusters.
///
/// # Errors
/// [`ClusterError::LengthMismatch`] when `assignments` and `points` differ in
/// length, [`ClusterError::LabelOutOfRange`] when a label is not below k.
pub fn update_centroids(
    points: &PointStore,
    assignments: &[usize],
    previous: &[Centroid],
) -> Result<CentroidUpdate, ClusterError> {
    if assignments.len() != points.len() {
        return Err(ClusterError::LengthMismatch {
            expected: points.len(),
            actual: assignments.len(),
        });
    }

    let k = previous.len();
    let mut sums = vec![CoordinateSum::default(); k];
    for (index, (point, &label)) in points.iter().zip(assignments).enumerate() {
        let sum = sums
            .get_mut(label)
            .ok_or(ClusterError::LabelOutOfRange { index, label, k })?;
        sum.add(*point);
    }

    let mut empty = Vec::new();
    let centroids = sums
        .iter()
        .zip(previous)
        .enumerate()
        .map(|(cluster, (sum, prior))| {
            sum.mean().unwrap_or_else(|| {
                empty.push(cluster);
                *prior
            })
        })
        .collect();

    Ok(CentroidUpdate { centroids, empty })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::Point;

    fn store(coords: &[(i64, i64)]) -> PointStore {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn recomputes_means_per_cluster() {
        let points = store(&[(0, 0), (2, 2), (10, 0), (20, 0)]);
        let previous = [Centroid::new(0.0, 0.0), Centroid::new(0.0, 0.0)];
        let update = update_centroids(&points, &[0, 0, 1, 1], &previous).expect("valid input");
        assert_eq!(
            update.centroids,
            vec![Centroid::new(1.0, 1.0), Centroid::new(15.0, 0.0)]
        );
        assert!(update.empty.is_empty());
    }

    #[test]
    fn empty_cluster_keeps_previous_centroid() {
        let points = store(&[(0, 0), (2, 2)]);
        let previous = [
            Centroid::new(5.0, 5.0),
            Centroid::new(-3.5, 8.25),
            Centroid::new(1.0, 1.0),
        ];
        let update = update_centroids(&points, &[2, 2], &previous).expect("valid input");
        assert_eq!(update.centroids[0], previous[0]);
        assert_eq!(update.centroids[1], previous[1]);
        assert_eq!(update.centroids[2], Centroid::new(1.0, 1.0));
        assert_eq!(update.empty, vec![0, 1]);
        assert!(update.centroids.iter().all(|c| c.x.is_finite() && c.y.is_finite()));
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let points = store(&[(0, 0), (1, 1)]);
        let error = update_centroids(&points, &[0], &[Centroid::new(0.0, 0.0)])
            .expect_err("mismatch must fail");
        assert_eq!(
            error,
            ClusterError::LengthMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn out_of_range_label_is_rejected() {
        let points = store(&[(0, 0), (1, 1)]);
        let error = update_centroids(&points, &[0, 3], &[Centroid::new(0.0, 0.0)])
            .expect_err("label 3 with k=1 must fail");
        assert_eq!(
            error,
            ClusterError::LabelOutOfRange {
                index: 1,
                label: 3,
                k: 1
            }
        );
    }
}
