//! Lloyd's k-means over the 2-D point store.
//!
//! Each step is a pure function over explicit inputs; [`KMeans::fit`] wires them
//! into the assign/update loop and stops once the assignment vector is stable.

pub mod assign;
pub mod convergence;
pub mod init;
pub mod kmeans;
pub mod update;

use std::fmt;

use thiserror::Error;

use crate::points::Point;

pub use assign::assign;
pub use convergence::has_converged;
pub use init::{block_ranges, initial_centroids};
pub use kmeans::{DEFAULT_MAX_ITERATIONS, KMeans};
pub use update::{CentroidUpdate, update_centroids};

/// Mean position of a cluster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    pub x: f64,
    pub y: f64,
}

impl Centroid {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `point`.
    #[must_use]
    pub fn distance_to(&self, point: Point) -> f64 {
        let dx = point.x as f64 - self.x;
        let dy = point.y as f64 - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Component-wise mean of `points`. `None` for an empty slice.
    pub(crate) fn mean_of(points: &[Point]) -> Option<Self> {
        let mut sum = CoordinateSum::default();
        points.iter().for_each(|point| sum.add(*point));
        sum.mean()
    }
}

/// Running coordinate sum used by the initializer and the update step.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CoordinateSum {
    x: f64,
    y: f64,
    count: usize,
}

impl CoordinateSum {
    pub(crate) fn add(&mut self, point: Point) {
        self.x += point.x as f64;
        self.y += point.y as f64;
        self.count += 1;
    }

    pub(crate) fn mean(&self) -> Option<Centroid> {
        if self.count == 0 {
            return None;
        }
        let count = self.count as f64;
        Some(Centroid::new(self.x / count, self.y / count))
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClusterError {
    #[error("k must be an integer greater than 0")]
    ZeroClusters,
    #[error("k ({k}) must be less than the number of data points ({points})")]
    TooManyClusters { k: usize, points: usize },
    #[error("maximum iteration count must be greater than 0")]
    ZeroIterations,
    #[error("assignment vector has {actual} entries but there are {expected} points")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("point {index} is assigned to cluster {label}, but k is {k}")]
    LabelOutOfRange { index: usize, label: usize, k: usize },
}

/// Recoverable conditions observed during a fit. They are logged as they happen
/// and kept on the result; none of them abort clustering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterWarning {
    /// A cluster received no points and kept its previous centroid.
    DegenerateCluster { iteration: usize, cluster: usize },
    /// The iteration cap was reached before the assignments stabilized.
    NonConvergence { iterations: usize },
}

impl fmt::Display for ClusterWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateCluster { iteration, cluster } => write!(
                f,
                "cluster {} was empty on iteration {iteration}; kept its previous centroid",
                cluster + 1
            ),
            Self::NonConvergence { iterations } => {
                write!(f, "no convergence after {iterations} iterations")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let centroid = Centroid::new(0.0, 0.0);
        assert!((centroid.distance_to(Point::new(3, 4)) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn mean_of_empty_slice_is_none() {
        assert_eq!(Centroid::mean_of(&[]), None);
    }

    #[test]
    fn mean_of_points() {
        let mean = Centroid::mean_of(&[Point::new(0, 0), Point::new(1, 0), Point::new(0, 1)])
            .expect("non-empty");
        assert!((mean.x - 1.0 / 3.0).abs() < 1e-12);
        assert!((mean.y - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn warnings_use_one_indexed_cluster_labels() {
        let warning = ClusterWarning::DegenerateCluster {
            iteration: 2,
            cluster: 0,
        };
        assert!(warning.to_string().starts_with("cluster 1 was empty"));
    }
}
