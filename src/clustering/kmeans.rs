use tracing::{debug, info, warn};

use super::convergence::changed_labels;
use super::{
    Centroid, ClusterError, ClusterWarning, assign, has_converged, initial_centroids,
    update_centroids,
};
use crate::points::PointStore;

/// Iteration cap applied when the caller does not choose one.
pub const DEFAULT_MAX_ITERATIONS: usize = 300;

/// Result of a k-means run over a [`PointStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct KMeans {
    centroids: Vec<Centroid>,
    assignments: Vec<usize>,
    iterations: usize,
    converged: bool,
    warnings: Vec<ClusterWarning>,
}

impl KMeans {
    /// Runs Lloyd's algorithm until the assignments stop changing or
    /// `max_iterations` is reached.
    ///
    /// Centroids are seeded from contiguous blocks of the input order, so the
    /// result is fully deterministic. The previous-assignment vector starts as
    /// all zeros; with `k = 1` the first iteration is already stable.
    ///
    /// # Errors
    /// Returns [`ClusterError`] when `k` is 0, `k >= points.len()`, or
    /// `max_iterations` is 0. No clustering work is done in that case.
    pub fn fit(points: &PointStore, k: usize, max_iterations: usize) -> Result<Self, ClusterError> {
        if k == 0 {
            return Err(ClusterError::ZeroClusters);
        }
        if k >= points.len() {
            return Err(ClusterError::TooManyClusters {
                k,
                points: points.len(),
            });
        }
        if max_iterations == 0 {
            return Err(ClusterError::ZeroIterations);
        }

        let mut centroids = initial_centroids(points, k)?;
        let mut previous = vec![0; points.len()];
        let mut warnings = Vec::new();
        let mut iterations = 0;
        let mut converged = false;

        while !converged && iterations < max_iterations {
            iterations += 1;

            let current = assign(points, &centroids);
            let update = update_centroids(points, &current, &centroids)?;
            for cluster in update.empty {
                warn!(
                    iteration = iterations,
                    cluster = cluster + 1,
                    "empty cluster; keeping previous centroid"
                );
                warnings.push(ClusterWarning::DegenerateCluster {
                    iteration: iterations,
                    cluster,
                });
            }
            centroids = update.centroids;

            converged = has_converged(Some(&previous), &current);
            debug!(
                iteration = iterations,
                changed = changed_labels(&previous, &current),
                converged,
                "k-means iteration finished"
            );
            previous = current;
        }

        if converged {
            info!(k, points = points.len(), iterations, "k-means converged");
        } else {
            warn!(
                k,
                points = points.len(),
                iterations,
                "k-means hit the iteration cap before converging; returning last assignment"
            );
            warnings.push(ClusterWarning::NonConvergence { iterations });
        }

        Ok(Self {
            centroids,
            assignments: previous,
            iterations,
            converged,
            warnings,
        })
    }

    /// 0-based cluster index for every point, in input order.
    #[must_use]
    pub fn assignments(&self) -> &[usize] {
        &self.assignments
    }

    /// 1-based cluster labels, as written to the output.
    pub fn labels(&self) -> impl Iterator<Item = usize> + '_ {
        self.assignments.iter().map(|cluster| cluster + 1)
    }

    #[must_use]
    pub fn centroids(&self) -> &[Centroid] {
        &self.centroids
    }

    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    #[must_use]
    pub fn converged(&self) -> bool {
        self.converged
    }

    #[must_use]
    pub fn warnings(&self) -> &[ClusterWarning] {
        &self.warnings
    }
}
