use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::info;

use crate::clustering::{ClusterError, ClusterWarning, KMeans};
use crate::config::Config;
use crate::output::{self, OutputTarget};
use crate::points::PointStore;

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub points: usize,
    pub k: usize,
    pub iterations: usize,
    pub converged: bool,
    pub warnings: Vec<ClusterWarning>,
    pub elapsed: Duration,
    pub target: OutputTarget,
}

/// Loads the input, clusters it and writes the labelled points.
///
/// # Errors
/// Fails when the input cannot be read or parsed, when `k` is not below the
/// number of points, or when writing the results fails.
pub fn run(config: &Config) -> Result<RunSummary> {
    let points = PointStore::load(config.input())
        .with_context(|| format!("failed to load points from {}", config.input().display()))?;
    let k = config.k();

    if points.len() <= k {
        return Err(ClusterError::TooManyClusters {
            k,
            points: points.len(),
        })
        .context("K must be less than the number of data tuples");
    }

    println!("Starting k-means with k={k} on {} tuples.", points.len());
    let started = Instant::now();
    let result = KMeans::fit(&points, k, config.max_iterations()).context("k-means failed")?;
    let elapsed = started.elapsed();
    println!("Finished k-means in {:.3} seconds.", elapsed.as_secs_f64());

    for warning in result.warnings() {
        eprintln!("warning: {warning}");
    }

    let target = output::emit(config.output(), &points, result.labels())
        .context("failed to write results")?;
    if let OutputTarget::File(path) = &target {
        println!("Wrote results to {}", path.display());
    }

    info!(
        k,
        points = points.len(),
        iterations = result.iterations(),
        converged = result.converged(),
        elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        "run complete"
    );

    Ok(RunSummary {
        points: points.len(),
        k,
        iterations: result.iterations(),
        converged: result.converged(),
        warnings: result.warnings().to_vec(),
        elapsed,
        target,
    })
}
