//! Per-step cluster statistics over a whole run.

use tracing::debug;

use crate::{ProximityMatrix, largest_cluster};

/// Largest cluster size at every step of `steps`.
///
/// Steps are independent, so with the `parallel` feature each one is
/// analysed on the rayon pool.  The result is in step order either way.
pub fn largest_cluster_series(steps: &[ProximityMatrix], interval: f64) -> Vec<usize> {
    #[cfg(not(feature = "parallel"))]
    let series: Vec<usize> = steps.iter().map(|m| largest_cluster(m, interval)).collect();

    #[cfg(feature = "parallel")]
    let series: Vec<usize> = {
        use rayon::prelude::*;
        steps.par_iter().map(|m| largest_cluster(m, interval)).collect()
    };

    debug!(steps = series.len(), peak = series.iter().max().copied().unwrap_or(0), "largest-cluster series");
    series
}
