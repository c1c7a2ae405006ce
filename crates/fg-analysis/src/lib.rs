//! `fg-analysis`: what the foragers did, after the fact.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`proximity`] | `ProximityMatrix`: symmetric N × N edge weights per step     |
//! | [`cluster`]   | `find_clusters`, `cluster_sizes`, `largest_cluster`          |
//! | [`series`]    | `largest_cluster_series` over a whole run                    |
//! | [`msd`]       | trajectory unwrapping and mean squared displacement          |
//!
//! Proximity is plain Euclidean distance on stored coordinates; it does not
//! look across the torus seam.  Two foragers either side of the seam are
//! far apart as far as clustering is concerned.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                              |
//! |------------|-----------------------------------------------------|
//! | `parallel` | One rayon task per step in `largest_cluster_series` |

pub mod cluster;
pub mod error;
pub mod msd;
pub mod proximity;
pub mod series;

#[cfg(test)]
mod tests;

pub use cluster::{cluster_sizes, find_clusters, largest_cluster};
pub use error::{AnalysisError, AnalysisResult};
pub use msd::{frame_step, mean_squared_displacement, unwrap_trajectories};
pub use proximity::{DEFAULT_INTERVAL, ProximityMatrix};
pub use series::largest_cluster_series;
