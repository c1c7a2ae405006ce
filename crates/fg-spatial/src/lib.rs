//! `fg-spatial`: toroidal spaces and neighborhood queries.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`torus`]     | `Torus`: continuous square domain with wraparound            |
//! | [`grid`]      | `Grid`, `Neighborhood`: discrete toroidal grid, shell query  |
//! | [`occupancy`] | `Occupancy`: cell → foragers index maintained on every move  |
//! | [`error`]     | `SpatialError`, `SpatialResult<T>`                           |
//!
//! # Wraparound rule
//!
//! Both spaces use the same per-axis rule on the raw difference `d` of two
//! in-range coordinates: `d − L` if `d > L/2`, `d + L` if `d < −L/2`.
//! Every delta therefore satisfies `|Δ| ≤ L/2` and `delta(a, b)` is exactly
//! `−delta(b, a)`.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | FxHash for the occupancy index and dedup sets.             |
//! | `serde`   | Derives `Serialize`/`Deserialize` on public types.         |

pub mod error;
pub mod grid;
pub mod occupancy;
pub mod torus;


pub use error::{SpatialError, SpatialResult};
pub use grid::{Grid, Neighborhood};
pub use occupancy::Occupancy;
pub use torus::Torus;

#[cfg(feature = "fx-hash")]
pub(crate) type CellMap<V> = rustc_hash::FxHashMap<fg_core::Cell, V>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type CellMap<V> = std::collections::HashMap<fg_core::Cell, V>;

#[cfg(feature = "fx-hash")]
pub(crate) type CellSet = rustc_hash::FxHashSet<fg_core::Cell>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type CellSet = std::collections::HashSet<fg_core::Cell>;

/// Apply the wraparound rule to a raw per-axis difference.
#[inline]
pub(crate) fn wrap_delta(d: f64, size: f64) -> f64 {
    let half = size * 0.5;
    if d > half {
        d - size
    } else if d < -half {
        d + size
    } else {
        d
    }
}
