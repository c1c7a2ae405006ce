//! `fg-core`: foundational types for the forager simulation workspace.
//!
//! This crate is a dependency of every other `fg-*` crate.  It has no `fg-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ForagerId`, `SignalId`                               |
//! | [`geo`]         | `Point` (continuous), `Cell` (grid)                   |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `SimRng` (the single per-simulation random source)    |
//! | [`error`]       | `FgError`, `FgResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FgError, FgResult, ensure_non_negative, ensure_probability};
pub use geo::{Cell, Point};
pub use ids::{ForagerId, SignalId};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
