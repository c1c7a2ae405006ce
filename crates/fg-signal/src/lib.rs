//! `fg-signal`: diffusing point-source signals on a continuous torus.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                       |
//! |------------|----------------------------------------------------------------|
//! | [`params`] | `Polarity`, `SignalParams` (Q, D, decay, θ) with validation    |
//! | [`source`] | `SignalSource`, `concentration`, `active_radius_sq`            |
//! | [`field`]  | `SignalField`: emission, sampling, ageing, weighted centroid   |
//!
//! # Model
//!
//! A source deposited at `t = 1` spreads as an instantaneous point release
//! with linear decay:
//!
//! ```text
//! C(r, t) = Q · exp(−r² / 4Dt) / sqrt(4πDt) − decay · t
//! r(t)²   = −4Dt · ln((θ + decay · t) · sqrt(4πDt) / Q)
//! ```
//!
//! A forager at distance `r` perceives the source iff `r < r(t)`, i.e. iff
//! `C(r, t) > θ`.  The source dies once its peak `C(0, t)` falls below `θ`.
//! Numeric corner cases (`D·t ≤ 0`, a non-finite or non-positive log
//! argument) count as "below threshold": the source is never visible and is
//! removed on its next step.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod field;
pub mod params;
pub mod source;

#[cfg(test)]
mod tests;

pub use field::{SignalField, SignalSample};
pub use params::{Polarity, SignalParams};
pub use source::{SignalSource, active_radius_sq, concentration};
