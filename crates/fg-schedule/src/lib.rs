//! `fg-schedule`: per-tick random activation.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`activation`] | `ActivationSchedule<K>`: live set + shuffled snapshots     |
//! | [`entity`]     | `Entity`: forager or signal handle                         |
//!
//! # Tick model
//!
//! ```text
//! order    = snapshot of live entities (insertion order)
//! shuffle(order) with the simulation RNG
//! for k in order:
//!     if k was removed earlier this tick → skip
//!     step k           (may add or remove entities)
//! ```
//!
//! Entities added mid-tick are not in the snapshot and first act on the
//! next tick.  Removals take effect at once: a removed entity that has not
//! yet acted this tick is skipped.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                          |
//! |-----------|-------------------------------------------------|
//! | `fx-hash` | FxHash for the membership set.                  |
//! | `serde`   | Derives `Serialize`/`Deserialize` on `Entity`.  |

pub mod activation;
pub mod entity;


pub use activation::ActivationSchedule;
pub use entity::Entity;
