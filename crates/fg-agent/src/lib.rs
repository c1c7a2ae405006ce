//! `fg-agent`: Structure-of-Arrays forager storage.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`profile`] | `Variant`, `Capabilities`, `Weights`, `Sensing`, `ForagerProfile` |
//! | [`stats`]   | `ForagingStats`: per-forager step / sense / consume counters    |
//! | [`store`]   | `ForagerStore<P>` (SoA arrays indexed by `ForagerId`)           |
//! | [`builder`] | `ForagerStoreBuilder<P>` (fluent construction, validation)      |
//!
//! The store is generic over the position type: `Cell` on the grid,
//! `Point` in the continuous domain.  Foragers are never destroyed, so a
//! `ForagerId` is a stable index into every array for the whole run.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types.  |

pub mod builder;
pub mod profile;
pub mod stats;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::ForagerStoreBuilder;
pub use profile::{Capabilities, ForagerProfile, Sensing, Variant, Weights};
pub use stats::ForagingStats;
pub use store::ForagerStore;
