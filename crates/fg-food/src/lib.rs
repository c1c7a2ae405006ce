//! `fg-food`: food on the discrete grid and the generators that seed it.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                        |
//! |------------|-----------------------------------------------------------------|
//! | [`grid`]   | `FoodGrid`: dense per-cell quantities, merge-on-deposit, totals  |
//! | [`layout`] | `FoodLayout` (clustered, multi-spot), `SpotCount`, `generate`   |
//!
//! A cell holds at most one token; depositing on an occupied cell increases
//! its quantity, and consuming it to zero removes it.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod grid;
pub mod layout;

#[cfg(test)]
mod tests;

pub use grid::FoodGrid;
pub use layout::{FoodLayout, SpotCount, generate};
