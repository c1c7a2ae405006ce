//! `fg-behavior`: forager decision making.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`intent`]  | `Intent` enum (`Sensed`, `MoveTo`, `Relocate`, `Emit`)            |
//! | [`context`] | `GridContext<'a>`, `SwarmContext<'a>`: read-only world views      |
//! | [`model`]   | `GridBehavior`, `SwarmBehavior` traits                            |
//! | [`grid`]    | `ForagingBehavior`: variant-indexed grid strategy table           |
//! | [`swarm`]   | `BlendedHeading`: continuous alignment / attraction / repulsion   |
//! | [`params`]  | `SwarmParams`: speed and emission constants                       |
//! | [`noop`]    | `NoopBehavior`: placeholder that never produces intents           |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                              |
//!
//! # Design notes
//!
//! A behavior only ever *reads* the world, through a context borrowed from
//! the simulation, and answers with a list of [`Intent`]s.  The simulation
//! applies one forager's intents before activating the next forager, so
//! every decision sees the moves made earlier in the same tick.

pub mod context;
pub mod error;
pub mod grid;
pub mod intent;
pub mod model;
pub mod noop;
pub mod params;
pub mod swarm;


pub use context::{GridContext, SwarmContext};
pub use error::{BehaviorError, BehaviorResult};
pub use grid::ForagingBehavior;
pub use intent::Intent;
pub use model::{GridBehavior, SwarmBehavior};
pub use noop::NoopBehavior;
pub use params::SwarmParams;
pub use swarm::{BlendedHeading, Headings, circular_mean};
