//! `fg-sim`: tick loop orchestrator for the forager simulations.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Snapshot   live entities, shuffled with the simulation RNG.
//!   ② Activate   for each entity still live:
//!                  forager → (grid: feed on own cell) → replan → apply intents
//!                  signal  → age one tick; removed below threshold
//!   ③ Commit     signals emitted this tick join the schedule for the next.
//!   ④ Observe    tick summary, then a snapshot every output interval.
//! ```
//!
//! Intents are applied as soon as the forager that produced them returns, so
//! later foragers in the same tick see the moves of earlier ones.
//!
//! # Two simulations, one step API
//!
//! | Type          | Space          | Behavior trait  | Entities           |
//! |---------------|----------------|-----------------|--------------------|
//! | [`GridSim`]   | `Grid` + food  | `GridBehavior`  | foragers           |
//! | [`SwarmSim`]  | `Torus`        | `SwarmBehavior` | foragers + signals |
//!
//! Both implement [`Simulation`], whose provided methods own the run loop.
//! [`build_simulation`] turns a [`ScenarioConfig`] into a boxed simulation.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                    |
//! |-----------|-----------------------------------------------------------|
//! | `serde`   | `Serialize`/`Deserialize` for `ScenarioConfig` and parts. |
//! | `fx-hash` | FxHash for the occupancy index and live-entity set.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fg_sim::{NoopObserver, ScenarioConfig, Simulation, build_simulation};
//!
//! let mut sim = build_simulation(&ScenarioConfig::default())?;
//! let ticks = sim.run_until_food_below(0.1, 10_000, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod grid;
pub mod observer;
pub mod scenario;
pub mod simulation;
pub mod snapshot;
pub mod swarm;


pub use builder::{GridSimBuilder, SwarmSimBuilder};
pub use error::{SimError, SimResult};
pub use grid::GridSim;
pub use observer::{NoopObserver, SimObserver};
pub use scenario::{ForagerConfig, ModelKind, ScenarioConfig, SpaceConfig, build_simulation};
pub use simulation::Simulation;
pub use snapshot::{AgentSnapshot, TickSummary};
pub use swarm::SwarmSim;
