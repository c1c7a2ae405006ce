//! Simulation observer trait for progress reporting and data collection.

use fg_core::Tick;

use crate::{AgentSnapshot, TickSummary};

/// Callbacks invoked by the [`Simulation`][crate::Simulation] run methods.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct Progress { every: u64 }
///
/// impl SimObserver for Progress {
///     fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
///         if tick.0 % self.every == 0 {
///             println!("{tick}: {} food left", summary.total_food);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any entity acts.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once every entity has acted.  `tick` is the tick just run.
    fn on_tick_end(&mut self, _tick: Tick, _summary: &TickSummary) {}

    /// Called with the full agent table at snapshot ticks.
    ///
    /// `tick` counts completed steps, so `Tick(0)` is the initial state.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &[AgentSnapshot]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
