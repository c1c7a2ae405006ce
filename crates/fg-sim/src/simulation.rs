//! The `Simulation` step API shared by both models.

use fg_agent::ForagingStats;
use fg_core::{SimClock, SimConfig, Tick, ensure_probability};
use tracing::info;

use crate::{AgentSnapshot, SimObserver, SimResult, TickSummary};

/// A steppable simulation handle.
///
/// Implementors provide single-step mechanics and state views; the run loops
/// are provided methods so every model drives observers the same way.  The
/// trait is object safe: [`build_simulation`][crate::build_simulation]
/// returns a `Box<dyn Simulation>`.
pub trait Simulation {
    /// Advance exactly one tick.
    fn step(&mut self) -> SimResult<TickSummary>;

    /// Every forager (then every signal source) as a flat row.
    fn snapshot(&self) -> Vec<AgentSnapshot>;

    /// Food units currently on the grid.  Always 0 without a food grid.
    fn total_food(&self) -> u64;

    /// Food units present when the simulation was built.
    fn initial_food(&self) -> u64;

    fn forager_count(&self) -> usize;

    /// Population-wide foraging totals so far.
    fn foraging_stats(&self) -> ForagingStats;

    fn clock(&self) -> &SimClock;

    fn config(&self) -> &SimConfig;

    // ── Provided ──────────────────────────────────────────────────────────

    /// Ticks completed so far.
    fn tick(&self) -> Tick {
        self.clock().current_tick
    }

    /// One tick with observer callbacks.
    fn observed_step(&mut self, observer: &mut dyn SimObserver) -> SimResult<TickSummary> {
        let now = self.tick();
        observer.on_tick_start(now);
        let summary = self.step()?;
        observer.on_tick_end(now, &summary);
        let done = self.tick();
        if self.config().is_snapshot_tick(done) {
            observer.on_snapshot(done, &self.snapshot());
        }
        Ok(summary)
    }

    /// Run from the current tick to `config.end_tick()`.
    fn run(&mut self, observer: &mut dyn SimObserver) -> SimResult<()> {
        self.observe_initial(observer);
        let end = self.config().end_tick();
        while self.tick() < end {
            self.observed_step(observer)?;
        }
        info!(tick = %self.tick(), food = self.total_food(), "run complete");
        observer.on_sim_end(self.tick());
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    fn run_ticks(&mut self, n: u64, observer: &mut dyn SimObserver) -> SimResult<()> {
        self.observe_initial(observer);
        for _ in 0..n {
            self.observed_step(observer)?;
        }
        observer.on_sim_end(self.tick());
        Ok(())
    }

    /// Step until remaining food drops below `fraction` of the initial amount
    /// (or runs out), at most `max_ticks` times.
    ///
    /// Returns the number of ticks taken, or `None` if the budget ran out
    /// first.
    fn run_until_food_below(
        &mut self,
        fraction:  f64,
        max_ticks: u64,
        observer:  &mut dyn SimObserver,
    ) -> SimResult<Option<u64>> {
        ensure_probability("fraction", fraction)?;
        self.observe_initial(observer);
        let target = fraction * self.initial_food() as f64;
        let mut taken = 0;
        let outcome = loop {
            let food = self.total_food();
            if food == 0 || (food as f64) < target {
                break Some(taken);
            }
            if taken >= max_ticks {
                break None;
            }
            self.observed_step(observer)?;
            taken += 1;
        };
        info!(ticks = taken, depleted = outcome.is_some(), food = self.total_food(), "food run complete");
        observer.on_sim_end(self.tick());
        Ok(outcome)
    }

    /// Emit the `Tick(0)` snapshot if nothing has run yet.
    fn observe_initial(&self, observer: &mut dyn SimObserver) {
        let now = self.tick();
        if now == Tick(0) && self.config().is_snapshot_tick(now) {
            observer.on_snapshot(now, &self.snapshot());
        }
    }
}
