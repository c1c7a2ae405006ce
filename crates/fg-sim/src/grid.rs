//! `GridSim`: foragers eating their way across a food grid.

use fg_agent::{ForagerStore, ForagingStats};
use fg_behavior::{GridBehavior, GridContext, Intent};
use fg_core::{Cell, ForagerId, SimClock, SimConfig, SimRng, Tick};
use fg_food::FoodGrid;
use fg_schedule::ActivationSchedule;
use fg_spatial::{Grid, Occupancy};
use tracing::{debug, warn};

use crate::{AgentSnapshot, SimResult, Simulation, TickSummary};

/// The discrete-grid simulation.
///
/// Each activation a forager first eats up to `feeding_rate` units from its
/// own cell, then asks the behavior where to go.  Moves go through
/// [`move_forager`](Self::move_forager), which keeps the occupancy index in
/// step with the store.
///
/// Create via [`GridSimBuilder`][crate::GridSimBuilder].
pub struct GridSim<B: GridBehavior> {
    pub config:   SimConfig,
    pub clock:    SimClock,
    pub grid:     Grid,
    pub food:     FoodGrid,
    pub foragers: ForagerStore<Cell>,
    pub behavior: B,

    pub(crate) rng:          SimRng,
    pub(crate) occupancy:    Occupancy,
    pub(crate) schedule:     ActivationSchedule<ForagerId>,
    pub(crate) initial_food: u64,
}

impl<B: GridBehavior> GridSim<B> {
    /// Read-only view of the cell → forager index.
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// Move `forager` to `to` if that cell is free.  Returns whether it moved.
    ///
    /// Records the displacement as velocity and its angle as heading.
    pub fn move_forager(&mut self, forager: ForagerId, to: Cell) -> SimResult<bool> {
        self.foragers.check(forager)?;
        let to = self.grid.wrap(to);
        let from = self.foragers.position_of(forager);
        if to == from || !self.occupancy.is_free(to) {
            return Ok(false);
        }
        self.occupancy.relocate(forager, from, to);

        let i = forager.index();
        let (dx, dy) = self.grid.delta(from, to);
        self.foragers.position[i] = to;
        self.foragers.velocity[i] = (f64::from(dx), f64::from(dy));
        self.foragers.heading[i] = f64::from(dy).atan2(f64::from(dx));
        Ok(true)
    }

    /// Eat from the forager's own cell.  Returns the units taken.
    fn feed(&mut self, forager: ForagerId) -> u32 {
        let here = self.foragers.position_of(forager);
        let rate = self.foragers.profile_of(forager).sensing.feeding_rate;
        self.food.consume(here, rate)
    }

    /// One forager's full turn.  Returns `(moved, consumed)`.
    fn activate(&mut self, forager: ForagerId, now: Tick) -> SimResult<(bool, u32)> {
        let consumed = self.feed(forager);

        let intents = {
            let ctx = GridContext::new(now, &self.grid, &self.food, &self.occupancy, &self.foragers);
            self.behavior.replan(forager, &ctx, &mut self.rng)?
        };

        let mut sensed = false;
        let mut moved = false;
        for intent in intents {
            match intent {
                Intent::Sensed { food } => sensed = food,
                Intent::MoveTo(cell) => moved |= self.move_forager(forager, cell)?,
                other => warn!(%forager, ?other, "intent not supported on the grid; ignored"),
            }
        }
        self.foragers.stats[forager.index()].record_step(sensed, consumed);
        Ok((moved, consumed))
    }
}

impl<B: GridBehavior> Simulation for GridSim<B> {
    fn step(&mut self) -> SimResult<TickSummary> {
        let now = self.clock.current_tick;
        let order = self.schedule.snapshot(&mut self.rng);

        let mut summary = TickSummary { tick: now, ..TickSummary::default() };
        for forager in order {
            if !self.schedule.contains(forager) {
                continue;
            }
            let (moved, consumed) = self.activate(forager, now)?;
            summary.activated += 1;
            summary.moved += usize::from(moved);
            summary.food_consumed += u64::from(consumed);
        }
        summary.total_food = self.food.total();

        debug!(
            tick = %now,
            moved = summary.moved,
            consumed = summary.food_consumed,
            food = summary.total_food,
            "grid tick",
        );
        self.clock.advance();
        Ok(summary)
    }

    fn snapshot(&self) -> Vec<AgentSnapshot> {
        self.foragers
            .ids()
            .map(|f| {
                let i = f.index();
                let cell = self.foragers.position[i];
                let (vx, vy) = self.foragers.velocity[i];
                let profile = &self.foragers.profile[i];
                AgentSnapshot {
                    id:              f.0,
                    x:               f64::from(cell.x),
                    y:               f64::from(cell.y),
                    vx,
                    vy,
                    is_worm:         true,
                    social:          profile.variant.is_social(),
                    strain_specific: profile.variant.is_strain_specific(),
                    attractive:      false,
                    range:           profile.sensing.sensing_range,
                }
            })
            .collect()
    }

    fn total_food(&self) -> u64 {
        self.food.total()
    }

    fn initial_food(&self) -> u64 {
        self.initial_food
    }

    fn forager_count(&self) -> usize {
        self.foragers.count
    }

    fn foraging_stats(&self) -> ForagingStats {
        self.foragers.total_stats()
    }

    fn clock(&self) -> &SimClock {
        &self.clock
    }

    fn config(&self) -> &SimConfig {
        &self.config
    }
}
