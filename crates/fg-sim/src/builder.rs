//! Fluent builders for [`GridSim`] and [`SwarmSim`].

use fg_agent::ForagerStore;
use fg_behavior::{GridBehavior, SwarmBehavior, SwarmParams};
use fg_core::{Cell, FgError, ForagerId, Point, SimConfig, SimRng};
use fg_food::FoodGrid;
use fg_schedule::{ActivationSchedule, Entity};
use fg_signal::SignalField;
use fg_spatial::{Occupancy, Torus};
use tracing::info;

use crate::{GridSim, SimError, SimResult, SwarmSim};

/// Builder for [`GridSim<B>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: total ticks, seed, tick duration, …
/// - [`FoodGrid`]: the grid and its initial tokens, e.g. from
///   [`fg_food::generate`]
/// - [`ForagerStore<Cell>`]: from [`fg_agent::ForagerStoreBuilder`]
/// - `B: GridBehavior`: usually [`fg_behavior::ForagingBehavior`]
///
/// Forager positions are wrapped onto the grid; no two may share a cell.
///
/// # Example
///
/// ```rust,ignore
/// let food = fg_food::generate(&layout, Grid::square(35)?, &mut rng)?;
/// let foragers = ForagerStoreBuilder::new(profile).forager(Cell::new(3, 4), 0.0).build()?;
/// let mut sim = GridSimBuilder::new(config, food, foragers, ForagingBehavior).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct GridSimBuilder<B: GridBehavior> {
    config:   SimConfig,
    food:     FoodGrid,
    foragers: ForagerStore<Cell>,
    behavior: B,
}

impl<B: GridBehavior> GridSimBuilder<B> {
    pub fn new(config: SimConfig, food: FoodGrid, foragers: ForagerStore<Cell>, behavior: B) -> Self {
        Self { config, food, foragers, behavior }
    }

    /// Validate inputs, index the foragers by cell, and return a ready-to-run
    /// [`GridSim`].
    pub fn build(self) -> SimResult<GridSim<B>> {
        self.config.validate()?;
        let grid = *self.food.grid();
        let mut foragers = self.foragers;

        if foragers.count > grid.cell_count() {
            return Err(SimError::OverCapacity { foragers: foragers.count, cells: grid.cell_count() });
        }

        // ── Place foragers ────────────────────────────────────────────────
        let mut occupancy = Occupancy::new();
        for f in 0..foragers.count {
            let forager = ForagerId(f as u32);
            foragers.profile[f].validate()?;
            let cell = grid.wrap(foragers.position[f]);
            if !occupancy.is_free(cell) {
                return Err(SimError::CellTaken { forager, cell });
            }
            foragers.position[f] = cell;
            occupancy.place(forager, cell);
        }

        let mut schedule = ActivationSchedule::new();
        for forager in foragers.ids() {
            schedule.add(forager);
        }

        let initial_food = self.food.total();
        info!(
            foragers = foragers.count,
            width = grid.width(),
            height = grid.height(),
            food = initial_food,
            tokens = self.food.token_count(),
            "grid simulation built",
        );

        Ok(GridSim {
            clock:    self.config.make_clock(),
            rng:      SimRng::new(self.config.seed),
            config:   self.config,
            grid,
            food:     self.food,
            foragers,
            behavior: self.behavior,
            occupancy,
            schedule,
            initial_food,
        })
    }
}

/// Builder for [`SwarmSim<B>`].
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                  |
/// |---------------|--------------------------|
/// | `.params(p)`  | `SwarmParams::default()` |
///
/// Only solitary foragers are supported in the continuous domain; any other
/// variant is rejected at build time.
pub struct SwarmSimBuilder<B: SwarmBehavior> {
    config:   SimConfig,
    torus:    Torus,
    foragers: ForagerStore<Point>,
    behavior: B,
    params:   SwarmParams,
}

impl<B: SwarmBehavior> SwarmSimBuilder<B> {
    pub fn new(config: SimConfig, torus: Torus, foragers: ForagerStore<Point>, behavior: B) -> Self {
        Self { config, torus, foragers, behavior, params: SwarmParams::default() }
    }

    /// Movement, emission and signal parameters.
    pub fn params(mut self, params: SwarmParams) -> Self {
        self.params = params;
        self
    }

    pub fn build(self) -> SimResult<SwarmSim<B>> {
        self.config.validate()?;
        self.params.validate()?;
        let mut foragers = self.foragers;

        for f in 0..foragers.count {
            let profile = &foragers.profile[f];
            profile.validate()?;
            if profile.variant.is_social() || profile.variant.is_strain_specific() {
                return Err(FgError::config(
                    "foragers.variant",
                    format!("{} foragers are not supported in the continuous domain", profile.variant),
                )
                .into());
            }
            foragers.position[f] = self.torus.wrap(foragers.position[f]);
        }

        let mut schedule = ActivationSchedule::new();
        for forager in foragers.ids() {
            schedule.add(Entity::Forager(forager));
        }

        info!(
            foragers = foragers.count,
            domain = self.torus.size(),
            speed = self.params.speed,
            "swarm simulation built",
        );

        Ok(SwarmSim {
            clock:    self.config.make_clock(),
            rng:      SimRng::new(self.config.seed),
            config:   self.config,
            signals:  SignalField::new(self.torus),
            torus:    self.torus,
            foragers,
            params:   self.params,
            behavior: self.behavior,
            schedule,
        })
    }
}
