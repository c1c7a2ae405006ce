//! Read-only world views passed to behavior callbacks.

use fg_agent::ForagerStore;
use fg_core::{Cell, Point, Tick};
use fg_food::FoodGrid;
use fg_signal::SignalField;
use fg_spatial::{Grid, Occupancy, Torus};

use crate::SwarmParams;

/// Everything a grid forager may look at.
///
/// Rebuilt by the simulation for every activation, since the previous
/// forager's intents have already been applied.
pub struct GridContext<'a> {
    pub tick:      Tick,
    pub grid:      &'a Grid,
    pub food:      &'a FoodGrid,
    pub occupancy: &'a Occupancy,
    pub foragers:  &'a ForagerStore<Cell>,
}

impl<'a> GridContext<'a> {
    #[inline]
    pub fn new(
        tick:      Tick,
        grid:      &'a Grid,
        food:      &'a FoodGrid,
        occupancy: &'a Occupancy,
        foragers:  &'a ForagerStore<Cell>,
    ) -> Self {
        Self { tick, grid, food, occupancy, foragers }
    }
}

/// Everything a continuous-domain forager may look at.
pub struct SwarmContext<'a> {
    pub tick:     Tick,
    pub torus:    &'a Torus,
    pub signals:  &'a SignalField,
    pub foragers: &'a ForagerStore<Point>,
    pub params:   &'a SwarmParams,
}

impl<'a> SwarmContext<'a> {
    #[inline]
    pub fn new(
        tick:     Tick,
        torus:    &'a Torus,
        signals:  &'a SignalField,
        foragers: &'a ForagerStore<Point>,
        params:   &'a SwarmParams,
    ) -> Self {
        Self { tick, torus, signals, foragers, params }
    }
}
