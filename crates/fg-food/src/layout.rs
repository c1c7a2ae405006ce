//! Food generators.
//!
//! # Clustered
//!
//! One token is seeded at the anchor (chosen or uniformly random).  Each
//! further unit draws a jump `d = U^(−1/γ)` with `U ~ U(0, 1]`, clamps it to
//! `[1, diagonal/√2]`, picks a random already-placed token, and deposits on a
//! cell at exactly `⌈d⌉` (Moore shell) from it.  Large `γ` keeps jumps short
//! and yields one tight patch; `γ = 0` places every unit uniformly.  A shell
//! too wide for the grid has no cells, and the unit lands uniformly instead.
//!
//! # Multi-spot
//!
//! `total_food` is split evenly over 1, 2 or 4 Euclidean discs:
//!
//! | Spots | Centres                                   | Radius  |
//! |-------|-------------------------------------------|---------|
//! | 1     | `(W/2, H/2)`                              | `N/6`   |
//! | 2     | `(W/4, H/4)`, `(3W/4, 3H/4)`              | `N/8`   |
//! | 4     | the four quadrant centres                 | `N/12`  |
//!
//! with `N = min(W, H)`.  Every cell of a spot receives
//! `(total / spots) / cells_in_spot`, integer division throughout.

use fg_core::{Cell, FgError, FgResult, SimRng};
use fg_spatial::{Grid, Neighborhood};
use tracing::debug;

use crate::FoodGrid;

/// Number of food spots in a multi-spot layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub enum SpotCount {
    One,
    Two,
    Four,
}

impl TryFrom<u32> for SpotCount {
    type Error = FgError;

    fn try_from(n: u32) -> FgResult<Self> {
        match n {
            1 => Ok(SpotCount::One),
            2 => Ok(SpotCount::Two),
            4 => Ok(SpotCount::Four),
            _ => Err(FgError::config("food.spots", format!("must be 1, 2 or 4, got {n}"))),
        }
    }
}

impl From<SpotCount> for u32 {
    fn from(s: SpotCount) -> u32 {
        match s {
            SpotCount::One  => 1,
            SpotCount::Two  => 2,
            SpotCount::Four => 4,
        }
    }
}

impl SpotCount {
    /// Spot centres on `grid`, in the order listed in the module table.
    pub fn centres(self, grid: &Grid) -> Vec<Cell> {
        let (w, h) = (grid.width(), grid.height());
        match self {
            SpotCount::One  => vec![Cell::new(w / 2, h / 2)],
            SpotCount::Two  => vec![Cell::new(w / 4, h / 4), Cell::new(3 * w / 4, 3 * h / 4)],
            SpotCount::Four => vec![
                Cell::new(w / 4, h / 4),
                Cell::new(3 * w / 4, h / 4),
                Cell::new(w / 4, 3 * h / 4),
                Cell::new(3 * w / 4, 3 * h / 4),
            ],
        }
    }

    /// Disc radius of each spot on `grid`.
    pub fn radius(self, grid: &Grid) -> i32 {
        let n = grid.width().min(grid.height());
        match self {
            SpotCount::One  => n / 6,
            SpotCount::Two  => n / 8,
            SpotCount::Four => n / 12,
        }
    }
}

/// How initial food is distributed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "mode", rename_all = "snake_case"))]
pub enum FoodLayout {
    /// Power-law jumps from already placed food.
    Clustered {
        gamma:      f64,
        total_food: i64,
        #[cfg_attr(feature = "serde", serde(default))]
        anchor:     Option<Cell>,
    },
    /// Equal shares on 1, 2 or 4 circular spots.
    MultiSpot {
        spots:      SpotCount,
        total_food: i64,
    },
}

impl Default for FoodLayout {
    fn default() -> Self {
        FoodLayout::Clustered { gamma: 1.0, total_food: 35 * 35 * 10, anchor: None }
    }
}

impl FoodLayout {
    pub fn total_food(&self) -> i64 {
        match *self {
            FoodLayout::Clustered { total_food, .. } | FoodLayout::MultiSpot { total_food, .. } => total_food,
        }
    }

    /// The multi-spot count, if this is a multi-spot layout.
    pub fn spots(&self) -> Option<SpotCount> {
        match *self {
            FoodLayout::MultiSpot { spots, .. } => Some(spots),
            FoodLayout::Clustered { .. } => None,
        }
    }

    pub fn validate(&self) -> FgResult<()> {
        if self.total_food() < 0 {
            return Err(FgError::config(
                "food.total_food",
                format!("must be >= 0, got {}", self.total_food()),
            ));
        }
        if let FoodLayout::Clustered { gamma, .. } = *self {
            if !gamma.is_finite() || gamma < 0.0 {
                return Err(FgError::config("food.gamma", format!("must be a finite value >= 0, got {gamma}")));
            }
        }
        Ok(())
    }
}

/// Build a populated [`FoodGrid`] on `grid` according to `layout`.
pub fn generate(layout: &FoodLayout, grid: Grid, rng: &mut SimRng) -> FgResult<FoodGrid> {
    layout.validate()?;
    let mut food = FoodGrid::new(grid);
    match *layout {
        FoodLayout::Clustered { gamma, total_food, anchor } => {
            clustered(&mut food, gamma, total_food as u64, anchor, rng);
        }
        FoodLayout::MultiSpot { spots, total_food } => {
            multi_spot(&mut food, spots, total_food as u64)?;
        }
    }
    debug!(total = food.total(), tokens = food.token_count(), "food generated");
    Ok(food)
}

fn clustered(food: &mut FoodGrid, gamma: f64, total: u64, anchor: Option<Cell>, rng: &mut SimRng) {
    if total == 0 {
        return;
    }
    let grid = *food.grid();
    let seed = anchor.map_or_else(|| grid.random_cell(rng), |c| grid.wrap(c));
    food.place(seed, 1);
    let mut placed = vec![seed];
    let max_jump = grid.diagonal() / std::f64::consts::SQRT_2;

    for _ in 1..total {
        let cell = if gamma == 0.0 {
            grid.random_cell(rng)
        } else {
            let d = rng.unit_open_zero().powf(-1.0 / gamma).clamp(1.0, max_jump.max(1.0));
            let from = *rng.choose(&placed).unwrap_or(&seed);
            // ⌈d⌉ is at least 1 and the shell query cannot fail.
            let shell = grid.ring(from, d.ceil() as i32, Neighborhood::Moore).unwrap_or_default();
            match rng.choose(&shell) {
                Some(&c) => c,
                None => grid.random_cell(rng),
            }
        };
        if !food.has_food(cell) {
            placed.push(cell);
        }
        food.place(cell, 1);
    }
}

fn multi_spot(food: &mut FoodGrid, spots: SpotCount, total: u64) -> FgResult<()> {
    let grid = *food.grid();
    let budget = total / u64::from(u32::from(spots));
    let radius = spots.radius(&grid);
    for centre in spots.centres(&grid) {
        let cells = grid.disc(centre, radius).unwrap_or_default();
        if cells.is_empty() {
            continue;
        }
        let share = budget / cells.len() as u64;
        let per_cell = u32::try_from(share).map_err(|_| {
            FgError::config(
                "food.total_food",
                format!("{share} units per spot cell exceeds the per-cell limit of {}", u32::MAX),
            )
        })?;
        for cell in cells {
            food.place(cell, per_cell);
        }
    }
    Ok(())
}
