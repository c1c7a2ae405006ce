//! Dense per-cell food quantities.

use fg_core::Cell;
use fg_spatial::{Grid, Neighborhood, SpatialResult};

/// Food tokens on a toroidal grid.
///
/// Quantities live in a row-major `Vec` indexed by [`Grid::index`]; the
/// running total is maintained on every mutation so [`total`](Self::total)
/// is O(1).
#[derive(Clone, Debug)]
pub struct FoodGrid {
    grid:        Grid,
    quantity:    Vec<u32>,
    total:       u64,
    token_count: usize,
}

impl FoodGrid {
    pub fn new(grid: Grid) -> Self {
        Self { grid, quantity: vec![0; grid.cell_count()], total: 0, token_count: 0 }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Deposit `amount` units on `cell`, merging with any token already there.
    ///
    /// A cell holds at most `u32::MAX` units.  Returns the units actually
    /// added, which is also what `total` grows by.
    pub fn place(&mut self, cell: Cell, amount: u32) -> u32 {
        let q = &mut self.quantity[self.grid.index(cell)];
        let added = amount.min(u32::MAX - *q);
        if added == 0 {
            return 0;
        }
        if *q == 0 {
            self.token_count += 1;
        }
        *q += added;
        self.total += u64::from(added);
        added
    }

    /// Remove up to `amount` units from `cell`.  Returns what was taken.
    pub fn consume(&mut self, cell: Cell, amount: u32) -> u32 {
        let q = &mut self.quantity[self.grid.index(cell)];
        let taken = amount.min(*q);
        if taken == 0 {
            return 0;
        }
        *q -= taken;
        if *q == 0 {
            self.token_count -= 1;
        }
        self.total -= u64::from(taken);
        taken
    }

    #[inline]
    pub fn quantity(&self, cell: Cell) -> u32 {
        self.quantity[self.grid.index(cell)]
    }

    #[inline]
    pub fn has_food(&self, cell: Cell) -> bool {
        self.quantity(cell) > 0
    }

    /// Sum of all quantities.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of cells holding food.
    #[inline]
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// `(cell, quantity)` for every token, row-major.
    pub fn tokens(&self) -> impl Iterator<Item = (Cell, u32)> + '_ {
        self.quantity
            .iter()
            .enumerate()
            .filter(|&(_, &q)| q > 0)
            .map(|(i, &q)| (self.grid.cell_at(i), q))
    }

    /// Any food within `radius` of `center` (centre included).
    pub fn senses_food(&self, center: Cell, kind: Neighborhood, radius: i32) -> SpatialResult<bool> {
        Ok(self
            .grid
            .neighborhood(center, kind, true, radius)?
            .into_iter()
            .any(|c| self.has_food(c)))
    }

    /// `true` if some Moore neighbor of `cell` has no food.
    pub fn at_border(&self, cell: Cell) -> SpatialResult<bool> {
        Ok(self
            .grid
            .neighborhood(cell, Neighborhood::Moore, false, 1)?
            .into_iter()
            .any(|c| !self.has_food(c)))
    }
}
