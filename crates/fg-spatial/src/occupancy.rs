//! Cell → forager index for the discrete grid.
//!
//! The grid world routes every placement and move through this index so
//! "is this cell free?" and "who is near me?" never need a scan over the
//! whole population.  Cells with no foragers have no entry.

use fg_core::{Cell, ForagerId};

use crate::{CellMap, Grid, Neighborhood, SpatialResult};

/// Which foragers stand on which cell.
#[derive(Default, Debug, Clone)]
pub struct Occupancy {
    by_cell: CellMap<Vec<ForagerId>>,
}

impl Occupancy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `forager` on `cell` (already wrapped by the caller's grid).
    pub fn place(&mut self, forager: ForagerId, cell: Cell) {
        self.by_cell.entry(cell).or_default().push(forager);
    }

    /// Forget `forager` on `cell`.  Returns `false` if it was not there.
    pub fn vacate(&mut self, forager: ForagerId, cell: Cell) -> bool {
        let Some(list) = self.by_cell.get_mut(&cell) else {
            return false;
        };
        let Some(pos) = list.iter().position(|&f| f == forager) else {
            return false;
        };
        list.swap_remove(pos);
        if list.is_empty() {
            self.by_cell.remove(&cell);
        }
        true
    }

    /// Move `forager` between cells, keeping the index consistent.
    pub fn relocate(&mut self, forager: ForagerId, from: Cell, to: Cell) {
        if from == to {
            return;
        }
        self.vacate(forager, from);
        self.place(forager, to);
    }

    #[inline]
    pub fn is_free(&self, cell: Cell) -> bool {
        !self.by_cell.contains_key(&cell)
    }

    /// Foragers on `cell` (empty slice when free).
    pub fn at(&self, cell: Cell) -> &[ForagerId] {
        self.by_cell.get(&cell).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Foragers on any cell of `center`'s neighborhood other than `exclude`,
    /// in neighborhood order.
    pub fn within(
        &self,
        grid:    &Grid,
        center:  Cell,
        kind:    Neighborhood,
        radius:  i32,
        exclude: ForagerId,
    ) -> SpatialResult<Vec<(ForagerId, Cell)>> {
        let mut found = Vec::new();
        for cell in grid.neighborhood(center, kind, true, radius)? {
            for &f in self.at(cell) {
                if f != exclude {
                    found.push((f, cell));
                }
            }
        }
        Ok(found)
    }

    /// Number of distinct occupied cells.
    pub fn occupied_cells(&self) -> usize {
        self.by_cell.len()
    }
}
