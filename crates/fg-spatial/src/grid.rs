//! Discrete toroidal grid and its neighborhood queries.
//!
//! # Two kinds of query
//!
//! - [`Grid::neighborhood`] is a *filled* neighborhood: every cell whose
//!   offset lies inside the Moore square or von Neumann diamond of the given
//!   radius.  Foragers use it to enumerate candidate moves.
//! - [`Grid::ring`] is a *boundary-exact shell*: only cells whose wrapped
//!   offsets sit at exactly distance `d`.  The clustered food generator uses
//!   it to place a token at a given jump distance from an anchor.
//!
//! Both return cells in a fixed order (offset `dx` outer, `dy` inner) so
//! a seeded RNG picking from the result is reproducible.

use fg_core::{Cell, FgError, SimRng};

use crate::{CellSet, SpatialError, SpatialResult};

/// Neighborhood metric on the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Neighborhood {
    /// Chebyshev metric: the 8-connected square.
    #[default]
    Moore,
    /// Manhattan metric: the 4-connected diamond.
    VonNeumann,
}

impl Neighborhood {
    /// Distance of offset `(dx, dy)` under this metric.
    #[inline]
    pub fn norm(self, dx: i32, dy: i32) -> i32 {
        match self {
            Neighborhood::Moore      => dx.abs().max(dy.abs()),
            Neighborhood::VonNeumann => dx.abs() + dy.abs(),
        }
    }
}

/// A `width × height` grid with wraparound on both axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width:  i32,
    height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> SpatialResult<Self> {
        if width < 1 {
            return Err(FgError::config("grid_width", format!("must be >= 1, got {width}")).into());
        }
        if height < 1 {
            return Err(FgError::config("grid_height", format!("must be >= 1, got {height}")).into());
        }
        Ok(Self { width, height })
    }

    /// An `n × n` grid.
    pub fn square(n: i32) -> SpatialResult<Self> {
        Self::new(n, n)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Largest wrapped distance any cell can be from another under either
    /// metric. Radii beyond it add no cells.
    #[inline]
    pub fn reach(&self) -> i32 {
        self.width / 2 + self.height / 2
    }

    /// Length of the grid diagonal in cell units.
    pub fn diagonal(&self) -> f64 {
        ((self.width as f64).powi(2) + (self.height as f64).powi(2)).sqrt()
    }

    #[inline]
    pub fn wrap(&self, c: Cell) -> Cell {
        Cell::new(c.x.rem_euclid(self.width), c.y.rem_euclid(self.height))
    }

    /// Dense row-major index of the (wrapped) cell.
    #[inline]
    pub fn index(&self, c: Cell) -> usize {
        let c = self.wrap(c);
        c.y as usize * self.width as usize + c.x as usize
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn cell_at(&self, index: usize) -> Cell {
        let w = self.width as usize;
        Cell::new((index % w) as i32, (index / w) as i32)
    }

    /// Every cell, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cell_count()).map(|i| self.cell_at(i))
    }

    /// Shortest signed offset from `a` to `b` in cell units.
    #[inline]
    pub fn delta(&self, a: Cell, b: Cell) -> (i32, i32) {
        let a = self.wrap(a);
        let b = self.wrap(b);
        (wrap_axis(b.x - a.x, self.width), wrap_axis(b.y - a.y, self.height))
    }

    /// Distance between two cells under `kind`, respecting wraparound.
    #[inline]
    pub fn distance(&self, a: Cell, b: Cell, kind: Neighborhood) -> i32 {
        let (dx, dy) = self.delta(a, b);
        kind.norm(dx, dy)
    }

    pub fn random_cell(&self, rng: &mut SimRng) -> Cell {
        Cell::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }

    /// All cells within `radius` of `center`, wrapped and deduplicated.
    ///
    /// The centre is included only when `include_center` is set, even if a
    /// large radius would wrap another offset back onto it.
    pub fn neighborhood(
        &self,
        center:         Cell,
        kind:           Neighborhood,
        include_center: bool,
        radius:         i32,
    ) -> SpatialResult<Vec<Cell>> {
        if radius < 0 {
            return Err(SpatialError::NegativeRadius(radius as f64));
        }
        let center = self.wrap(center);
        let radius = radius.min(self.reach());
        let side = 2 * radius as usize + 1;
        let mut out = Vec::with_capacity(side * side);
        for dx in -radius..=radius {
            for dy in -radius..=radius {
                if kind.norm(dx, dy) > radius {
                    continue;
                }
                out.push(self.wrap(center.offset(dx, dy)));
            }
        }
        Ok(self.finish(out, center, include_center, radius))
    }

    /// Cells whose wrapped offset from `center` is exactly `distance` under
    /// `kind`: a shell, not a disc.
    ///
    /// A shell wider than the grid can hold comes back empty.
    pub fn ring(&self, center: Cell, distance: i32, kind: Neighborhood) -> SpatialResult<Vec<Cell>> {
        if distance < 0 {
            return Err(SpatialError::NegativeRadius(distance as f64));
        }
        let center = self.wrap(center);
        if distance == 0 {
            return Ok(vec![center]);
        }
        if distance > self.reach() {
            return Ok(Vec::new());
        }
        let mut out = Vec::new();
        for dx in -distance..=distance {
            for dy in -distance..=distance {
                if kind.norm(dx, dy) != distance {
                    continue;
                }
                let cell = self.wrap(center.offset(dx, dy));
                if self.distance(center, cell, kind) == distance {
                    out.push(cell);
                }
            }
        }
        Ok(self.finish(out, center, false, distance))
    }

    /// Cells of the Euclidean disc `dx² + dy² ≤ radius²` around `center`.
    pub fn disc(&self, center: Cell, radius: i32) -> SpatialResult<Vec<Cell>> {
        if radius < 0 {
            return Err(SpatialError::NegativeRadius(radius as f64));
        }
        let center = self.wrap(center);
        let radius = radius.min(self.reach());
        let r2 = radius * radius;
        let mut out = Vec::new();
        for dx in -radius..=radius {
            for dy in -radius..=radius {
                if dx * dx + dy * dy <= r2 {
                    out.push(self.wrap(center.offset(dx, dy)));
                }
            }
        }
        Ok(self.finish(out, center, true, radius))
    }

    /// Drop wrapped duplicates (only possible once the span exceeds the grid)
    /// and the centre when it was not requested.
    fn finish(&self, mut cells: Vec<Cell>, center: Cell, include_center: bool, radius: i32) -> Vec<Cell> {
        let span = 2 * radius + 1;
        if span > self.width || span > self.height {
            let mut seen = CellSet::default();
            cells.retain(|c| seen.insert(*c));
        }
        if !include_center {
            cells.retain(|c| *c != center);
        }
        cells
    }
}

#[inline]
fn wrap_axis(d: i32, size: i32) -> i32 {
    // Integer twin of `crate::wrap_delta`; `2d > size` avoids halving odd sizes.
    if 2 * d > size {
        d - size
    } else if 2 * d < -size {
        d + size
    } else {
        d
    }
}
