//! Coordinate types for the two kinds of space.
//!
//! `Point` is a continuous position in `f64`; the diffusion formulas in
//! `fg-signal` lose too much precision in `f32` once sources age past a few
//! hundred ticks.  `Cell` is a discrete grid coordinate.  Neither type knows
//! about wraparound; that is the job of `fg-spatial`.

use std::fmt;

/// A position in continuous 2-D space.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point displaced by `step` along `heading` (radians).
    #[inline]
    pub fn advanced(self, heading: f64, step: f64) -> Point {
        Point::new(self.x + step * heading.cos(), self.y + step * heading.sin())
    }

    /// Plain Euclidean distance, ignoring any wraparound.
    #[inline]
    pub fn euclidean(self, other: Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// A cell on a discrete grid.
///
/// Signed so that neighborhood offsets can be added before wrapping.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Cell {
        Cell::new(self.x + dx, self.y + dy)
    }

    /// Cell centre as a continuous point (used for snapshots and adjacency).
    #[inline]
    pub fn to_point(self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}
