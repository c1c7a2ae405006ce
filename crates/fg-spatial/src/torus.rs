//! Continuous square domain `[0, L) × [0, L)` with opposite edges identified.

use fg_core::{FgError, Point, SimRng};

use crate::{SpatialError, SpatialResult, wrap_delta};

/// A continuous toroidal domain of side `size`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Torus {
    size: f64,
}

impl Torus {
    pub fn new(size: f64) -> SpatialResult<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(FgError::config("domain_size", format!("must be a finite value > 0, got {size}")).into());
        }
        Ok(Self { size })
    }

    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Map any point back into `[0, L)²`.
    #[inline]
    pub fn wrap(&self, p: Point) -> Point {
        Point::new(self.wrap_axis(p.x), self.wrap_axis(p.y))
    }

    #[inline]
    fn wrap_axis(&self, v: f64) -> f64 {
        let w = v.rem_euclid(self.size);
        // rem_euclid of a tiny negative value rounds up to `size` itself.
        if w >= self.size { 0.0 } else { w }
    }

    /// Shortest signed displacement from `a` to `b`.
    ///
    /// Both components satisfy `|Δ| ≤ L/2`.
    #[inline]
    pub fn delta(&self, a: Point, b: Point) -> (f64, f64) {
        let a = self.wrap(a);
        let b = self.wrap(b);
        (wrap_delta(b.x - a.x, self.size), wrap_delta(b.y - a.y, self.size))
    }

    #[inline]
    pub fn distance_sq(&self, a: Point, b: Point) -> f64 {
        let (dx, dy) = self.delta(a, b);
        dx * dx + dy * dy
    }

    #[inline]
    pub fn distance(&self, a: Point, b: Point) -> f64 {
        self.distance_sq(a, b).sqrt()
    }

    /// The image of `p` nearest to `origin`.
    ///
    /// The result may lie outside `[0, L)²`; it is meant for averaging
    /// positions around `origin` without wraparound artefacts.
    #[inline]
    pub fn unwrap_near(&self, origin: Point, p: Point) -> Point {
        let (dx, dy) = self.delta(origin, p);
        Point::new(origin.x + dx, origin.y + dy)
    }

    /// Uniformly random point in the domain.
    pub fn random_point(&self, rng: &mut SimRng) -> Point {
        Point::new(rng.gen_range(0.0..self.size), rng.gen_range(0.0..self.size))
    }

    /// Handles of every item within `radius` of `point` that also passes
    /// `predicate`, in input order.
    ///
    /// A linear scan; populations are a few hundred at most.
    pub fn neighbors_within<T, I, F>(
        &self,
        point:     Point,
        radius:    f64,
        items:     I,
        mut predicate: F,
    ) -> SpatialResult<Vec<T>>
    where
        I: IntoIterator<Item = (T, Point)>,
        F: FnMut(&T) -> bool,
    {
        if radius.is_nan() || radius < 0.0 {
            return Err(SpatialError::NegativeRadius(radius));
        }
        let r2 = radius * radius;
        Ok(items
            .into_iter()
            .filter(|(item, pos)| self.distance_sq(point, *pos) <= r2 && predicate(item))
            .map(|(item, _)| item)
            .collect())
    }
}
