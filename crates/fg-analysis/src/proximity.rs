//! Pairwise proximity between foragers at one step.

use fg_core::Point;

use crate::{AnalysisError, AnalysisResult};

/// Distance under which two foragers count as adjacent.
pub const DEFAULT_INTERVAL: f64 = 20.0;

/// Dense, symmetric `n × n` edge weights, stored row-major.
///
/// Threshold matrices hold 0 or 1; weights read back from disk may carry
/// anything, and [`find_clusters`](crate::find_clusters) only compares them
/// against its own threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct ProximityMatrix {
    n:       usize,
    weights: Vec<f64>,
}

impl ProximityMatrix {
    /// All-zero matrix (no edges, not even self-loops).
    pub fn empty(n: usize) -> Self {
        Self { n, weights: vec![0.0; n * n] }
    }

    /// Ones on the diagonal only: every forager alone.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::empty(n);
        for i in 0..n {
            m.weights[i * n + i] = 1.0;
        }
        m
    }

    /// Ones everywhere: one group.
    pub fn full(n: usize) -> Self {
        Self { n, weights: vec![1.0; n * n] }
    }

    /// `1` where two positions are within `interval` of each other
    /// (inclusive), `0` otherwise.  The diagonal is always `1`.
    pub fn from_positions(positions: &[Point], interval: f64) -> Self {
        let n = positions.len();
        let limit = interval * interval;
        let mut m = Self::empty(n);
        for i in 0..n {
            m.weights[i * n + i] = 1.0;
            for j in (i + 1)..n {
                let (dx, dy) = (positions[i].x - positions[j].x, positions[i].y - positions[j].y);
                if dx * dx + dy * dy <= limit {
                    m.set(i, j, 1.0);
                }
            }
        }
        m
    }

    /// Build from nested rows; every row must have `rows.len()` entries.
    pub fn from_rows(rows: &[Vec<f64>]) -> AnalysisResult<Self> {
        let n = rows.len();
        let mut weights = Vec::with_capacity(n * n);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != n {
                return Err(AnalysisError::NotSquare { row, expected: n, got: values.len() });
            }
            weights.extend_from_slice(values);
        }
        Ok(Self { n, weights })
    }

    /// Build from an undirected edge list over `n` nodes.
    pub fn from_edges(n: usize, edges: impl IntoIterator<Item = (usize, usize, f64)>) -> AnalysisResult<Self> {
        let mut m = Self::empty(n);
        for (from, to, weight) in edges {
            if from >= n || to >= n {
                return Err(AnalysisError::EdgeOutOfRange { from, to, n });
            }
            m.set(from, to, weight);
        }
        Ok(m)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.weights[i * self.n + j]
    }

    /// Set both `(i, j)` and `(j, i)`.
    pub fn set(&mut self, i: usize, j: usize, weight: f64) {
        self.weights[i * self.n + j] = weight;
        self.weights[j * self.n + i] = weight;
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.weights[i * self.n..(i + 1) * self.n]
    }

    /// Non-zero entries of the upper triangle, diagonal included.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.n).flat_map(move |i| {
            (i..self.n).filter_map(move |j| {
                let w = self.get(i, j);
                (w != 0.0).then_some((i, j, w))
            })
        })
    }
}
