//! `ForagerStore<P>`: SoA arrays for every forager in one simulation.

use fg_core::{FgError, FgResult, ForagerId};

use crate::{ForagerProfile, ForagingStats};

/// Structure-of-Arrays storage for all forager state.
///
/// Every `Vec` field has exactly `count` elements and `ForagerId` is the
/// index into all of them:
///
/// ```ignore
/// let here = store.position[forager.index()];
/// ```
///
/// Position writes belong to the owning simulation, which keeps its spatial
/// index in step with `position`.
pub struct ForagerStore<P> {
    /// Number of foragers.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Kinematic state ───────────────────────────────────────────────────
    /// Current position (`Cell` or `Point`).
    pub position: Vec<P>,

    /// Heading in radians, `[-π, π)`.
    pub heading: Vec<f64>,

    /// Displacement of the last step `(vx, vy)`.
    pub velocity: Vec<(f64, f64)>,

    // ── Static configuration ──────────────────────────────────────────────
    pub profile: Vec<ForagerProfile>,

    // ── Bookkeeping ───────────────────────────────────────────────────────
    pub stats: Vec<ForagingStats>,
}

impl<P: Copy> ForagerStore<P> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `ForagerId`s in ascending index order.
    pub fn ids(&self) -> impl Iterator<Item = ForagerId> + '_ {
        (0..self.count as u32).map(ForagerId)
    }

    /// Fail with [`FgError::ForagerNotFound`] for an out-of-range id.
    pub fn check(&self, forager: ForagerId) -> FgResult<()> {
        if forager.index() < self.count {
            Ok(())
        } else {
            Err(FgError::ForagerNotFound(forager))
        }
    }

    #[inline]
    pub fn position_of(&self, forager: ForagerId) -> P {
        self.position[forager.index()]
    }

    #[inline]
    pub fn profile_of(&self, forager: ForagerId) -> &ForagerProfile {
        &self.profile[forager.index()]
    }

    /// `(id, position)` pairs, for neighbor scans.
    pub fn positions(&self) -> impl Iterator<Item = (ForagerId, P)> + '_ {
        self.position.iter().enumerate().map(|(i, &p)| (ForagerId(i as u32), p))
    }

    /// Population-wide foraging totals.
    pub fn total_stats(&self) -> ForagingStats {
        self.stats.iter().copied().fold(ForagingStats::default(), ForagingStats::merged)
    }
}
