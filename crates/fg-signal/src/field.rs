//! `SignalField`: every live source in a continuous toroidal domain.
//!
//! The field owns the sources; foragers only see them through
//! [`SignalField::sample`].  Sources are keyed by a monotonically increasing
//! [`SignalId`] in a `BTreeMap`, so iteration order (and therefore every
//! floating-point sum over sources) is reproducible.

use std::collections::BTreeMap;

use fg_core::{Point, SignalId};
use fg_spatial::Torus;
use tracing::trace;

use crate::{Polarity, SignalParams, SignalSource};

/// One source as perceived from a query point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SignalSample {
    pub id:            SignalId,
    pub polarity:      Polarity,
    /// Source position unwound to the image nearest the query point.
    pub position:      Point,
    /// Squared toroidal distance to the query point.
    pub r2:            f64,
    pub concentration: f64,
}

pub struct SignalField {
    torus:   Torus,
    sources: BTreeMap<SignalId, SignalSource>,
    next_id: SignalId,
}

impl SignalField {
    pub fn new(torus: Torus) -> Self {
        Self { torus, sources: BTreeMap::new(), next_id: SignalId(0) }
    }

    #[inline]
    pub fn torus(&self) -> &Torus {
        &self.torus
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn get(&self, id: SignalId) -> Option<&SignalSource> {
        self.sources.get(&id)
    }

    /// Live sources in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &SignalSource> + '_ {
        self.sources.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = SignalId> + '_ {
        self.sources.keys().copied()
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Deposit a new source at age 1.
    ///
    /// Returns `None` (and stores nothing) when the parameters put the source
    /// below threshold from the start.
    pub fn emit(&mut self, position: Point, polarity: Polarity, params: SignalParams) -> Option<SignalId> {
        let id = self.next_id;
        self.next_id = id.next();
        let source = SignalSource::new(id, self.torus.wrap(position), polarity, params);
        if !source.is_alive() {
            trace!(signal = %id, "emitted below threshold; discarded");
            return None;
        }
        self.sources.insert(id, source);
        Some(id)
    }

    /// Age one source by a tick, removing it once its peak drops below
    /// threshold.  Returns `true` if it is still alive; unknown ids are `false`.
    pub fn step_source(&mut self, id: SignalId) -> bool {
        let Some(source) = self.sources.get_mut(&id) else {
            return false;
        };
        if source.age_one_tick() {
            return true;
        }
        trace!(signal = %id, age = source.age, "signal below threshold; removed");
        self.sources.remove(&id);
        false
    }

    /// Age every source.  Returns the number removed.
    pub fn step_all(&mut self) -> usize {
        let before = self.sources.len();
        self.sources.retain(|id, source| {
            let alive = source.age_one_tick();
            if !alive {
                trace!(signal = %id, age = source.age, "signal below threshold; removed");
            }
            alive
        });
        before - self.sources.len()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Every source whose active radius covers `position`.
    pub fn sample(&self, position: Point) -> Vec<SignalSample> {
        self.sample_within(position, f64::INFINITY)
    }

    /// As [`sample`](Self::sample), further limited to sources no more than
    /// `max_range` away.
    pub fn sample_within(&self, position: Point, max_range: f64) -> Vec<SignalSample> {
        let max_r2 = max_range * max_range;
        self.sources
            .values()
            .filter_map(|s| {
                let r2 = self.torus.distance_sq(position, s.position);
                if r2 > max_r2 || !s.covers(r2) {
                    return None;
                }
                Some(SignalSample {
                    id:            s.id,
                    polarity:      s.polarity,
                    position:      self.torus.unwrap_near(position, s.position),
                    r2,
                    concentration: s.concentration_at(r2),
                })
            })
            .collect()
    }

    /// Concentration-weighted centroid of the `polarity` sources among
    /// `samples`, in the unwound frame of the query point.
    ///
    /// The result may lie outside the domain; subtract the query point to get
    /// a direction.  `None` when no sample of that polarity carries weight.
    pub fn weighted_centroid(samples: &[SignalSample], polarity: Polarity) -> Option<Point> {
        let (mut wx, mut wy, mut total) = (0.0, 0.0, 0.0);
        for s in samples.iter().filter(|s| s.polarity == polarity) {
            if s.concentration <= 0.0 {
                continue;
            }
            wx += s.concentration * s.position.x;
            wy += s.concentration * s.position.y;
            total += s.concentration;
        }
        (total > 0.0).then(|| Point::new(wx / total, wy / total))
    }

    /// Shorthand for `weighted_centroid(&self.sample(position), polarity)`.
    pub fn centroid_at(&self, position: Point, polarity: Polarity) -> Option<Point> {
        Self::weighted_centroid(&self.sample(position), polarity)
    }
}
