//! A single point source and the closed-form diffusion math.

use fg_core::{Point, SignalId};

use crate::{Polarity, SignalParams};

/// Concentration at squared distance `r2` from a source of age `t`.
///
/// Returns `f64::NEG_INFINITY` when `D·t ≤ 0` (nothing has diffused yet).
pub fn concentration(params: &SignalParams, r2: f64, t: u32) -> f64 {
    let dt = params.diffusion * f64::from(t);
    if dt <= 0.0 {
        return f64::NEG_INFINITY;
    }
    let spread = (4.0 * std::f64::consts::PI * dt).sqrt();
    params.emission * (-r2 / (4.0 * dt)).exp() / spread - params.decay * f64::from(t)
}

/// Squared active radius `r(t)²` of a source of age `t`, or `None` when the
/// source is at or below threshold everywhere.
pub fn active_radius_sq(params: &SignalParams, t: u32) -> Option<f64> {
    let dt = params.diffusion * f64::from(t);
    if dt <= 0.0 {
        return None;
    }
    let spread = (4.0 * std::f64::consts::PI * dt).sqrt();
    let arg = (params.threshold + params.decay * f64::from(t)) * spread / params.emission;
    if !arg.is_finite() || arg <= 0.0 {
        return None;
    }
    let ln = arg.ln();
    // ln ≥ 0 ⇔ C(0, t) ≤ θ.
    if ln >= 0.0 {
        return None;
    }
    Some(-4.0 * dt * ln)
}

/// One transient signal deposited by a forager.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignalSource {
    pub id:        SignalId,
    pub position:  Point,
    pub polarity:  Polarity,
    pub params:    SignalParams,
    /// Age in ticks; 1 at emission.
    pub age:       u32,
    /// Cached `r(age)²`.  `None` once below threshold.
    radius_sq:     Option<f64>,
}

impl SignalSource {
    pub(crate) fn new(id: SignalId, position: Point, polarity: Polarity, params: SignalParams) -> Self {
        let radius_sq = active_radius_sq(&params, 1);
        Self { id, position, polarity, params, age: 1, radius_sq }
    }

    /// `r(t)²`, or `None` if the source can no longer be perceived.
    #[inline]
    pub fn radius_sq(&self) -> Option<f64> {
        self.radius_sq
    }

    #[inline]
    pub fn active_radius(&self) -> f64 {
        self.radius_sq.map_or(0.0, f64::sqrt)
    }

    /// Peak concentration `C(0, t)`.
    #[inline]
    pub fn peak(&self) -> f64 {
        concentration(&self.params, 0.0, self.age)
    }

    #[inline]
    pub fn concentration_at(&self, r2: f64) -> f64 {
        concentration(&self.params, r2, self.age)
    }

    /// `true` while the peak is still at least `θ`.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.radius_sq.is_some()
    }

    /// A point at squared distance `r2` perceives this source.
    #[inline]
    pub fn covers(&self, r2: f64) -> bool {
        self.radius_sq.is_some_and(|rt2| r2 < rt2)
    }

    /// Age by one tick and refresh the radius.  Returns `is_alive()`.
    pub fn age_one_tick(&mut self) -> bool {
        self.age = self.age.saturating_add(1);
        self.radius_sq = active_radius_sq(&self.params, self.age);
        self.is_alive()
    }
}
