//! Signal polarity and the physical constants of one emission.

use fg_core::{FgError, FgResult, ensure_non_negative};

/// Whether a signal pulls foragers in or pushes them away.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Polarity {
    Attractive,
    Repulsive,
}

impl Polarity {
    #[inline]
    pub fn is_attractive(self) -> bool {
        matches!(self, Polarity::Attractive)
    }
}

/// Constants shared by every source emitted with these parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SignalParams {
    /// Emitted quantity `Q`.
    pub emission:  f64,
    /// Diffusion coefficient `D` (area per tick).
    pub diffusion: f64,
    /// Linear decay per tick of age.
    pub decay:     f64,
    /// Perception threshold `θ`.
    pub threshold: f64,
}

impl Default for SignalParams {
    /// `Q = 100`, `D = 1`, `decay = 0.01`, `θ = 0.01`: a source lives for
    /// roughly 200 ticks and peaks at a radius of about 20 domain units.
    fn default() -> Self {
        Self {
            emission:  100.0,
            diffusion: 1.0,
            decay:     0.01,
            threshold: 0.01,
        }
    }
}

impl SignalParams {
    pub fn validate(&self) -> FgResult<()> {
        ensure_non_negative("signal.diffusion", self.diffusion)?;
        ensure_non_negative("signal.decay", self.decay)?;
        ensure_non_negative("signal.threshold", self.threshold)?;
        if !self.emission.is_finite() || self.emission <= 0.0 {
            return Err(FgError::config(
                "signal.emission",
                format!("must be a finite value > 0, got {}", self.emission),
            ));
        }
        Ok(())
    }
}
