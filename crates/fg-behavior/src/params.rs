//! Constants of the continuous model shared by the whole population.

use fg_core::{FgResult, ensure_non_negative, ensure_probability};
use fg_signal::SignalParams;

/// Speed and emission settings for continuous-domain foragers.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwarmParams {
    /// Distance covered per tick.
    pub speed:            f64,
    /// Chance of depositing a signal on each activation.
    pub emit_probability: f64,
    /// Chance that a deposited signal is attractive rather than repulsive.
    pub attractive_bias:  f64,
    /// Constants of every deposited source.
    pub signal:           SignalParams,
}

impl Default for SwarmParams {
    fn default() -> Self {
        Self {
            speed:            5.0,
            emit_probability: 0.5,
            attractive_bias:  0.5,
            signal:           SignalParams::default(),
        }
    }
}

impl SwarmParams {
    pub fn validate(&self) -> FgResult<()> {
        ensure_non_negative("speed", self.speed)?;
        ensure_probability("emit_probability", self.emit_probability)?;
        ensure_probability("attractive_bias", self.attractive_bias)?;
        self.signal.validate()
    }
}
