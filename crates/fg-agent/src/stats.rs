//! Per-forager foraging efficiency counters.

/// Running totals kept for each forager over a run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForagingStats {
    /// Activations so far.
    pub steps:    u64,
    /// Activations during which food was within sensing range.
    pub sensed:   u64,
    /// Food units eaten.
    pub consumed: u64,
}

impl ForagingStats {
    /// Fraction of steps with food sensed; `0.0` before the first step.
    pub fn sense_frequency(&self) -> f64 {
        if self.steps == 0 { 0.0 } else { self.sensed as f64 / self.steps as f64 }
    }

    pub fn record_step(&mut self, sensed: bool, consumed: u32) {
        self.steps += 1;
        self.sensed += u64::from(sensed);
        self.consumed += u64::from(consumed);
    }

    /// Element-wise sum, for population totals.
    pub fn merged(self, other: ForagingStats) -> ForagingStats {
        ForagingStats {
            steps:    self.steps + other.steps,
            sensed:   self.sensed + other.sensed,
            consumed: self.consumed + other.consumed,
        }
    }
}
