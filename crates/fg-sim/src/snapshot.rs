//! Plain-data views of simulation state handed to observers.

use fg_core::Tick;

/// One row of the per-step agent table.
///
/// Foragers carry ids `0..n`; signal sources carry `n + signal_id` so ids
/// never collide within a step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentSnapshot {
    pub id:              u32,
    pub x:               f64,
    pub y:               f64,
    pub vx:              f64,
    pub vy:              f64,
    /// `true` for foragers, `false` for signal sources.
    pub is_worm:         bool,
    pub social:          bool,
    pub strain_specific: bool,
    /// Signal polarity; always `false` for foragers.
    pub attractive:      bool,
    /// Active radius of a signal, sensing range of a forager.
    pub range:           f64,
}

impl AgentSnapshot {
    #[inline]
    pub fn is_signal(&self) -> bool {
        !self.is_worm
    }
}

/// Aggregate numbers for one completed tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    pub tick:          Tick,
    /// Entities that took a turn this tick.
    pub activated:     usize,
    /// Foragers that changed position.
    pub moved:         usize,
    pub signals_live:  usize,
    pub emitted:       usize,
    pub removed:       usize,
    pub food_consumed: u64,
    pub total_food:    u64,
}
