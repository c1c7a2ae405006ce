//! Plain data row types written by output backends.

use fg_sim::AgentSnapshot;

/// One agent (forager or signal source) at one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryRow {
    pub step:            u64,
    pub agent_id:        u32,
    pub x:               f64,
    pub y:               f64,
    pub vx:              f64,
    pub vy:              f64,
    pub is_worm:         bool,
    pub social:          bool,
    pub strain_specific: bool,
    pub attractive:      bool,
    pub range:           f64,
}

impl TrajectoryRow {
    pub fn new(step: u64, agent: &AgentSnapshot) -> Self {
        Self {
            step,
            agent_id:        agent.id,
            x:               agent.x,
            y:               agent.y,
            vx:              agent.vx,
            vy:              agent.vy,
            is_worm:         agent.is_worm,
            social:          agent.social,
            strain_specific: agent.strain_specific,
            attractive:      agent.attractive,
            range:           agent.range,
        }
    }
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:          u64,
    /// Simulated seconds at the start of the tick.
    pub elapsed_secs:  u64,
    pub activated:     u64,
    pub moved:         u64,
    pub signals_live:  u64,
    pub emitted:       u64,
    pub removed:       u64,
    pub food_consumed: u64,
    pub total_food:    u64,
}

/// One undirected edge of a step's proximity matrix (`from <= to`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjacencyRow {
    pub step: u64,
    pub from: u32,
    pub to:   u32,
}
