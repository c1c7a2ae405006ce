//! Keeps forager positions in memory alongside the file output, for the
//! end-of-run cluster and displacement summaries.

use fg_analysis::ProximityMatrix;
use fg_core::{Point, Tick};
use fg_output::{OutputWriter, SimOutputObserver};
use fg_sim::{AgentSnapshot, SimObserver, TickSummary};

pub struct FrameRecorder<W: OutputWriter> {
    pub inner:    SimOutputObserver<W>,
    pub frames:   Vec<Vec<Point>>,
    pub matrices: Vec<ProximityMatrix>,
    interval:     f64,
}

impl<W: OutputWriter> FrameRecorder<W> {
    pub fn new(inner: SimOutputObserver<W>, interval: f64) -> Self {
        Self { inner, frames: Vec::new(), matrices: Vec::new(), interval }
    }
}

impl<W: OutputWriter> SimObserver for FrameRecorder<W> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.inner.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        self.inner.on_tick_end(tick, summary);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &[AgentSnapshot]) {
        let positions: Vec<Point> = agents
            .iter()
            .filter(|a| a.is_worm)
            .map(|a| Point::new(a.x, a.y))
            .collect();
        self.matrices.push(ProximityMatrix::from_positions(&positions, self.interval));
        self.frames.push(positions);
        self.inner.on_snapshot(tick, agents);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}
