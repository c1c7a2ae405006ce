//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use fg_analysis::ProximityMatrix;
use fg_core::{Point, SimConfig, Tick};
use fg_sim::{AgentSnapshot, SimObserver, TickSummary};

use crate::row::{AdjacencyRow, TickSummaryRow, TrajectoryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes trajectories, tick summaries and, when
/// enabled, forager adjacency to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:             W,
    tick_duration_secs: u32,
    adjacency_interval: Option<f64>,
    last_error:         Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for simulated
    /// time.  Adjacency is off until [`with_adjacency`](Self::with_adjacency).
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            tick_duration_secs: config.tick_duration_secs,
            adjacency_interval: None,
            last_error:         None,
        }
    }

    /// Also record which foragers lie within `interval` of each other at
    /// every snapshot.
    pub fn with_adjacency(mut self, interval: f64) -> Self {
        self.adjacency_interval = Some(interval);
        self
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn write_adjacency(&mut self, step: u64, agents: &[AgentSnapshot], interval: f64) -> OutputResult<()> {
        let (ids, positions): (Vec<u32>, Vec<Point>) = agents
            .iter()
            .filter(|a| a.is_worm)
            .map(|a| (a.id, Point::new(a.x, a.y)))
            .unzip();
        let matrix = ProximityMatrix::from_positions(&positions, interval);
        let rows: Vec<AdjacencyRow> = matrix
            .edges()
            .map(|(i, j, _)| AdjacencyRow { step, from: ids[i], to: ids[j] })
            .collect();
        self.writer.write_adjacency(&rows)
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        let row = TickSummaryRow {
            tick:          tick.0,
            elapsed_secs:  tick.0 * u64::from(self.tick_duration_secs),
            activated:     summary.activated as u64,
            moved:         summary.moved as u64,
            signals_live:  summary.signals_live as u64,
            emitted:       summary.emitted as u64,
            removed:       summary.removed as u64,
            food_consumed: summary.food_consumed,
            total_food:    summary.total_food,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &[AgentSnapshot]) {
        if agents.is_empty() {
            return;
        }
        let rows: Vec<TrajectoryRow> = agents.iter().map(|a| TrajectoryRow::new(tick.0, a)).collect();
        let result = self.writer.write_trajectory(&rows);
        self.store_err(result);

        if let Some(interval) = self.adjacency_interval {
            let result = self.write_adjacency(tick.0, agents, interval);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
