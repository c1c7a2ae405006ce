//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `trajectories.csv`
//! - `tick_summaries.csv`
//! - `adjacency.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AdjacencyRow, OutputResult, TickSummaryRow, TrajectoryRow};

pub(crate) const TRAJECTORY_HEADER: [&str; 11] = [
    "step", "agent_id", "x", "y", "vx", "vy", "is_worm", "social", "strain_specific", "attractive", "range",
];
pub(crate) const SUMMARY_HEADER: [&str; 9] = [
    "tick", "elapsed_secs", "activated", "moved", "signals_live", "emitted", "removed", "food_consumed", "total_food",
];
pub(crate) const ADJACENCY_HEADER: [&str; 3] = ["step", "from", "to"];

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    trajectories: Writer<File>,
    summaries:    Writer<File>,
    adjacency:    Writer<File>,
    finished:     bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trajectories = Writer::from_path(dir.join("trajectories.csv"))?;
        trajectories.write_record(TRAJECTORY_HEADER)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        let mut adjacency = Writer::from_path(dir.join("adjacency.csv"))?;
        adjacency.write_record(ADJACENCY_HEADER)?;

        Ok(Self {
            trajectories,
            summaries,
            adjacency,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_trajectory(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()> {
        for row in rows {
            self.trajectories.write_record(&[
                row.step.to_string(),
                row.agent_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.vx.to_string(),
                row.vy.to_string(),
                (row.is_worm as u8).to_string(),
                (row.social as u8).to_string(),
                (row.strain_specific as u8).to_string(),
                (row.attractive as u8).to_string(),
                row.range.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.elapsed_secs.to_string(),
            row.activated.to_string(),
            row.moved.to_string(),
            row.signals_live.to_string(),
            row.emitted.to_string(),
            row.removed.to_string(),
            row.food_consumed.to_string(),
            row.total_food.to_string(),
        ])?;
        Ok(())
    }

    fn write_adjacency(&mut self, rows: &[AdjacencyRow]) -> OutputResult<()> {
        for row in rows {
            self.adjacency.write_record(&[row.step.to_string(), row.from.to_string(), row.to.to_string()])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trajectories.flush()?;
        self.summaries.flush()?;
        self.adjacency.flush()?;
        Ok(())
    }
}
