//! Parquet output backend (feature `parquet`).
//!
//! Creates three files in the configured output directory:
//! - `trajectories.parquet`
//! - `tick_summaries.parquet`
//! - `adjacency.parquet`

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{BooleanBuilder, Float64Builder, UInt32Builder, UInt64Builder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::OutputWriter;
use crate::{AdjacencyRow, OutputResult, TickSummaryRow, TrajectoryRow};

fn trajectory_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("step",            DataType::UInt64,  false),
        Field::new("agent_id",        DataType::UInt32,  false),
        Field::new("x",               DataType::Float64, false),
        Field::new("y",               DataType::Float64, false),
        Field::new("vx",              DataType::Float64, false),
        Field::new("vy",              DataType::Float64, false),
        Field::new("is_worm",         DataType::Boolean, false),
        Field::new("social",          DataType::Boolean, false),
        Field::new("strain_specific", DataType::Boolean, false),
        Field::new("attractive",      DataType::Boolean, false),
        Field::new("range",           DataType::Float64, false),
    ]))
}

fn summary_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("tick",          DataType::UInt64, false),
        Field::new("elapsed_secs",  DataType::UInt64, false),
        Field::new("activated",     DataType::UInt64, false),
        Field::new("moved",         DataType::UInt64, false),
        Field::new("signals_live",  DataType::UInt64, false),
        Field::new("emitted",       DataType::UInt64, false),
        Field::new("removed",       DataType::UInt64, false),
        Field::new("food_consumed", DataType::UInt64, false),
        Field::new("total_food",    DataType::UInt64, false),
    ]))
}

fn adjacency_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("step", DataType::UInt64, false),
        Field::new("from", DataType::UInt32, false),
        Field::new("to",   DataType::UInt32, false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

fn open(dir: &Path, name: &str, schema: &Arc<Schema>) -> OutputResult<ArrowWriter<File>> {
    let file = File::create(dir.join(name))?;
    Ok(ArrowWriter::try_new(file, Arc::clone(schema), Some(snappy_props()))?)
}

/// Writes simulation output to three Parquet files.
///
/// `finish()` **must** be called to write the Parquet file footer; files
/// written without calling `finish()` cannot be opened by Parquet readers.
pub struct ParquetWriter {
    trajectories: Option<ArrowWriter<File>>,
    summaries:    Option<ArrowWriter<File>>,
    adjacency:    Option<ArrowWriter<File>>,
    traj_schema:  Arc<Schema>,
    summ_schema:  Arc<Schema>,
    adj_schema:   Arc<Schema>,
}

impl ParquetWriter {
    /// Create the Parquet files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let traj_schema = trajectory_schema();
        let summ_schema = summary_schema();
        let adj_schema = adjacency_schema();

        Ok(Self {
            trajectories: Some(open(dir, "trajectories.parquet", &traj_schema)?),
            summaries:    Some(open(dir, "tick_summaries.parquet", &summ_schema)?),
            adjacency:    Some(open(dir, "adjacency.parquet", &adj_schema)?),
            traj_schema,
            summ_schema,
            adj_schema,
        })
    }
}

impl OutputWriter for ParquetWriter {
    fn write_trajectory(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.trajectories.as_mut() else {
            return Ok(());
        };

        let mut steps       = UInt64Builder::new();
        let mut agent_ids   = UInt32Builder::new();
        let mut xs          = Float64Builder::new();
        let mut ys          = Float64Builder::new();
        let mut vxs         = Float64Builder::new();
        let mut vys         = Float64Builder::new();
        let mut is_worms    = BooleanBuilder::new();
        let mut socials     = BooleanBuilder::new();
        let mut strains     = BooleanBuilder::new();
        let mut attractives = BooleanBuilder::new();
        let mut ranges      = Float64Builder::new();

        for row in rows {
            steps.append_value(row.step);
            agent_ids.append_value(row.agent_id);
            xs.append_value(row.x);
            ys.append_value(row.y);
            vxs.append_value(row.vx);
            vys.append_value(row.vy);
            is_worms.append_value(row.is_worm);
            socials.append_value(row.social);
            strains.append_value(row.strain_specific);
            attractives.append_value(row.attractive);
            ranges.append_value(row.range);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.traj_schema),
            vec![
                Arc::new(steps.finish()),
                Arc::new(agent_ids.finish()),
                Arc::new(xs.finish()),
                Arc::new(ys.finish()),
                Arc::new(vxs.finish()),
                Arc::new(vys.finish()),
                Arc::new(is_worms.finish()),
                Arc::new(socials.finish()),
                Arc::new(strains.finish()),
                Arc::new(attractives.finish()),
                Arc::new(ranges.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        let Some(writer) = self.summaries.as_mut() else {
            return Ok(());
        };

        let columns = [
            row.tick,
            row.elapsed_secs,
            row.activated,
            row.moved,
            row.signals_live,
            row.emitted,
            row.removed,
            row.food_consumed,
            row.total_food,
        ];
        let arrays = columns
            .iter()
            .map(|&v| {
                let mut b = UInt64Builder::new();
                b.append_value(v);
                Arc::new(b.finish()) as arrow::array::ArrayRef
            })
            .collect();

        let batch = RecordBatch::try_new(Arc::clone(&self.summ_schema), arrays)?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_adjacency(&mut self, rows: &[AdjacencyRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.adjacency.as_mut() else {
            return Ok(());
        };

        let mut steps = UInt64Builder::new();
        let mut froms = UInt32Builder::new();
        let mut tos   = UInt32Builder::new();
        for row in rows {
            steps.append_value(row.step);
            froms.append_value(row.from);
            tos.append_value(row.to);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.adj_schema),
            vec![Arc::new(steps.finish()), Arc::new(froms.finish()), Arc::new(tos.finish())],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        for w in [self.trajectories.take(), self.summaries.take(), self.adjacency.take()].into_iter().flatten() {
            w.close()?;
        }
        Ok(())
    }
}
