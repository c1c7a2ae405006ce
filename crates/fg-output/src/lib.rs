//! `fg-output`: simulation output writers for the forager workspace.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                                                      |
//! |-----------|---------|--------------------------------------------------------------------|
//! | *(none)*  | CSV     | `trajectories.csv`, `tick_summaries.csv`, `adjacency.csv`          |
//! | `parquet` | Parquet | `trajectories.parquet`, `tick_summaries.parquet`, `adjacency.parquet` |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `fg_sim::SimObserver`.  Adjacency rows are the upper
//! triangle (diagonal included) of each snapshot's forager
//! [`ProximityMatrix`](fg_analysis::ProximityMatrix);
//! [`read_adjacency_csv`] turns the CSV file back into matrices.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fg_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, sim.config()).with_adjacency(20.0);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod reader;
pub mod row;
pub mod writer;

#[cfg(feature = "parquet")]
pub mod parquet;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use reader::read_adjacency_csv;
pub use row::{AdjacencyRow, TickSummaryRow, TrajectoryRow};
pub use writer::OutputWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;
