//! Reading recorded adjacency back for analysis.

use std::path::Path;
use std::str::FromStr;

use csv::StringRecord;
use fg_analysis::ProximityMatrix;
use tracing::debug;

use crate::{OutputError, OutputResult};

/// Rebuild one [`ProximityMatrix`] per recorded step from an
/// `adjacency.csv` written for `n` foragers.
///
/// Steps come back in file order, paired with their step number.  Edge
/// weights are 1.
pub fn read_adjacency_csv(path: &Path, n: usize) -> OutputResult<Vec<(u64, ProximityMatrix)>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut steps: Vec<(u64, ProximityMatrix)> = Vec::new();

    for record in reader.records() {
        let record = record?;
        let step: u64 = field(&record, 0, "step")?;
        let from: usize = field(&record, 1, "from")?;
        let to: usize = field(&record, 2, "to")?;
        if from >= n || to >= n {
            return Err(fg_analysis::AnalysisError::EdgeOutOfRange { from, to, n }.into());
        }

        if steps.last().is_none_or(|(s, _)| *s != step) {
            steps.push((step, ProximityMatrix::empty(n)));
        }
        if let Some((_, matrix)) = steps.last_mut() {
            matrix.set(from, to, 1.0);
        }
    }
    debug!(path = %path.display(), steps = steps.len(), "adjacency read");
    Ok(steps)
}

fn field<T: FromStr>(record: &StringRecord, index: usize, column: &'static str) -> OutputResult<T> {
    let raw = record.get(index).unwrap_or_default();
    raw.parse().map_err(|_| OutputError::Malformed {
        line:   record.position().map_or(0, |p| p.line()),
        column,
        value:  raw.to_owned(),
    })
}
