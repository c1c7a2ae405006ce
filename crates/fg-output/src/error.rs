//! Error types for fg-output.

use thiserror::Error;

/// Errors that can occur when writing or reading simulation output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("analysis error: {0}")]
    Analysis(#[from] fg_analysis::AnalysisError),

    #[error("line {line}: bad {column} value {value:?}")]
    Malformed {
        line:   u64,
        column: &'static str,
        value:  String,
    },

    #[cfg(feature = "parquet")]
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[cfg(feature = "parquet")]
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
