//! Spatial-subsystem error type.

use thiserror::Error;

use fg_core::FgError;

/// Errors produced by `fg-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("query radius must be >= 0, got {0}")]
    NegativeRadius(f64),

    #[error(transparent)]
    Core(#[from] FgError),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
