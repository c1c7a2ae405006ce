use fg_core::FgError;
use fg_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("spatial query failed: {0}")]
    Spatial(#[from] SpatialError),

    #[error(transparent)]
    Core(#[from] FgError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
