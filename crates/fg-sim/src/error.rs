use fg_behavior::BehaviorError;
use fg_core::{Cell, FgError, ForagerId};
use fg_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] FgError),

    #[error("spatial error: {0}")]
    Spatial(#[from] SpatialError),

    #[error("behavior error: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("{foragers} foragers do not fit on a grid of {cells} cells")]
    OverCapacity {
        foragers: usize,
        cells:    usize,
    },

    #[error("{forager} starts on {cell}, which is already taken")]
    CellTaken {
        forager: ForagerId,
        cell:    Cell,
    },
}

pub type SimResult<T> = Result<T, SimError>;
