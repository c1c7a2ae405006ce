//! Workspace error type.
//!
//! Sub-crates define their own error enums where they have failure modes of
//! their own (`SpatialError`, `SimError`, `OutputError`) and convert
//! `FgError` via `From`.  Configuration problems are always reported through
//! [`FgError::Config`] so the message names the offending parameter.

use thiserror::Error;

use crate::ForagerId;

/// The top-level error type for `fg-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FgError {
    #[error("invalid configuration `{param}`: {reason}")]
    Config {
        param:  &'static str,
        reason: String,
    },

    #[error("forager {0} not found")]
    ForagerNotFound(ForagerId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FgError {
    /// Build a [`FgError::Config`] for `param`.
    pub fn config(param: &'static str, reason: impl Into<String>) -> Self {
        FgError::Config { param, reason: reason.into() }
    }

    /// The parameter named by a configuration error, if this is one.
    pub fn param(&self) -> Option<&'static str> {
        match self {
            FgError::Config { param, .. } => Some(param),
            _ => None,
        }
    }
}

/// Shorthand result type for all `fg-*` crates.
pub type FgResult<T> = Result<T, FgError>;

/// Reject negative or non-finite values of a rate/radius style parameter.
pub fn ensure_non_negative(param: &'static str, value: f64) -> FgResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(FgError::config(param, format!("must be a finite value >= 0, got {value}")));
    }
    Ok(())
}

/// Reject probabilities outside `[0, 1]`.
pub fn ensure_probability(param: &'static str, value: f64) -> FgResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(FgError::config(param, format!("must lie in [0, 1], got {value}")));
    }
    Ok(())
}
