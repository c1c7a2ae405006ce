use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("matrix row {row} has {got} entries, expected {expected}")]
    NotSquare {
        row:      usize,
        expected: usize,
        got:      usize,
    },

    #[error("edge ({from}, {to}) is outside a {n} × {n} matrix")]
    EdgeOutOfRange {
        from: usize,
        to:   usize,
        n:    usize,
    },

    #[error("step {step} has {got} positions, expected {expected}")]
    RaggedFrames {
        step:     usize,
        expected: usize,
        got:      usize,
    },

    #[error("{param} must be a finite value > 0, got {value}")]
    InvalidScale {
        param: &'static str,
        value: f64,
    },

    #[error("a per-frame move of up to {max_step} cannot be told apart from a seam crossing on a {domain}-wide torus")]
    AmbiguousSeam {
        max_step: f64,
        domain:   f64,
    },
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
