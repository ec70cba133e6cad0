use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReynoldsError {
    #[error("Invalid bearing parameter {name} = {value}: must be finite and >= 0")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Sparse index out of bounds: row={row}, col={col} for a {nrows}x{ncols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },

    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Singular system: no usable pivot for unknown {row} (|pivot| = {pivot:e})")]
    SingularSystem { row: usize, pivot: f64 },

    #[error("Non-finite linear system: {0}")]
    NonFiniteSystem(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReynoldsError {
    /// True for failures raised while validating parameters or building the grid.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            ReynoldsError::InvalidParameter { .. }
                | ReynoldsError::InvalidGrid(_)
                | ReynoldsError::ConfigError(_)
        )
    }

    /// True when the sparse factorization or solve could not be completed.
    pub fn is_solver_failure(&self) -> bool {
        matches!(
            self,
            ReynoldsError::SingularSystem { .. } | ReynoldsError::NonFiniteSystem(_)
        )
    }
}

pub type ReynoldsResult<T> = Result<T, ReynoldsError>;
