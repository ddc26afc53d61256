use thiserror::Error;

use crate::linalg::errors::SolverError;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("insufficient points: got {got}, need at least {need}")]
    InsufficientPoints { got: usize, need: usize },

    #[error("zero-width segment {idx}: x[{idx}] == x[{idx}+1] == {x}")]
    ZeroWidthSegment { idx: usize, x: f64 },

    #[error("x-values must be strictly increasing")]
    NonIncreasingX,

    #[error("evaluation point {got} out of bounds in ({x_min}, {x_max})")]
    OutOfBounds { got: f64, x_min: f64, x_max: f64 },

    #[error("invalid x_tol {got} must be finite and > 0")]
    InvalidXTol { got: f64 },

    #[error(transparent)]
    Solver(#[from] SolverError),
}
