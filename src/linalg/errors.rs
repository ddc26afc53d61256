//! Linear-system error types.
//!
//! ┌ [`SolverError::SingularSystem`] : zero, near-zero or non-finite pivot
//! └ [`SolverError::InvalidPivotTol`] : invalid solver configuration
//!
//! Shape mismatches (e.g. multiplying a 2×3 by a 2×3) are contract
//! violations and panic instead of returning an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("singular system: pivot {pivot} in column {col} is zero or below tolerance")]
    SingularSystem { col: usize, pivot: f64 },

    #[error("invalid pivot_tol {got}: must be finite and >= 0")]
    InvalidPivotTol { got: f64 },
}
