//! Configuration for the Gaussian-elimination solver.
//!
//! [`SolverCfg`] — fields
//! - `pivot`     : row selection rule, [`PivotStrategy`]
//! - `pivot_tol` : relative threshold below which a pivot counts as zero
//!
//! The threshold is scaled by the largest coefficient the pivot's row held
//! before elimination, so a pivot left over from cancellation is rejected.
//! `pivot_tol = 0.0` only rejects exact zeros.

use crate::linalg::errors::SolverError;

/// A few dozen ulps: rounding noise, not conditioning.
pub const DEFAULT_PIVOT_TOL: f64 = 64.0 * f64::EPSILON;


/// Pivot row selection for column `i`, scanning rows `i..`.
/// - [`PivotStrategy::RawMax`] largest signed value. Reproduces the
///   historical output files; a column dominated by negative entries
///   is pivoted on its least negative entry.
/// - [`PivotStrategy::AbsMax`] largest magnitude (textbook partial pivoting)
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum PivotStrategy {
    #[default]
    RawMax,
    AbsMax,
}

impl PivotStrategy {
    pub fn strategy_name(self) -> &'static str {
        match self {
            PivotStrategy::RawMax => "raw-max",
            PivotStrategy::AbsMax => "abs-max",
        }
    }
}


#[derive(Debug, Copy, Clone)]
pub struct SolverCfg {
    pivot: PivotStrategy,
    pivot_tol: f64,
}

impl SolverCfg {
    pub fn new() -> Self {
        Self {
            pivot: PivotStrategy::default(),
            pivot_tol: DEFAULT_PIVOT_TOL,
        }
    }

    // getters
    pub fn pivot(&self) -> PivotStrategy { self.pivot }
    pub fn pivot_tol(&self) -> f64 { self.pivot_tol }

    // setters
    pub fn with_pivot(mut self, v: PivotStrategy) -> Self { self.pivot = v; self }

    pub fn set_pivot_tol(mut self, v: f64) -> Result<Self, SolverError> {
        if !v.is_finite() || v < 0.0 {
            return Err(SolverError::InvalidPivotTol { got: v });
        }
        self.pivot_tol = v;
        Ok(self)
    }
}

impl Default for SolverCfg {
    fn default() -> Self { Self::new() }
}
