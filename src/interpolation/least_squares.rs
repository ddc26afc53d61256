//! Global Linear Least Squares
//!
//! Fits one line `c0 + c1*x` through all samples by solving the normal
//! equations `XᵗX c = Xᵗy` with the design matrix
//!
//! ```text
//!     | 1  x[0]   |
//! X = | 1  x[1]   |
//!     | ...       |
//!     | 1  x[n-1] |
//! ```


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::piecewise::PiecewiseFunction;
use crate::linalg::{solve, Matrix, SolverCfg};


/// Least-squares configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]; spacing is not checked, repeated x-values
///   are reported by the solver instead
/// - `solver` : [`SolverCfg`]
#[derive(Debug, Clone, Copy)]
pub struct LeastSquaresCfg<'a> {
    common: CommonCfg<'a>,
    solver: SolverCfg,
}
impl<'a> LeastSquaresCfg<'a> {
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(Algorithm::LeastSquares),
            solver: SolverCfg::new(),
        }
    }

    pub fn with_solver(mut self, v: SolverCfg) -> Self { self.solver = v; self }
}
impl_common_cfg!(LeastSquaresCfg<'a>);

impl Default for LeastSquaresCfg<'_> {
    fn default() -> Self { Self::new() }
}


/// `n × 2` design matrix with a leading column of ones.
fn design_matrix(x: &[f64]) -> Matrix {
    let mut xm = Matrix::zeros(x.len(), 2);
    for (i, &xi) in x.iter().enumerate() {
        xm[(i, 0)] = 1.0;
        xm[(i, 1)] = xi;
    }
    xm
}


/// Computes the least-squares line over the data in [`CommonCfg`].
///
/// # Returns
/// A single [`PiecewiseFunction`] over `[x[0], x[n-1]]`, label `"y"`,
/// coefficients `[c0, c1]` (intercept, slope), kind [`Algorithm::LeastSquares`].
///
/// # Errors
/// - [`InterpolationError::Solver`] wrapping
///   [`crate::linalg::SolverError::SingularSystem`] when all x coincide.
pub fn approximate(cfg: LeastSquaresCfg) -> Result<PiecewiseFunction, InterpolationError> {
    cfg.common.validate()?;

    let x = cfg.common.x();
    let y = cfg.common.y();
    let n = x.len();

    let xm = design_matrix(x);
    let xt = xm.transpose();
    let ym = Matrix::column_vector(y);

    let coeffs = solve(&xm, &xt, &ym, &cfg.solver)?;

    Ok(PiecewiseFunction::new(
        Algorithm::LeastSquares,
        x[0],
        x[n - 1],
        "y",
        coeffs,
    ))
}
