//! Natural Cubic Spline
//!
//! Fits one cubic per segment `[x[i], x[i+1]]` with zero second derivative
//! at both ends. With `h[i] = x[i+1] - x[i]`, `df[i]` the first differences
//! and `m[i]` the second derivative at knot `i` (`m[0] = m[N] = 0`):
//!
//! ```text
//! a[i] = (m[i+1] - m[i]) / (6 h[i])              cubic
//! b[i] = m[i] / 2                                quadratic
//! c[i] = df[i] - h[i] (m[i+1] + 2 m[i]) / 6      linear
//! d[i] = y[i]                                    constant
//! ```
//!
//! in the local variable `t = x - x[i]`.
//!
//! Interior `m` comes from one of two recurrences, see [`SplineRecurrence`].


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::piecewise::PiecewiseFunction;
use crate::interpolation::spline::helpers::{spacings, deltas};
use crate::linalg::{solve_augmented, Matrix, SolverCfg};


/// How interior second derivatives are computed.
/// - [`SplineRecurrence::Decoupled`]   each `m[i]` from its neighbours only,
///   `m[i] = 3 (df[i] - df[i-1]) / (h[i] + h[i-1])`. Matches the historical
///   output files; it is the diagonal of the exact system, not its solution.
/// - [`SplineRecurrence::Tridiagonal`] solves the coupled natural-spline system
///   `h[i-1] m[i-1] + 2 (h[i-1] + h[i]) m[i] + h[i] m[i+1] = 6 (df[i] - df[i-1])`.
///   The system is assembled densely, so memory and time grow as `O(n²)`
///   and `O(n³)`: about 3.2 GB of `f64`s for 20 000 samples.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum SplineRecurrence {
    #[default]
    Decoupled,
    Tridiagonal,
}


/// Natural spline configuration
///
/// # Fields
/// - `common`     : [`CommonCfg`]
/// - `recurrence` : [`SplineRecurrence`], `Decoupled` by default
/// - `solver`     : [`SolverCfg`] used by the `Tridiagonal` recurrence
///
/// # Construction
/// - Use [`NaturalSplineCfg::new`] then setters. At least 3 points.
#[derive(Debug, Copy, Clone)]
pub struct NaturalSplineCfg<'a> {
    common: CommonCfg<'a>,
    recurrence: SplineRecurrence,
    solver: SolverCfg,
}
impl<'a> NaturalSplineCfg<'a> {
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(Algorithm::CubicSpline),
            recurrence: SplineRecurrence::default(),
            solver: SolverCfg::new(),
        }
    }

    pub fn with_recurrence(mut self, v: SplineRecurrence) -> Self { self.recurrence = v; self }
    pub fn with_solver(mut self, v: SolverCfg) -> Self { self.solver = v; self }

    pub fn recurrence(&self) -> SplineRecurrence { self.recurrence }
}
impl_common_cfg!(NaturalSplineCfg<'a>);

impl Default for NaturalSplineCfg<'_> {
    fn default() -> Self { Self::new() }
}


fn second_derivs_decoupled(h: &[f64], df: &[f64]) -> Vec<f64> {
    let n_seg = h.len();
    let mut m = vec![0.0; n_seg + 1];
    for i in 1..n_seg {
        m[i] = 3.0 * (df[i] - df[i-1]) / (h[i] + h[i-1]);
    }
    m
}


fn second_derivs_tridiagonal(
    h: &[f64],
    df: &[f64],
    solver: &SolverCfg,
) -> Result<Vec<f64>, InterpolationError> {
    let n_seg = h.len();
    let k = n_seg - 1;

    // dense k x (k+1) augmented system for m[1..n_seg-1], 8 k (k+1) bytes
    let mut aug = Matrix::zeros(k, k + 1);
    for r in 0..k {
        let i = r + 1;
        if r > 0     { aug[(r, r - 1)] = h[i-1]; }
        aug[(r, r)] = 2.0 * (h[i-1] + h[i]);
        if r + 1 < k { aug[(r, r + 1)] = h[i]; }
        aug[(r, k)] = 6.0 * (df[i] - df[i-1]);
    }

    let interior = solve_augmented(aug, solver)?;

    let mut m = vec![0.0; n_seg + 1];
    m[1..n_seg].copy_from_slice(&interior);
    Ok(m)
}


/// Computes natural cubic spline pieces over the data in [`CommonCfg`].
///
/// # Returns
/// One [`PiecewiseFunction`] per segment `i`:
/// - domain         : `[x[i], x[i+1]]`
/// - `output_label` : `"y{i}"`
/// - `coefficients` : `[a[i], b[i], c[i], d[i]]` (cubic first)
/// - `kind`         : [`Algorithm::CubicSpline`]
///
/// # Errors
/// - [`InterpolationError::InsufficientPoints`] for fewer than 3 points.
/// - [`InterpolationError::Solver`] if the tridiagonal system is singular.
pub fn interpolate(cfg: NaturalSplineCfg) -> Result<Vec<PiecewiseFunction>, InterpolationError> {
    cfg.common.validate()?;

    let x = cfg.common.x();
    let y = cfg.common.y();
    let n_seg = x.len() - 1;

    let h  = spacings(x);
    let df = deltas(y, &h);

    let m = match cfg.recurrence() {
        SplineRecurrence::Decoupled   => second_derivs_decoupled(&h, &df),
        SplineRecurrence::Tridiagonal => second_derivs_tridiagonal(&h, &df, &cfg.solver)?,
    };

    let mut pieces = Vec::with_capacity(n_seg);
    for i in 0..n_seg {
        let a = (m[i+1] - m[i]) / (6.0 * h[i]);
        let b = m[i] / 2.0;
        let c = df[i] - h[i] * (m[i+1] + 2.0 * m[i]) / 6.0;
        let d = y[i];

        pieces.push(PiecewiseFunction::new(
            Algorithm::CubicSpline,
            x[i],
            x[i+1],
            format!("y{i}"),
            vec![a, b, c, d],
        ));
    }

    Ok(pieces)
}
