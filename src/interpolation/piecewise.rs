//! Defines the record returned by all curve-fitting algorithms.
//!
//! Every algorithm emits one or more [`PiecewiseFunction`]s: a polynomial
//! piece together with the interval it covers and a label such as `"y0"`
//! (segment 0) or `"y"` (the global least-squares line).
//!
//! Coefficient layout depends on `kind`:
//!
//! ```text
//! Linear, LeastSquares : [c0, c1]        f(x) = c0 + c1*x
//! CubicSpline          : [a, b, c, d]    f(x) = d + c*t + b*t^2 + a*t^3,  t = x - domain_start
//! ```
//!
//! [`PiecewiseFunction::ascending`] hides the difference for consumers that
//! print or evaluate terms by power.

use serde::Serialize;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::spline::helpers::find_interval;
use crate::interpolation::traits::Interpolator;


/// One polynomial piece of a fitted curve.
///
/// [`PiecewiseFunction`]
/// - `domain_start` : left end of the covered interval
/// - `domain_end`   : right end of the covered interval
/// - `output_label` : `"y{i}"` for segment `i`, `"y"` for a global fit
/// - `coefficients` : see module docs for the per-kind order
/// - `kind`         : algorithm that produced the piece
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PiecewiseFunction {
    pub domain_start: f64,
    pub domain_end: f64,
    pub output_label: String,
    pub coefficients: Vec<f64>,
    pub kind: Algorithm,
}

impl PiecewiseFunction {
    pub fn new(
        kind: Algorithm,
        domain_start: f64,
        domain_end: f64,
        output_label: impl Into<String>,
        coefficients: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(coefficients.len(), kind.n_coeffs());
        Self {
            domain_start,
            domain_end,
            output_label: output_label.into(),
            coefficients,
            kind,
        }
    }

    /// Coefficients ordered by ascending power of the evaluation variable.
    pub fn ascending(&self) -> Vec<f64> {
        match self.kind {
            Algorithm::Linear | Algorithm::LeastSquares => self.coefficients.clone(),
            Algorithm::CubicSpline => self.coefficients.iter().rev().copied().collect(),
        }
    }

    /// Evaluation variable for `x`: absolute for lines, offset from
    /// `domain_start` for spline pieces.
    #[inline]
    fn local(&self, x: f64) -> f64 {
        match self.kind {
            Algorithm::Linear | Algorithm::LeastSquares => x,
            Algorithm::CubicSpline => x - self.domain_start,
        }
    }
}

impl Interpolator for PiecewiseFunction {
    /// Horner evaluation; no domain check, a single piece extrapolates.
    fn eval(&self, x: f64) -> Result<f64, InterpolationError> {
        let t = self.local(x);
        let p = self.ascending()
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * t + c);
        Ok(p)
    }
}


/// Consecutive pieces of one fit, e.g. the output of
/// [`crate::interpolation::linear::interpolate`].
#[derive(Debug, Clone)]
pub struct PiecewiseCurve {
    pieces: Vec<PiecewiseFunction>,
    knots: Vec<f64>,
}

impl PiecewiseCurve {
    /// Pieces must be sorted and adjacent; the fitting routines guarantee it.
    pub fn new(pieces: Vec<PiecewiseFunction>) -> Result<Self, InterpolationError> {
        let last = pieces.last().ok_or(InterpolationError::EmptyInput)?;

        let mut knots: Vec<f64> = pieces.iter().map(|p| p.domain_start).collect();
        knots.push(last.domain_end);

        Ok(Self { pieces, knots })
    }

    pub fn pieces(&self) -> &[PiecewiseFunction] { &self.pieces }
    pub fn x_min(&self) -> f64 { self.knots[0] }
    pub fn x_max(&self) -> f64 { self.knots[self.knots.len() - 1] }
}

impl Interpolator for PiecewiseCurve {
    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        let (x_min, x_max) = (self.x_min(), self.x_max());
        if xq < x_min || xq > x_max {
            return Err(InterpolationError::OutOfBounds { got: xq, x_min, x_max });
        }
        let lo = find_interval(&self.knots, xq);
        self.pieces[lo].eval(xq)
    }
}
