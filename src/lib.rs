//! # thermofit
//!
//! Curve fits of per-core CPU temperature series.
//!
//! For every core the crate produces three approximations of
//! temperature against time:
//! - piecewise linear interpolation ([`interpolation::linear`])
//! - natural cubic spline interpolation ([`interpolation::spline::natural`])
//! - a global least-squares line ([`interpolation::least_squares`]), solved
//!   by Gaussian elimination in [`linalg`]
//!
//! Each fit is a list of [`PiecewiseFunction`] records. [`cpu_temps`] reads
//! raw sensor dumps, fits every core and writes one text file per core.

pub mod parallel;

pub mod cpu_temps;
pub mod interpolation;
pub mod linalg;

pub use interpolation::algorithms::Algorithm;
pub use interpolation::errors::InterpolationError;
pub use interpolation::piecewise::{PiecewiseCurve, PiecewiseFunction};
pub use interpolation::Interpolator;
pub use linalg::SolverError;

use interpolation::least_squares::LeastSquaresCfg;
use interpolation::linear::LinearCfg;
use interpolation::spline::natural::NaturalSplineCfg;


/// Piecewise linear interpolation with default settings.
pub fn linear_interpolate(x: &[f64], y: &[f64]) -> Result<Vec<PiecewiseFunction>, InterpolationError> {
    let cfg = LinearCfg::new().set_x(x)?.set_y(y)?;
    interpolation::linear::interpolate(cfg)
}

/// Natural cubic spline with the decoupled recurrence.
pub fn cubic_spline_interpolate(x: &[f64], y: &[f64]) -> Result<Vec<PiecewiseFunction>, InterpolationError> {
    let cfg = NaturalSplineCfg::new().set_x(x)?.set_y(y)?;
    interpolation::spline::natural::interpolate(cfg)
}

/// Least-squares line with raw-max pivoting.
pub fn least_squares_approximate(x: &[f64], y: &[f64]) -> Result<PiecewiseFunction, InterpolationError> {
    let cfg = LeastSquaresCfg::new().set_x(x)?.set_y(y)?;
    interpolation::least_squares::approximate(cfg)
}
