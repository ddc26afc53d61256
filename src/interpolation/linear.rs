//! Linear Interpolation
//!
//! Implements piecewise-[linear interpolation](https://en.wikipedia.org/wiki/Linear_interpolation).
//!
//! Each consecutive pair `(x[i], y[i])`, `(x[i+1], y[i+1])` defines
//! a line segment, stored as the full line `c0 + c1*x` rather than
//! relative to `x[i]`.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::piecewise::PiecewiseFunction;


/// Linear interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`LinearCfg::new`] then setters.
///
/// # Defaults
/// - Minimum allowed `x` spacing between consecutive samples;
///   [`crate::interpolation::config::DEFAULT_X_TOL`] by default.
#[derive(Debug, Clone, Copy)]
pub struct LinearCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> LinearCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(Algorithm::Linear) }
    }
}
impl_common_cfg!(LinearCfg<'a>);

impl Default for LinearCfg<'_> {
    fn default() -> Self { Self::new() }
}


/// Slope and x = 0 intercept of the line through two points.
#[inline]
fn line_through(x0: f64, x1: f64, y0: f64, y1: f64) -> (f64, f64) {
    let c1 = (y1 - y0) / (x1 - x0);
    let c0 = y0 - c1 * x0;
    (c0, c1)
}

/// Computes linear interpolation pieces over the data in [`CommonCfg`].
///
/// # Behavior
/// For each segment `i` in `0..n-1`:
///
/// ```text
/// c1 = (y[i+1] - y[i]) / (x[i+1] - x[i])
/// c0 = y[i] - c1 * x[i]
/// ```
///
/// # Returns
/// One [`PiecewiseFunction`] per segment with domain `[x[i], x[i+1]]`,
/// label `"y{i}"`, coefficients `[c0, c1]` and kind [`Algorithm::Linear`].
///
/// # Errors
/// - [`InterpolationError::EmptyInput`] / [`InterpolationError::UnequalLength`]
///   if `x` and `y` were not both set.
/// - Zero-width segments are rejected earlier, by `set_x`.
pub fn interpolate(cfg: LinearCfg) -> Result<Vec<PiecewiseFunction>, InterpolationError> {
    cfg.common.validate()?;

    let x = cfg.common.x();
    let y = cfg.common.y();

    let pieces = x.windows(2)
        .zip(y.windows(2))
        .enumerate()
        .map(|(i, (xs, ys))| {
            let (c0, c1) = line_through(xs[0], xs[1], ys[0], ys[1]);
            PiecewiseFunction::new(Algorithm::Linear, xs[0], xs[1], format!("y{i}"), vec![c0, c1])
        })
        .collect();

    Ok(pieces)
}
