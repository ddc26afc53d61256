//! Shared configuration for curve-fitting algorithms.
//!
//! Provides [`CommonCfg`] with the default minimum allowed spacing between
//! adjacent `x` data; [`DEFAULT_X_TOL`]. Shared by all algorithms.
//!
//! [`CommonCfg`] — universal fields
//! - `x`             : x values provided
//! - `y`             : y values provided
//! - `x_min_spacing` : adjacent x closer than this form a zero-width segment
//! - `min_points`    : fewest samples the algorithm accepts
//! - `check_spacing` : whether `set_x` rejects zero-width segments
//!
//! [`CommonCfg::new`] initializes configuration with empty slices and the
//! limits of the given [`Algorithm`]. Least squares skips the spacing
//! check; identical x-values surface from the solver as a singular system.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::errors::InterpolationError;

pub const DEFAULT_X_TOL: f64 = 1e-12;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) x      : &'a [f64],
    pub(crate) y      : &'a [f64],
    pub(crate) x_min_spacing: f64,
    pub(crate) min_points   : usize,
    pub(crate) check_spacing: bool,
}

impl<'a> CommonCfg<'a> {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            x      : &[],
            y      : &[],
            x_min_spacing: DEFAULT_X_TOL,
            min_points   : algorithm.min_points(),
            check_spacing: !matches!(algorithm, Algorithm::LeastSquares),
        }
    }

    /// Final check run by each algorithm before fitting; catches configs
    /// where `set_x` or `set_y` was never called.
    pub fn validate(&self) -> Result<(), InterpolationError> {
        let x = self.x;
        let y = self.y;

        if x.is_empty() || y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        if x.len() < self.min_points {
            return Err(InterpolationError::InsufficientPoints { got: x.len(), need: self.min_points });
        }
        Ok(())
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn x_min_spacing(&self) -> f64 { self.x_min_spacing }
    pub fn min_points(&self) -> usize { self.min_points }

    // setters
    pub(crate) fn with_x(&mut self, v: &'a [f64]) { self.x = v; }
    pub(crate) fn with_y(&mut self, v: &'a [f64]) { self.y = v; }
    pub(crate) fn with_x_min_spacing(&mut self, v: f64) { self.x_min_spacing = v; }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

/// First adjacent pair violating the spacing rules.
pub(crate) fn check_spacing(xs: &[f64], min_spacing: f64) -> Result<(), InterpolationError> {
    for i in 1..xs.len() {
        if (xs[i] - xs[i - 1]).abs() < min_spacing {
            return Err(InterpolationError::ZeroWidthSegment { idx: i - 1, x: xs[i - 1] });
        }
        if xs[i] <= xs[i - 1] {
            return Err(InterpolationError::NonIncreasingX);
        }
    }
    Ok(())
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_x(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }
                let need = self.common.min_points();
                if v.len() < need {
                    return Err(InterpolationError::InsufficientPoints { got: v.len(), need });
                }
                if self.common.check_spacing {
                    $crate::interpolation::config::check_spacing(v, self.common.x_min_spacing)?;
                }

                // length agreement check
                // symmetric with set_y
                let y_len = self.common.y.len();
                if y_len != 0 && y_len != v.len() {
                    return Err(InterpolationError::UnequalLength { x_len: v.len(), y_len });
                }

                self.common.with_x(v);
                Ok(self)
            }

            pub fn set_y(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                let x_len = self.common.x.len();
                let y_len = v.len();
                if x_len != 0 && y_len != x_len {
                    return Err(InterpolationError::UnequalLength { x_len, y_len });
                }

                self.common.with_y(v);
                Ok(self)
            }

            /// Must be called before `set_x` to affect its spacing check.
            pub fn set_x_tol(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if !v.is_finite() || v <= 0.0 {
                    return Err(InterpolationError::InvalidXTol { got: v });
                }

                self.common.with_x_min_spacing(v);
                Ok(self)
            }
        }
    };
}
pub(crate) use impl_common_cfg;
