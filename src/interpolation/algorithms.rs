//! Defines the curve-fitting algorithm variants.
//!
//! Provides the [`Algorithm`] enum, which doubles as the `kind` tag on
//! every [`crate::interpolation::piecewise::PiecewiseFunction`].

use serde::Serialize;

/// Curve-fitting algorithm variants.
/// - [`Algorithm::Linear`]       piecewise linear interpolation
/// - [`Algorithm::CubicSpline`]  natural cubic spline interpolation
/// - [`Algorithm::LeastSquares`] global linear least-squares line
///
/// Serialized under the same names as [`Algorithm::algorithm_name`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Algorithm {
    #[serde(rename = "linear_interpolation")]
    Linear,
    #[serde(rename = "cubic_spline_interpolation")]
    CubicSpline,
    #[serde(rename = "least_squares")]
    LeastSquares,
}

impl Algorithm {
    /// Name written in the last field of each output line.
    pub fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Linear       => "linear_interpolation",
            Algorithm::CubicSpline  => "cubic_spline_interpolation",
            Algorithm::LeastSquares => "least_squares",
        }
    }

    /// Minimum number of samples the algorithm accepts.
    pub const fn min_points(self) -> usize {
        match self {
            Algorithm::Linear       => 2,
            Algorithm::CubicSpline  => 3,
            Algorithm::LeastSquares => 2,
        }
    }

    /// Number of coefficients per emitted record.
    pub const fn n_coeffs(self) -> usize {
        match self {
            Algorithm::Linear | Algorithm::LeastSquares => 2,
            Algorithm::CubicSpline                      => 4,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
