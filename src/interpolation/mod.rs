pub mod algorithms;
pub mod config;
pub mod errors;
pub mod piecewise;
pub mod traits;
pub use traits::Interpolator;

pub mod linear;
pub mod least_squares;
pub mod spline;
