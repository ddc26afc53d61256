// common helpers
pub mod config;
pub mod errors;
pub mod matrix;

// elimination
pub mod solver;

pub use config::{PivotStrategy, SolverCfg, DEFAULT_PIVOT_TOL};
pub use errors::SolverError;
pub use matrix::{multiply, Matrix};
pub use solver::{solve, solve_augmented};
