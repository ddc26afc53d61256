//! Parallel iteration switch.
//!
//! With the `parallel` feature (default) [`iter_maybe_parallel!`] turns an
//! iterable into a rayon parallel iterator; without it the same call site
//! runs sequentially. Used for the per-core loop in
//! [`crate::cpu_temps::driver`]. Call sites that chain adaptors import
//! `rayon::iter::ParallelIterator` under the same feature gate.
//!
//! ```ignore
//! let fits: Vec<_> = iter_maybe_parallel!(0..n_cores)
//!     .map(|core| fit_core(core, ...))
//!     .collect();
//! ```

#[macro_export]
macro_rules! iter_maybe_parallel {
    ($expr:expr) => {{
        #[cfg(feature = "parallel")]
        {
            use rayon::iter::IntoParallelIterator;

            IntoParallelIterator::into_par_iter($expr)
        }
        #[cfg(not(feature = "parallel"))]
        {
            IntoIterator::into_iter($expr)
        }
    }};
}

pub use crate::iter_maybe_parallel;
