//! Gaussian elimination with partial pivoting.
//!
//! Solves small dense systems given as an augmented matrix `[A | b]`
//! (`k` rows, `k + 1` columns). For each column `i`:
//!
//! ```text
//! 1. pick pivot row p in i..k   (PivotStrategy)
//! 2. swap rows i, p
//! 3. row_i /= a[i][i]           (fails on a singular pivot)
//! 4. row_r -= a[r][i] * row_i   for r > i
//! ```
//!
//! then back-substitutes upward until the coefficient block is the
//! identity and the last column holds the solution.
//!
//! [`solve`] wraps this for the normal equations `XᵗX c = Xᵗy`.

use crate::linalg::config::{PivotStrategy, SolverCfg};
use crate::linalg::errors::SolverError;
use crate::linalg::matrix::{multiply, Matrix};


/// Row index in `col..nrows` holding the pivot for column `col`.
/// Ties go to the first row.
#[inline]
fn find_pivot_row(mat: &Matrix, col: usize, strategy: PivotStrategy) -> usize {
    let key = |v: f64| match strategy {
        PivotStrategy::RawMax => v,
        PivotStrategy::AbsMax => v.abs(),
    };

    let mut best = col;
    let mut best_val = key(mat[(col, col)]);
    for r in col + 1..mat.nrows() {
        let v = key(mat[(r, col)]);
        if v > best_val {
            best = r;
            best_val = v;
        }
    }
    best
}

/// Largest absolute coefficient of each row, taken before elimination.
fn row_scales(mat: &Matrix) -> Vec<f64> {
    let k = mat.nrows();
    (0..k)
        .map(|i| mat.row(i)[..k].iter().fold(0.0_f64, |acc, v| acc.max(v.abs())))
        .collect()
}

#[inline]
fn scale_row(mat: &mut Matrix, row: usize, s: f64) {
    for v in mat.row_mut(row) {
        *v /= s;
    }
}

#[inline]
fn eliminate_below(mat: &mut Matrix, row: usize) {
    let (nrows, ncols) = mat.shape();
    for r in row + 1..nrows {
        let s = mat[(r, row)];
        if s == 0.0 {
            continue;
        }
        for j in row..ncols {
            mat[(r, j)] -= s * mat[(row, j)];
        }
    }
}

/// Upward sweep. Row `i` is already zero right of the diagonal when it is
/// reached, so only column `i` and the augmented column change.
#[inline]
fn back_substitute(mat: &mut Matrix) {
    let (nrows, ncols) = mat.shape();
    let aug = ncols - 1;
    for i in (1..nrows).rev() {
        for j in (0..i).rev() {
            let s = mat[(j, i)];
            mat[(j, i)]   -= s * mat[(i, i)];
            mat[(j, aug)] -= s * mat[(i, aug)];
        }
    }
}


/// Solves the augmented system `[A | b]` in place and returns `x`.
///
/// # Panics
/// Panics if `aug` is not `k × (k + 1)`.
///
/// # Errors
/// - [`SolverError::SingularSystem`] if a pivot is non-finite, zero, or
///   `|pivot| <= cfg.pivot_tol() * s`, where `s` is the largest absolute
///   coefficient its row held before elimination.
pub fn solve_augmented(mut aug: Matrix, cfg: &SolverCfg) -> Result<Vec<f64>, SolverError> {
    let (nrows, ncols) = aug.shape();
    assert_eq!(
        ncols,
        nrows + 1,
        "solve_augmented: expected k x (k+1), got {nrows}x{ncols}"
    );

    let mut scales = row_scales(&aug);

    for i in 0..nrows {
        let p = find_pivot_row(&aug, i, cfg.pivot());
        aug.swap_rows(i, p);
        scales.swap(i, p);

        let pivot = aug[(i, i)];
        if !pivot.is_finite() || pivot == 0.0 || pivot.abs() <= cfg.pivot_tol() * scales[i] {
            return Err(SolverError::SingularSystem { col: i, pivot });
        }

        scale_row(&mut aug, i, pivot);
        eliminate_below(&mut aug, i);
    }
    back_substitute(&mut aug);

    Ok(aug.column(ncols - 1))
}


/// Least-squares coefficients from the normal equations.
///
/// Forms `XᵗX` and `Xᵗy`, augments them and runs [`solve_augmented`].
///
/// # Arguments
/// - `x`  : design matrix, `n × m`
/// - `xt` : transpose of `x`, `m × n`
/// - `y`  : observations, `n × 1`
///
/// # Returns
/// Coefficient vector of length `m`.
///
/// # Panics
/// Panics on incompatible shapes (see [`multiply`]).
pub fn solve(x: &Matrix, xt: &Matrix, y: &Matrix, cfg: &SolverCfg) -> Result<Vec<f64>, SolverError> {
    let xtx = multiply(xt, x);
    let xty = multiply(xt, y);
    solve_augmented(xtx.augment(&xty), cfg)
}
