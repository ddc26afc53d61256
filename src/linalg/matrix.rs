//! Dense row-major matrix.
//!
//! [`Matrix`] keeps a flat `Vec<f64>` with its dimensions: element
//! `(row, col)` lives at `row * ncols + col`. Row-major suits the
//! elimination in [`crate::linalg::solver`], which works one row at a time.

use std::ops::{Index, IndexMut};


#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    nrows: usize,
    ncols: usize,
}

impl Matrix {
    /// Zero-filled `nrows × ncols` matrix.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self { data: vec![0.0; nrows * ncols], nrows, ncols }
    }

    /// Create from flat row-major data.
    ///
    /// Returns `None` if `data.len() != nrows * ncols`.
    pub fn from_row_major(data: Vec<f64>, nrows: usize, ncols: usize) -> Option<Self> {
        if data.len() != nrows * ncols {
            return None;
        }
        Some(Self { data, nrows, ncols })
    }

    /// Create from nested rows.
    ///
    /// Returns `None` if the rows are ragged.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != ncols) {
            return None;
        }
        let data = rows.iter().flatten().copied().collect();
        Some(Self { data, nrows, ncols })
    }

    /// Single column `n × 1`.
    pub fn column_vector(v: &[f64]) -> Self {
        Self { data: v.to_vec(), nrows: v.len(), ncols: 1 }
    }

    #[inline] pub fn nrows(&self) -> usize { self.nrows }
    #[inline] pub fn ncols(&self) -> usize { self.ncols }
    #[inline] pub fn shape(&self) -> (usize, usize) { (self.nrows, self.ncols) }

    /// Contiguous row slice.
    ///
    /// # Panics
    /// Panics if `row >= nrows`.
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.ncols;
        &self.data[start..start + self.ncols]
    }

    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        let start = row * self.ncols;
        &mut self.data[start..start + self.ncols]
    }

    /// Copy of a column; O(nrows) since columns are strided.
    pub fn column(&self, col: usize) -> Vec<f64> {
        (0..self.nrows).map(|i| self[(i, col)]).collect()
    }

    pub fn transpose(&self) -> Self {
        let mut t = Self::zeros(self.ncols, self.nrows);
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                t[(j, i)] = self[(i, j)];
            }
        }
        t
    }

    pub fn swap_rows(&mut self, r1: usize, r2: usize) {
        if r1 == r2 {
            return;
        }
        let n = self.ncols;
        for j in 0..n {
            self.data.swap(r1 * n + j, r2 * n + j);
        }
    }

    /// `[self | rhs]`, row counts must agree.
    ///
    /// # Panics
    /// Panics if `self.nrows != rhs.nrows`.
    pub fn augment(&self, rhs: &Matrix) -> Self {
        assert_eq!(
            self.nrows, rhs.nrows,
            "augment: row mismatch ({}x{} | {}x{})",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols
        );
        let ncols = self.ncols + rhs.ncols;
        let mut data = Vec::with_capacity(self.nrows * ncols);
        for i in 0..self.nrows {
            data.extend_from_slice(self.row(i));
            data.extend_from_slice(rhs.row(i));
        }
        Self { data, nrows: self.nrows, ncols }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        debug_assert!(row < self.nrows && col < self.ncols);
        &self.data[row * self.ncols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        debug_assert!(row < self.nrows && col < self.ncols);
        &mut self.data[row * self.ncols + col]
    }
}


/// Dense product `lhs · rhs` by the plain triple loop.
///
/// # Panics
/// Panics if `lhs.ncols() != rhs.nrows()`; a mismatch is a caller bug,
/// not a recoverable condition.
pub fn multiply(lhs: &Matrix, rhs: &Matrix) -> Matrix {
    assert_eq!(
        lhs.ncols, rhs.nrows,
        "multiply: inner dimension mismatch ({}x{} · {}x{})",
        lhs.nrows, lhs.ncols, rhs.nrows, rhs.ncols
    );

    let (n, m, p) = (lhs.nrows, lhs.ncols, rhs.ncols);
    let mut out = Matrix::zeros(n, p);
    for i in 0..n {
        for j in 0..p {
            let mut acc = 0.0;
            for k in 0..m {
                acc += lhs[(i, k)] * rhs[(k, j)];
            }
            out[(i, j)] = acc;
        }
    }

    out
}
