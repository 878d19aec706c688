use anyhow::{ensure, Result};
use std::ops::{Index, IndexMut};

/// Dense row-major matrix over a flat memory view of all values.
///
/// Used for both the unit cost matrix and the allocation built by the
/// solvers. Cell `(i, j)` lives at `i * cols + j`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    values: Vec<T>,
}

impl<T: Copy> Matrix<T> {
    /// Builds a matrix where every cell holds `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Matrix<T> {
        Matrix {
            rows,
            cols,
            values: vec![value; rows * cols],
        }
    }

    /// Builds a matrix from nested rows, requiring uniform row width.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Matrix<T>, anyhow::Error> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, |row| row.len());
        let mut values = Vec::with_capacity(num_rows * num_cols);
        for row in &rows {
            ensure!(
                row.len() == num_cols,
                "rows must have uniform width: expected {}, got {}",
                num_cols,
                row.len()
            );
            values.extend_from_slice(row.as_slice());
        }
        Ok(Matrix {
            rows: num_rows,
            cols: num_cols,
            values,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row `i` as a contiguous slice.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.values[i * self.cols..(i + 1) * self.cols]
    }

    /// Flat row-major view of all values.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        debug_assert!(i < self.rows && j < self.cols);
        &self.values[i * self.cols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        debug_assert!(i < self.rows && j < self.cols);
        &mut self.values[i * self.cols + j]
    }
}
