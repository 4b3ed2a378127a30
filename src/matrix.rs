use crate::error::{Error, Result};
use num_traits::{NumAssign, Zero};
use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};

/// Dense row-major matrix of fixed size.
///
/// Entry `(i, j)` holds the capacity (or flow) of the directed edge `i -> j`.
/// The size never changes after construction.
#[derive(PartialEq, Debug, Clone)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: Vec::new() }
    }
}

impl<T> Matrix<T>
where
    T: Copy,
{
    pub fn new(rows: usize, cols: usize, value: T) -> Self {
        Matrix { rows, cols, data: vec![value; rows * cols] }
    }

    /// Square matrix with `diagonal[i]` at `(i, i)` and `value` everywhere else.
    pub fn from_diagonal(diagonal: &[T], value: T) -> Self {
        let n = diagonal.len();
        let mut matrix = Self::new(n, n, value);
        for (i, &d) in diagonal.iter().enumerate() {
            matrix.data[i * n + i] = d;
        }
        matrix
    }

    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, |row| row.len());

        let mut data = Vec::with_capacity(num_rows * num_cols);
        for row in rows {
            if row.len() != num_cols {
                return Err(Error::InvalidDimension { expected: (num_rows, num_cols), found: (num_rows, row.len()) });
            }
            data.extend(row);
        }

        Ok(Matrix { rows: num_rows, cols: num_cols, data })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    #[inline]
    fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if !self.contains(row, col) {
            return None;
        }
        Some(self.data[row * self.cols + col])
    }

    // out of range: logged and rejected, the matrix stays as it was
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if !self.contains(row, col) {
            log::warn!("matrix index out of range: [{}, {}] in a {}x{} matrix", row, col, self.rows, self.cols);
            return Err(Error::OutOfBoundsAccess { row, col, rows: self.rows, cols: self.cols });
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // chunks_exact panics on a zero chunk size
        (0..self.rows).map(move |r| &self.data[r * self.cols..(r + 1) * self.cols])
    }
}

impl<T> Matrix<T>
where
    T: NumAssign + Copy,
{
    // row-major
    pub fn sum(&self) -> T {
        self.data.iter().fold(T::zero(), |mut sum, &value| {
            sum += value;
            sum
        })
    }

    #[inline]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::new(rows, cols, T::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|v| v.is_zero())
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.rows && col < self.cols, "matrix index out of range: [{}, {}]", row, col);
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.rows && col < self.cols, "matrix index out of range: [{}, {}]", row, col);
        &mut self.data[row * self.cols + col]
    }
}

impl<T> Display for Matrix<T>
where
    T: Display + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            writeln!(f, "[{}]", line.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_rows_handles_zero_columns() {
        let matrix = Matrix::<i32>::new(3, 0, 0);
        assert_eq!(matrix.iter_rows().count(), 3);
        assert!(matrix.iter_rows().all(|row| row.is_empty()));
    }

    #[test]
    fn display_prints_one_row_per_line() {
        let matrix = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(matrix.to_string(), "[1, 2]\n[3, 4]\n");
    }
}
