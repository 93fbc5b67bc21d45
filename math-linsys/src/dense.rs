//! Dense matrix and vector containers
//!
//! Thin wrappers over `ndarray` storage. Every element access is bounds
//! checked and reports [`LinsysError::OutOfRange`] instead of panicking.
//! Dimensions are fixed at construction; `Clone` is a deep copy.

use crate::error::{LinsysError, Result};
use ndarray::{Array1, Array2};
use std::fmt;

/// Dense `f64` matrix
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Array2<f64>,
}

/// Dense `f64` vector
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    data: Array1<f64>,
}

#[inline]
fn check_index(index: usize, bound: usize) -> Result<()> {
    if index < bound {
        Ok(())
    } else {
        Err(LinsysError::OutOfRange { index, bound })
    }
}

impl Matrix {
    /// Build a `rows x cols` matrix from row-major values
    pub fn new(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self> {
        let len = values.len();
        let data = Array2::from_shape_vec((rows, cols), values)
            .map_err(|_| LinsysError::InvalidShape { rows, cols, len })?;
        Ok(Self { data })
    }

    /// Build a matrix from a slice of rows; all rows must have the same length
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let ncols = rows.first().map_or(0, Vec::len);
        let mut values = Vec::with_capacity(rows.len() * ncols);
        for row in rows {
            if row.len() != ncols {
                return Err(LinsysError::DimensionMismatch {
                    expected: ncols,
                    got: row.len(),
                });
            }
            values.extend_from_slice(row);
        }
        Self::new(rows.len(), ncols, values)
    }

    /// All-zero matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: Array2::zeros((rows, cols)),
        }
    }

    /// `n x n` identity matrix
    pub fn identity(n: usize) -> Self {
        Self {
            data: Array2::eye(n),
        }
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    /// Check if the matrix is square
    pub fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    /// Element at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        check_index(row, self.nrows())?;
        check_index(col, self.ncols())?;
        Ok(self.data[[row, col]])
    }

    /// Overwrite the element at `(row, col)`
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        check_index(row, self.nrows())?;
        check_index(col, self.ncols())?;
        self.data[[row, col]] = value;
        Ok(())
    }

    /// Copy of row `row`
    pub fn row(&self, row: usize) -> Result<Vector> {
        check_index(row, self.nrows())?;
        Ok(Vector::from(self.data.row(row).to_owned()))
    }

    /// Copy of column `col`
    pub fn column(&self, col: usize) -> Result<Vector> {
        check_index(col, self.ncols())?;
        Ok(Vector::from(self.data.column(col).to_owned()))
    }

    /// Matrix-vector product `A * x`
    pub fn mul_vec(&self, x: &Vector) -> Result<Vector> {
        if x.len() != self.ncols() {
            return Err(LinsysError::DimensionMismatch {
                expected: self.ncols(),
                got: x.len(),
            });
        }
        Ok(Vector::from(self.data.dot(&x.data)))
    }

    /// Position of the first infinite or NaN entry, in row-major order
    pub fn first_non_finite(&self) -> Option<(usize, usize)> {
        self.data
            .indexed_iter()
            .find(|(_, v)| !v.is_finite())
            .map(|(idx, _)| idx)
    }

    /// Borrow the underlying storage
    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }
}

impl From<Array2<f64>> for Matrix {
    fn from(data: Array2<f64>) -> Self {
        Self { data }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.data.rows().into_iter().enumerate() {
            if i > 0 {
                write!(f, ",\n ")?;
            }
            write_list(f, row.iter())?;
        }
        write!(f, "]")
    }
}

impl Vector {
    /// Build a vector from its values
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            data: Array1::from_vec(values),
        }
    }

    /// All-zero vector of length `n`
    pub fn zeros(n: usize) -> Self {
        Self {
            data: Array1::zeros(n),
        }
    }

    /// Standard basis vector `e_index` of length `n`
    pub fn basis(n: usize, index: usize) -> Result<Self> {
        check_index(index, n)?;
        let mut v = Self::zeros(n);
        v.data[index] = 1.0;
        Ok(v)
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the vector has no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at `index`
    pub fn get(&self, index: usize) -> Result<f64> {
        check_index(index, self.len())?;
        Ok(self.data[index])
    }

    /// Overwrite the element at `index`
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        check_index(index, self.len())?;
        self.data[index] = value;
        Ok(())
    }

    /// Iterate over the elements in order
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.data.iter()
    }

    /// Copy the elements into a `Vec`
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.to_vec()
    }

    /// Largest absolute element (0 for an empty vector)
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }

    /// Index of the first infinite or NaN entry
    pub fn first_non_finite(&self) -> Option<usize> {
        self.data.iter().position(|v| !v.is_finite())
    }

    /// Borrow the underlying storage
    pub fn as_array(&self) -> &Array1<f64> {
        &self.data
    }
}

impl From<Array1<f64>> for Vector {
    fn from(data: Array1<f64>) -> Self {
        Self { data }
    }
}

impl From<Vec<f64>> for Vector {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.data.iter())
    }
}

fn write_list<'a>(
    f: &mut fmt::Formatter<'_>,
    values: impl Iterator<Item = &'a f64>,
) -> fmt::Result {
    write!(f, "[")?;
    for (i, v) in values.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{v}")?;
    }
    write!(f, "]")
}
