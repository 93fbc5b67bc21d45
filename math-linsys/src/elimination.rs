//! Gaussian elimination with partial pivoting
//!
//! The engine shared by both solution methods. It copies the caller's matrix
//! and right-hand side into private scratch storage, reduces the copy to
//! upper-triangular form and back-substitutes. The inputs are never mutated.

use crate::dense::{Matrix, Vector};
use crate::error::{LinsysError, Result};
use ndarray::{Array1, Array2};

/// Outcome of one solve
#[derive(Debug, Clone, PartialEq)]
pub enum SolutionResult {
    /// The system has a unique solution
    Solved(Vector),
    /// A pivot fell below the singularity threshold
    Singular {
        /// Elimination step (or inverse column) at which the failure was detected
        step: usize,
    },
}

impl SolutionResult {
    /// Check if a solution was found
    pub fn is_solved(&self) -> bool {
        matches!(self, SolutionResult::Solved(_))
    }

    /// The solution vector, if any
    pub fn solution(&self) -> Option<&Vector> {
        match self {
            SolutionResult::Solved(x) => Some(x),
            SolutionResult::Singular { .. } => None,
        }
    }

    /// Convert into a `Result`, mapping singularity to [`LinsysError::Singular`]
    pub fn into_result(self) -> Result<Vector> {
        match self {
            SolutionResult::Solved(x) => Ok(x),
            SolutionResult::Singular { step } => Err(LinsysError::Singular { step }),
        }
    }
}

/// Check that `a` is square and holds only finite values
pub(crate) fn check_matrix(a: &Matrix) -> Result<()> {
    if !a.is_square() {
        return Err(LinsysError::NotSquare {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }
    if let Some((row, col)) = a.first_non_finite() {
        return Err(LinsysError::NonFiniteCoefficient { row, col });
    }
    Ok(())
}

/// Check that `a` is a valid coefficient matrix and `b` a finite vector of matching length
pub(crate) fn check_system(a: &Matrix, b: &Vector) -> Result<()> {
    check_matrix(a)?;
    if b.len() != a.nrows() {
        return Err(LinsysError::DimensionMismatch {
            expected: a.nrows(),
            got: b.len(),
        });
    }
    if let Some(index) = b.first_non_finite() {
        return Err(LinsysError::NonFiniteRhs { index });
    }
    Ok(())
}

/// Row ordering produced by partial pivoting; lives for one elimination run
#[derive(Debug)]
struct PivotRecord {
    order: Vec<usize>,
}

impl PivotRecord {
    fn new(n: usize) -> Self {
        Self {
            order: (0..n).collect(),
        }
    }

    fn swap(&mut self, k: usize, r: usize) {
        self.order.swap(k, r);
    }

    fn is_identity(&self) -> bool {
        self.order.iter().enumerate().all(|(i, &r)| i == r)
    }
}

#[inline]
fn below_threshold(value: f64, threshold: f64) -> bool {
    value.is_nan() || value.abs() < threshold
}

/// Solve `A x = b` by Gaussian elimination with partial pivoting.
///
/// At step `k` the row with the largest magnitude in column `k` (among rows
/// `k..n`) is swapped into position `k`. If that magnitude is below
/// `singularity_threshold` the system is reported as
/// [`SolutionResult::Singular`]. Dimension errors and non-finite entries are
/// returned as errors before any arithmetic is done.
pub fn gaussian_elimination(
    a: &Matrix,
    b: &Vector,
    singularity_threshold: f64,
) -> Result<SolutionResult> {
    check_system(a, b)?;

    let mut work = a.as_array().clone();
    let mut rhs = b.as_array().clone();

    let (result, pivots) = eliminate_in_place(&mut work, &mut rhs, singularity_threshold);
    if !pivots.is_identity() {
        log::debug!("Elimination row order: {:?}", pivots.order);
    }
    Ok(result)
}

fn eliminate_in_place(
    work: &mut Array2<f64>,
    rhs: &mut Array1<f64>,
    threshold: f64,
) -> (SolutionResult, PivotRecord) {
    let n = rhs.len();
    let mut pivots = PivotRecord::new(n);

    for k in 0..n {
        let mut max_val = work[[k, k]].abs();
        let mut max_row = k;
        for i in (k + 1)..n {
            let val = work[[i, k]].abs();
            if val > max_val || (max_val.is_nan() && !val.is_nan()) {
                max_val = val;
                max_row = i;
            }
        }

        if below_threshold(max_val, threshold) {
            log::warn!(
                "Pivot {:.3e} in column {} is below threshold {:.1e}",
                max_val,
                k,
                threshold
            );
            return (SolutionResult::Singular { step: k }, pivots);
        }

        if max_row != k {
            for j in k..n {
                work.swap([k, j], [max_row, j]);
            }
            rhs.swap(k, max_row);
            pivots.swap(k, max_row);
            log::debug!("Step {}: swapped rows {} and {}", k, k, max_row);
        }

        let pivot = work[[k, k]];
        for i in (k + 1)..n {
            let factor = work[[i, k]] / pivot;
            if factor == 0.0 {
                continue;
            }
            work[[i, k]] = 0.0;
            for j in (k + 1)..n {
                let update = factor * work[[k, j]];
                work[[i, j]] -= update;
            }
            let update = factor * rhs[k];
            rhs[i] -= update;
        }
    }

    (back_substitute(work, rhs, threshold), pivots)
}

/// Solve the upper-triangular system `U x = y`, last row first
fn back_substitute(upper: &Array2<f64>, rhs: &Array1<f64>, threshold: f64) -> SolutionResult {
    let n = rhs.len();
    let mut x = Array1::<f64>::zeros(n);

    for i in (0..n).rev() {
        let mut sum = rhs[i];
        for j in (i + 1)..n {
            sum -= upper[[i, j]] * x[j];
        }
        let diag = upper[[i, i]];
        if below_threshold(diag, threshold) {
            return SolutionResult::Singular { step: i };
        }
        x[i] = sum / diag;
    }

    SolutionResult::Solved(Vector::from(x))
}
