//! Matrix inversion method
//!
//! Builds `A^-1` column by column by solving `A x = e_i` for every standard
//! basis vector, then forms `x = A^-1 b`. This path never calls the direct
//! solve, so it serves as an independent check on it.

use crate::config::SolverConfig;
use crate::dense::{Matrix, Vector};
use crate::elimination::{SolutionResult, check_matrix, check_system, gaussian_elimination};
use crate::error::{LinsysError, Result};
use ndarray::Array2;

/// Compute the inverse of a square matrix with the default configuration
pub fn invert(a: &Matrix) -> Result<Matrix> {
    invert_with_config(a, &SolverConfig::default())
}

/// Compute the inverse of a square matrix.
///
/// Either the full inverse is returned or [`LinsysError::Singular`] with
/// `step` set to the basis column whose solve failed. No partial inverse is
/// ever produced.
pub fn invert_with_config(a: &Matrix, config: &SolverConfig) -> Result<Matrix> {
    config.validate()?;
    check_matrix(a)?;

    let n = a.nrows();
    let mut inverse = Array2::<f64>::zeros((n, n));

    for i in 0..n {
        let e_i = Vector::basis(n, i)?;
        match gaussian_elimination(a, &e_i, config.singularity_threshold)? {
            SolutionResult::Solved(col) => {
                inverse.column_mut(i).assign(col.as_array());
                log::debug!("Inverse column {}/{} computed", i + 1, n);
            }
            SolutionResult::Singular { .. } => {
                log::warn!("Matrix inversion failed at column {}", i);
                return Err(LinsysError::Singular { step: i });
            }
        }
    }

    Ok(Matrix::from(inverse))
}

/// Solve `A x = b` through the explicit inverse with the default configuration
pub fn solve_by_inversion(a: &Matrix, b: &Vector) -> Result<SolutionResult> {
    solve_by_inversion_with_config(a, b, &SolverConfig::default())
}

/// Solve `A x = b` through the explicit inverse.
///
/// Dimension errors are returned immediately. Singularity is reported as
/// [`SolutionResult::Singular`].
pub fn solve_by_inversion_with_config(
    a: &Matrix,
    b: &Vector,
    config: &SolverConfig,
) -> Result<SolutionResult> {
    check_system(a, b)?;

    match invert_with_config(a, config) {
        Ok(inverse) => Ok(SolutionResult::Solved(inverse.mul_vec(b)?)),
        Err(LinsysError::Singular { step }) => Ok(SolutionResult::Singular { step }),
        Err(e) => Err(e),
    }
}
