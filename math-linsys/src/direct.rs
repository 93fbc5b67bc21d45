//! Direct solve method
//!
//! One elimination pass on the original right-hand side. Cheaper and more
//! accurate than going through the inverse; this is the method to use when
//! no cross-check is needed.

use crate::config::SolverConfig;
use crate::dense::{Matrix, Vector};
use crate::elimination::{SolutionResult, gaussian_elimination};
use crate::error::Result;

/// Solve `A x = b` by Gaussian elimination with the default configuration
pub fn solve_by_elimination(a: &Matrix, b: &Vector) -> Result<SolutionResult> {
    solve_by_elimination_with_config(a, b, &SolverConfig::default())
}

/// Solve `A x = b` by Gaussian elimination
pub fn solve_by_elimination_with_config(
    a: &Matrix,
    b: &Vector,
    config: &SolverConfig,
) -> Result<SolutionResult> {
    config.validate()?;
    gaussian_elimination(a, b, config.singularity_threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinsysError;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_returns_rhs() {
        let n = 5;
        let a = Matrix::identity(n);
        let b = Vector::new((1..=n).map(|i| i as f64).collect());

        let x = solve_by_elimination(&a, &b).unwrap().into_result().unwrap();
        for i in 0..n {
            assert_relative_eq!(x.get(i).unwrap(), b.get(i).unwrap(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_non_finite_input_rejected() {
        let a = Matrix::identity(2);
        let b = Vector::new(vec![1.0, f64::NAN]);
        assert_eq!(
            solve_by_elimination(&a, &b).unwrap_err(),
            LinsysError::NonFiniteRhs { index: 1 }
        );
    }

    #[test]
    fn test_threshold_is_configurable() {
        let a = Matrix::from_rows(&[vec![1e-10, 0.0], vec![0.0, 1e-10]]).unwrap();
        let b = Vector::new(vec![1e-10, 2e-10]);

        let strict = SolverConfig::default().with_singularity_threshold(1e-9);
        assert!(
            !solve_by_elimination_with_config(&a, &b, &strict)
                .unwrap()
                .is_solved()
        );

        let x = solve_by_elimination(&a, &b).unwrap().into_result().unwrap();
        assert_relative_eq!(x.get(0).unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(x.get(1).unwrap(), 2.0, epsilon = 1e-12);
    }
}
