//! Error types for dense linear system solving.
//!
//! Dimension and index errors are contract violations and are returned
//! before any arithmetic takes place. Singularity is normally reported as a
//! [`SolutionResult`](crate::SolutionResult) value; the [`LinsysError::Singular`]
//! variant only surfaces from operations that cannot express it otherwise,
//! such as [`invert`](crate::invert).

use thiserror::Error;

/// Errors that can occur while building or solving a dense linear system.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinsysError {
    /// A vector length does not match the dimension it is combined with.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Length required by the other operand
        expected: usize,
        /// Length actually supplied
        got: usize,
    },

    /// The coefficient matrix is not square.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// The initializer does not hold exactly `rows * cols` values.
    #[error("cannot shape {len} values into a {rows}x{cols} matrix")]
    InvalidShape {
        /// Requested number of rows
        rows: usize,
        /// Requested number of columns
        cols: usize,
        /// Number of values supplied
        len: usize,
    },

    /// An element index exceeds the declared dimension.
    #[error("index {index} out of range for dimension of size {bound}")]
    OutOfRange {
        /// The offending index
        index: usize,
        /// Size of the dimension that was indexed
        bound: usize,
    },

    /// The coefficient matrix holds an infinite or NaN entry.
    #[error("non-finite coefficient at ({row}, {col})")]
    NonFiniteCoefficient {
        /// Row of the offending entry
        row: usize,
        /// Column of the offending entry
        col: usize,
    },

    /// The right-hand side holds an infinite or NaN entry.
    #[error("non-finite right-hand side entry at index {index}")]
    NonFiniteRhs {
        /// Index of the offending entry
        index: usize,
    },

    /// A pivot fell below the singularity threshold.
    #[error("matrix is singular or nearly singular (failed at step {step})")]
    Singular {
        /// Elimination step (or inverse column) at which the failure was detected
        step: usize,
    },

    /// Both methods produced a solution but they differ beyond tolerance.
    #[error("solution methods disagree: max deviation {max_deviation:e}")]
    InternalInconsistency {
        /// Largest element-wise absolute difference between the solutions
        max_deviation: f64,
    },

    /// A solver tunable is negative or not finite.
    #[error("invalid solver configuration: {0}")]
    InvalidConfig(String),
}

/// A specialized `Result` type for linear system operations.
pub type Result<T> = std::result::Result<T, LinsysError>;

impl LinsysError {
    /// Returns `true` for errors caused by incompatible operand shapes.
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            LinsysError::DimensionMismatch { .. }
                | LinsysError::NotSquare { .. }
                | LinsysError::InvalidShape { .. }
        )
    }

    /// Returns `true` for inputs holding infinite or NaN values.
    pub fn is_non_finite(&self) -> bool {
        matches!(
            self,
            LinsysError::NonFiniteCoefficient { .. } | LinsysError::NonFiniteRhs { .. }
        )
    }

    /// Returns `true` if the system has no unique solution.
    pub fn is_singular(&self) -> bool {
        matches!(self, LinsysError::Singular { .. })
    }

    /// Returns `true` if the two solution methods disagreed.
    pub fn is_internal_inconsistency(&self) -> bool {
        matches!(self, LinsysError::InternalInconsistency { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LinsysError::DimensionMismatch {
            expected: 3,
            got: 2,
        };
        assert_eq!(err.to_string(), "dimension mismatch: expected 3, got 2");

        let err = LinsysError::OutOfRange { index: 4, bound: 4 };
        assert_eq!(
            err.to_string(),
            "index 4 out of range for dimension of size 4"
        );
    }

    #[test]
    fn test_non_finite_display() {
        let err = LinsysError::NonFiniteCoefficient { row: 1, col: 0 };
        assert_eq!(err.to_string(), "non-finite coefficient at (1, 0)");
    }

    #[test]
    fn test_inconsistency_display() {
        let err = LinsysError::InternalInconsistency {
            max_deviation: 0.25,
        };
        assert!(err.to_string().contains("2.5e-1"));
    }

    #[test]
    fn test_categories() {
        assert!(LinsysError::NotSquare { rows: 2, cols: 3 }.is_dimension_error());
        assert!(
            LinsysError::InvalidShape {
                rows: 2,
                cols: 2,
                len: 3
            }
            .is_dimension_error()
        );
        assert!(!LinsysError::OutOfRange { index: 0, bound: 0 }.is_dimension_error());
        assert!(LinsysError::Singular { step: 1 }.is_singular());
        assert!(LinsysError::NonFiniteCoefficient { row: 0, col: 1 }.is_non_finite());
        assert!(LinsysError::NonFiniteRhs { index: 2 }.is_non_finite());
        assert!(!LinsysError::NonFiniteRhs { index: 2 }.is_dimension_error());
        assert!(
            LinsysError::InternalInconsistency {
                max_deviation: 1.0
            }
            .is_internal_inconsistency()
        );
    }
}
