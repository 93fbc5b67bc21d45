//! Dense linear system solver with cross-validated methods
//!
//! This crate solves `A x = b` for small-to-moderate dense systems with two
//! independent methods and checks that they agree.
//!
//! # Features
//!
//! - **Containers**: bounds-checked [`Matrix`] and [`Vector`] over `ndarray`
//! - **Gaussian elimination** with partial pivoting and a configurable
//!   singularity threshold
//! - **Matrix inversion** built column by column from the elimination engine
//! - **Consistency checking** producing a [`ComparisonReport`]
//! - **Batch cross-validation** of independent systems in parallel (rayon)
//!
//! # Example
//!
//! ```
//! use math_audio_linsys::{Matrix, Vector, cross_validate};
//!
//! let a = Matrix::from_rows(&[vec![2.0, 1.0], vec![1.0, 3.0]]).unwrap();
//! let b = Vector::new(vec![3.0, 5.0]);
//!
//! let report = cross_validate(&a, &b).unwrap();
//! assert!(report.agree());
//! println!("{}", report.interpretation());
//! ```

pub mod compare;
pub mod config;
pub mod dense;
pub mod direct;
pub mod elimination;
pub mod error;
pub mod inversion;
pub mod parallel;
pub mod validate;

pub use compare::{ComparisonReport, Consistency, Method, compare, compare_with, format_solution};
pub use config::{
    DEFAULT_ABSOLUTE_TOLERANCE, DEFAULT_RELATIVE_TOLERANCE, DEFAULT_SINGULARITY_THRESHOLD,
    SolverConfig,
};
pub use dense::{Matrix, Vector};
pub use direct::{solve_by_elimination, solve_by_elimination_with_config};
pub use elimination::{SolutionResult, gaussian_elimination};
pub use error::{LinsysError, Result};
pub use inversion::{
    invert, invert_with_config, solve_by_inversion, solve_by_inversion_with_config,
};
pub use validate::{cross_validate, cross_validate_batch, cross_validate_with_config, residual};
