//! Cross-validation pipeline
//!
//! Runs both methods independently on the same system and compares them.
//! Each run works on private copies, so independent systems can be checked
//! concurrently without locking.

use crate::compare::{ComparisonReport, compare_with};
use crate::config::SolverConfig;
use crate::dense::{Matrix, Vector};
use crate::direct::solve_by_elimination_with_config;
use crate::elimination::check_system;
use crate::error::Result;
use crate::inversion::solve_by_inversion_with_config;
use crate::parallel::parallel_map;

/// Solve with both methods and compare, using the default configuration
pub fn cross_validate(a: &Matrix, b: &Vector) -> Result<ComparisonReport> {
    cross_validate_with_config(a, b, &SolverConfig::default())
}

/// Solve with both methods and compare.
///
/// Dimension, non-finite input and configuration errors are returned before
/// either method runs. Singularity and disagreement are part of the report.
pub fn cross_validate_with_config(
    a: &Matrix,
    b: &Vector,
    config: &SolverConfig,
) -> Result<ComparisonReport> {
    config.validate()?;
    check_system(a, b)?;

    let inversion = solve_by_inversion_with_config(a, b, config)?;
    let elimination = solve_by_elimination_with_config(a, b, config)?;
    let report = compare_with(&inversion, &elimination, config);

    log::info!("{}x{} system: {}", a.nrows(), a.ncols(), report);
    Ok(report)
}

/// Cross-validate many independent systems, in parallel when available.
///
/// Results are returned in input order.
pub fn cross_validate_batch(
    systems: &[(Matrix, Vector)],
    config: &SolverConfig,
) -> Vec<Result<ComparisonReport>> {
    parallel_map(systems, |(a, b)| cross_validate_with_config(a, b, config))
}

/// Residual `A x - b`
pub fn residual(a: &Matrix, x: &Vector, b: &Vector) -> Result<Vector> {
    check_system(a, b)?;
    let ax = a.mul_vec(x)?;
    Ok(Vector::from(ax.as_array() - b.as_array()))
}
