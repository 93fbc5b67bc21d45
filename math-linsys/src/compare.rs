//! Consistency checking between the two solution methods
//!
//! Given one [`SolutionResult`] per method, decides whether they agree and
//! builds a [`ComparisonReport`] with a human-readable interpretation.
//! Agreement uses the mixed test `|a - b| <= atol + rtol * |b|` on every
//! coordinate, with the elimination result as reference.

use crate::config::SolverConfig;
use crate::dense::Vector;
use crate::elimination::SolutionResult;
use crate::error::{LinsysError, Result};
use num_traits::Float;
use std::fmt;

/// The two independent solution methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// `x = A^-1 b` with the inverse built column by column
    Inversion,
    /// Direct Gaussian elimination on `b`
    Elimination,
}

impl Method {
    fn other(self) -> Self {
        match self {
            Method::Inversion => Method::Elimination,
            Method::Elimination => Method::Inversion,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Inversion => write!(f, "matrix inversion"),
            Method::Elimination => write!(f, "Gaussian elimination"),
        }
    }
}

/// How the two results relate
#[derive(Debug, Clone, PartialEq)]
pub enum Consistency {
    /// Both solved and agree within tolerance
    Agree {
        /// The shared solution (taken from the elimination method)
        solution: Vector,
    },
    /// Both solved but differ beyond tolerance; points at a defect in one method
    Disagree {
        /// Largest element-wise absolute difference
        max_deviation: f64,
    },
    /// Exactly one method produced a solution
    PartialFailure {
        /// The surviving solution
        solution: Vector,
        /// The method that reported singularity
        failed: Method,
    },
    /// Neither method found a unique solution
    BothSingular,
}

/// Outcome of cross-checking the two methods
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    inversion: SolutionResult,
    elimination: SolutionResult,
    agree: bool,
    consistency: Consistency,
    interpretation: String,
}

impl ComparisonReport {
    /// Result of the inversion method
    pub fn inversion(&self) -> &SolutionResult {
        &self.inversion
    }

    /// Result of the elimination method
    pub fn elimination(&self) -> &SolutionResult {
        &self.elimination
    }

    /// `true` only when both methods solved the system and agree
    pub fn agree(&self) -> bool {
        self.agree
    }

    /// Classification of the two results
    pub fn consistency(&self) -> &Consistency {
        &self.consistency
    }

    /// Human-readable summary
    pub fn interpretation(&self) -> &str {
        &self.interpretation
    }

    /// The solution the report vouches for, if any
    pub fn solution(&self) -> Option<&Vector> {
        match &self.consistency {
            Consistency::Agree { solution } | Consistency::PartialFailure { solution, .. } => {
                Some(solution)
            }
            Consistency::Disagree { .. } | Consistency::BothSingular => None,
        }
    }

    /// Convert into a `Result`.
    ///
    /// Disagreement becomes [`LinsysError::InternalInconsistency`] and double
    /// singularity becomes [`LinsysError::Singular`].
    pub fn into_result(self) -> Result<Vector> {
        match self.consistency {
            Consistency::Agree { solution } | Consistency::PartialFailure { solution, .. } => {
                Ok(solution)
            }
            Consistency::Disagree { max_deviation } => {
                Err(LinsysError::InternalInconsistency { max_deviation })
            }
            Consistency::BothSingular => {
                let step = match self.elimination {
                    SolutionResult::Singular { step } => step,
                    SolutionResult::Solved(_) => 0,
                };
                Err(LinsysError::Singular { step })
            }
        }
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.interpretation)
    }
}

/// Render a solution as `x1 = v1, x2 = v2, ...`
pub fn format_solution(x: &Vector) -> String {
    x.iter()
        .enumerate()
        .map(|(i, v)| format!("x{} = {}", i + 1, v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check `|a - b| <= atol + rtol * |b|`; NaN never compares close
#[inline]
pub(crate) fn is_close<F: Float>(a: F, b: F, atol: F, rtol: F) -> bool {
    (a - b).abs() <= atol + rtol * b.abs()
}

fn max_deviation(a: &Vector, b: &Vector) -> f64 {
    if a.len() != b.len() {
        return f64::INFINITY;
    }
    a.iter()
        .zip(b.iter())
        .fold(0.0_f64, |acc, (x, y)| {
            let d = (x - y).abs();
            if d.is_nan() { f64::INFINITY } else { acc.max(d) }
        })
}

fn all_close(a: &Vector, b: &Vector, config: &SolverConfig) -> bool {
    a.len() == b.len()
        && a.iter().zip(b.iter()).all(|(&x, &y)| {
            is_close(x, y, config.absolute_tolerance, config.relative_tolerance)
        })
}

/// Compare the inversion result (`a`) against the elimination result (`b`)
/// with the default tolerances
pub fn compare(a: &SolutionResult, b: &SolutionResult) -> ComparisonReport {
    compare_with(a, b, &SolverConfig::default())
}

/// Compare the inversion result (`inversion`) against the elimination
/// result (`elimination`)
pub fn compare_with(
    inversion: &SolutionResult,
    elimination: &SolutionResult,
    config: &SolverConfig,
) -> ComparisonReport {
    let consistency = match (inversion, elimination) {
        (SolutionResult::Solved(x_inv), SolutionResult::Solved(x_elim)) => {
            if all_close(x_inv, x_elim, config) {
                Consistency::Agree {
                    solution: x_elim.clone(),
                }
            } else {
                let deviation = max_deviation(x_inv, x_elim);
                log::error!(
                    "Inversion and elimination disagree: max deviation {:.3e}",
                    deviation
                );
                Consistency::Disagree {
                    max_deviation: deviation,
                }
            }
        }
        (SolutionResult::Solved(x), SolutionResult::Singular { .. }) => {
            Consistency::PartialFailure {
                solution: x.clone(),
                failed: Method::Elimination,
            }
        }
        (SolutionResult::Singular { .. }, SolutionResult::Solved(x)) => {
            Consistency::PartialFailure {
                solution: x.clone(),
                failed: Method::Inversion,
            }
        }
        (SolutionResult::Singular { .. }, SolutionResult::Singular { .. }) => {
            Consistency::BothSingular
        }
    };

    let interpretation = interpret(&consistency);
    ComparisonReport {
        inversion: inversion.clone(),
        elimination: elimination.clone(),
        agree: matches!(consistency, Consistency::Agree { .. }),
        consistency,
        interpretation,
    }
}

fn interpret(consistency: &Consistency) -> String {
    match consistency {
        Consistency::Agree { solution } => format!(
            "methods agree; the solution is {}",
            format_solution(solution)
        ),
        Consistency::Disagree { max_deviation } => format!(
            "methods disagree (max deviation {max_deviation:e}); this indicates an internal error"
        ),
        Consistency::PartialFailure { solution, failed } => format!(
            "the {} method failed; the solution from the {} method is {}",
            failed,
            failed.other(),
            format_solution(solution)
        ),
        Consistency::BothSingular => "no unique solution found".to_string(),
    }
}
