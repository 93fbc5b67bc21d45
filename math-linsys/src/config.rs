//! Solver tunables
//!
//! The thresholds are not hard requirements of the algorithms: they are
//! exposed here so callers can tighten or relax them for badly scaled input.

use crate::error::{LinsysError, Result};
use serde::{Deserialize, Serialize};

/// Pivot magnitude below which a system is treated as singular
pub const DEFAULT_SINGULARITY_THRESHOLD: f64 = 1e-12;

/// Absolute component of the agreement tolerance
pub const DEFAULT_ABSOLUTE_TOLERANCE: f64 = 1e-8;

/// Relative component of the agreement tolerance
pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 1e-5;

/// Solver configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Smallest pivot magnitude accepted during elimination and back-substitution
    #[serde(default = "default_singularity_threshold")]
    pub singularity_threshold: f64,
    /// Absolute tolerance when comparing two solutions
    #[serde(default = "default_absolute_tolerance")]
    pub absolute_tolerance: f64,
    /// Relative tolerance when comparing two solutions
    #[serde(default = "default_relative_tolerance")]
    pub relative_tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            singularity_threshold: default_singularity_threshold(),
            absolute_tolerance: default_absolute_tolerance(),
            relative_tolerance: default_relative_tolerance(),
        }
    }
}

fn default_singularity_threshold() -> f64 {
    DEFAULT_SINGULARITY_THRESHOLD
}

fn default_absolute_tolerance() -> f64 {
    DEFAULT_ABSOLUTE_TOLERANCE
}

fn default_relative_tolerance() -> f64 {
    DEFAULT_RELATIVE_TOLERANCE
}

impl SolverConfig {
    /// Set the singularity threshold
    pub fn with_singularity_threshold(mut self, threshold: f64) -> Self {
        self.singularity_threshold = threshold;
        self
    }

    /// Set the absolute agreement tolerance
    pub fn with_absolute_tolerance(mut self, tolerance: f64) -> Self {
        self.absolute_tolerance = tolerance;
        self
    }

    /// Set the relative agreement tolerance
    pub fn with_relative_tolerance(mut self, tolerance: f64) -> Self {
        self.relative_tolerance = tolerance;
        self
    }

    /// Reject negative or non-finite tunables
    pub fn validate(&self) -> Result<()> {
        check_non_negative("singularity_threshold", self.singularity_threshold)?;
        check_non_negative("absolute_tolerance", self.absolute_tolerance)?;
        check_non_negative("relative_tolerance", self.relative_tolerance)?;
        Ok(())
    }
}

fn check_non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LinsysError::InvalidConfig(format!(
            "{name} must be finite and non-negative, got {value}"
        )))
    }
}
