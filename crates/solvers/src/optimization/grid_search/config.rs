use thiserror::Error;

use super::lattice::DEFAULT_TOL;

/// Configuration for the grid search.
///
/// Holds one `[low, high)` limit and one step fraction per free dimension,
/// plus the boundary nudge applied to lattice coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    limits: Vec<[f64; 2]>,
    steps: Vec<f64>,
    tol: f64,
}

/// Errors that can occur when validating a grid search config.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("at least one dimension is required")]
    Empty,

    #[error("got {limits} limits but {steps} steps")]
    DimensionMismatch { limits: usize, steps: usize },

    #[error("limit {dim} must be finite with low <= high, got [{low}, {high}]")]
    Limit { dim: usize, low: f64, high: f64 },

    #[error("step {dim} must be in (0, 1], got {step}")]
    Step { dim: usize, step: f64 },

    #[error("tol must be finite and in [0, 1), got {0}")]
    Tol(f64),
}

impl Config {
    /// Creates a new config with validated limits and steps.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions disagree, a limit is non-finite or
    /// reversed, or a step would give an empty axis.
    pub fn new(limits: Vec<[f64; 2]>, steps: Vec<f64>) -> Result<Self, ConfigError> {
        if limits.is_empty() {
            return Err(ConfigError::Empty);
        }
        if limits.len() != steps.len() {
            return Err(ConfigError::DimensionMismatch {
                limits: limits.len(),
                steps: steps.len(),
            });
        }
        for (dim, &[low, high]) in limits.iter().enumerate() {
            if !low.is_finite() || !high.is_finite() || low > high {
                return Err(ConfigError::Limit { dim, low, high });
            }
        }
        for (dim, &step) in steps.iter().enumerate() {
            if !step.is_finite() || step <= 0.0 || step > 1.0 {
                return Err(ConfigError::Step { dim, step });
            }
        }

        Ok(Self {
            limits,
            steps,
            tol: DEFAULT_TOL,
        })
    }

    /// Creates a config that uses the same limit and step on every axis.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Config::new`].
    pub fn uniform(dims: usize, limit: [f64; 2], step: f64) -> Result<Self, ConfigError> {
        Self::new(vec![limit; dims], vec![step; dims])
    }

    /// Replaces the boundary nudge applied to lattice coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is negative, non-finite, or not below one.
    pub fn with_tol(mut self, tol: f64) -> Result<Self, ConfigError> {
        if !tol.is_finite() || !(0.0..1.0).contains(&tol) {
            return Err(ConfigError::Tol(tol));
        }
        self.tol = tol;
        Ok(self)
    }

    /// Returns the number of free dimensions.
    #[must_use]
    pub fn dims(&self) -> usize {
        self.limits.len()
    }

    /// Returns the per-axis search limits.
    #[must_use]
    pub fn limits(&self) -> &[[f64; 2]] {
        &self.limits
    }

    /// Returns the per-axis step fractions.
    #[must_use]
    pub fn steps(&self) -> &[f64] {
        &self.steps
    }

    /// Returns the boundary nudge.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Returns the number of lattice intervals along each axis.
    ///
    /// This is `1 / step` truncated toward zero, so it is at least one for
    /// any validated step.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn intervals(&self) -> Vec<usize> {
        self.steps.iter().map(|step| (1.0 / step) as usize).collect()
    }
}
