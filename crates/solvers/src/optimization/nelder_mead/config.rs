use thiserror::Error;

/// Configuration for the Nelder–Mead solver.
///
/// The iteration and evaluation budgets default to `200` per dimension when
/// not set explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    x_abs_tol: f64,
    f_abs_tol: f64,
    max_iters: Option<usize>,
    max_evals: Option<usize>,
}

/// Errors that can occur when validating a Nelder–Mead solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_abs_tol must be finite and non-negative")]
    XAbs,

    #[error("f_abs_tol must be finite and non-negative")]
    FAbs,
}

/// Iterations and evaluations allowed per dimension by default.
const BUDGET_PER_DIM: usize = 200;

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-10, 1e-10).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn new(x_abs_tol: f64, f_abs_tol: f64) -> Result<Self, ConfigError> {
        if !x_abs_tol.is_finite() || x_abs_tol < 0.0 {
            return Err(ConfigError::XAbs);
        }
        if !f_abs_tol.is_finite() || f_abs_tol < 0.0 {
            return Err(ConfigError::FAbs);
        }

        Ok(Self {
            x_abs_tol,
            f_abs_tol,
            max_iters: None,
            max_evals: None,
        })
    }

    /// Creates a config that uses one tolerance for both x and objective.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is negative or non-finite.
    pub fn from_tol(tol: f64) -> Result<Self, ConfigError> {
        Self::new(tol, tol)
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = Some(max_iters);
        self
    }

    /// Sets the maximum number of objective evaluations.
    #[must_use]
    pub fn with_max_evals(mut self, max_evals: usize) -> Self {
        self.max_evals = Some(max_evals);
        self
    }

    /// Returns the absolute tolerance for the simplex spread in x.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }

    /// Returns the absolute tolerance for the simplex spread in objective.
    #[must_use]
    pub fn f_abs_tol(&self) -> f64 {
        self.f_abs_tol
    }

    /// Returns the iteration limit for a problem with `dims` variables.
    #[must_use]
    pub fn max_iters(&self, dims: usize) -> usize {
        self.max_iters.unwrap_or(BUDGET_PER_DIM * dims)
    }

    /// Returns the evaluation limit for a problem with `dims` variables.
    #[must_use]
    pub fn max_evals(&self, dims: usize) -> usize {
        self.max_evals.unwrap_or(BUDGET_PER_DIM * dims)
    }
}
