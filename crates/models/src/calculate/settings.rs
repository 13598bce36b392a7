use interfacial_solvers::optimization::{grid_search, nelder_mead};

/// Search controls shared by every free dimension of a calculation.
///
/// `limit` and `step` are applied to each free composition axis of the
/// coarse grid search; `refine_tol` bounds both the composition spread and
/// the objective spread of the Nelder–Mead refinement.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SearchSettings {
    pub limit: [f64; 2],
    pub step: f64,
    pub refine_tol: f64,
    pub max_iters: Option<usize>,
    pub max_evals: Option<usize>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            limit: [0.0, 1.0],
            step: 0.01,
            refine_tol: 1e-10,
            max_iters: None,
            max_evals: None,
        }
    }
}

impl SearchSettings {
    /// Grid search configuration for `dims` free dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if `dims` is zero or `limit`/`step` are invalid.
    pub fn grid_config(
        &self,
        dims: usize,
    ) -> Result<grid_search::Config, grid_search::ConfigError> {
        grid_search::Config::uniform(dims, self.limit, self.step)
    }

    /// Nelder–Mead configuration for the refinement stage.
    ///
    /// # Errors
    ///
    /// Returns an error if `refine_tol` is negative or non-finite.
    pub fn refine_config(&self) -> Result<nelder_mead::Config, nelder_mead::ConfigError> {
        let mut config = nelder_mead::Config::from_tol(self.refine_tol)?;
        if let Some(max_iters) = self.max_iters {
            config = config.with_max_iters(max_iters);
        }
        if let Some(max_evals) = self.max_evals {
            config = config.with_max_evals(max_evals);
        }
        Ok(config)
    }
}
