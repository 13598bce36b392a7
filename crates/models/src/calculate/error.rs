use interfacial_solvers::optimization::{grid_search, nelder_mead};
use thiserror::Error;

use crate::{CompositionError, ModelError, melting::MeltingError};

/// Errors that can occur in an end-to-end interfacial energy calculation.
#[derive(Debug, Error)]
pub enum CalculationError {
    #[error("invalid model input: {0}")]
    Model(#[from] ModelError),

    #[error("invalid initial composition: {0}")]
    Composition(#[from] CompositionError),

    #[error("invalid grid settings: {0}")]
    Grid(#[from] grid_search::ConfigError),

    #[error("invalid refinement settings: {0}")]
    Refine(#[from] nelder_mead::ConfigError),

    #[error("coarse search failed: {0}")]
    CoarseSearch(#[from] grid_search::Error),

    #[error("refinement failed: {0}")]
    LocalRefine(#[from] nelder_mead::Error),

    #[error("melting enthalpy unavailable: {0}")]
    Melting(#[from] MeltingError),
}
