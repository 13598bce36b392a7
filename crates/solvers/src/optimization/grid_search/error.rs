use std::error::Error as StdError;

use crate::optimization::evaluate::EvalError;

/// Errors that can occur during a grid search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("none of the {lattice} lattice points satisfy the simplex constraint")]
    NoFeasiblePoints { lattice: usize },

    #[error("none of the {feasible} feasible points has a finite objective")]
    NoFiniteObjective { feasible: usize },

    #[error("model error: {0}")]
    Model(Box<dyn StdError + Send + Sync>),

    #[error("problem error: {0}")]
    Problem(Box<dyn StdError + Send + Sync>),
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}
