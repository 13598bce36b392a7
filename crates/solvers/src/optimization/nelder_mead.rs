//! Nelder–Mead simplex search for multi-variable minimization.
//!
//! # Algorithm
//!
//! The solver keeps a simplex of `n + 1` vertices in `n` dimensions, ordered
//! from best to worst objective. Each iteration replaces the worst vertex by
//! reflecting it through the centroid of the others, expanding or
//! contracting that move depending on how the reflected point ranks, and
//! shrinks the whole simplex toward the best vertex when no move helps.
//!
//! The initial simplex is `x0` plus one vertex per axis, displaced by 5% of
//! the coordinate (or by `0.00025` when the coordinate is zero).
//!
//! # Termination
//!
//! The search converges when the largest coordinate distance from the best
//! vertex and the largest objective gap to the best vertex are both within
//! the configured tolerances. It stops with [`Status::MaxIters`] when the
//! iteration or evaluation budget runs out; this is not an error and the
//! best vertex found so far is returned.
//!
//! # Properties
//!
//! - **Unconstrained**: no bounds are enforced on the vertices
//! - **Monotonic**: the reported objective is never worse than at `x0`
//! - **Deterministic**: identical inputs give bit-identical results
//! - **NaN tolerant**: NaN objectives rank below every other value
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] after every completed iteration. Observers
//! can return [`Action::StopEarly`] to halt with the current best vertex.

mod action;
mod config;
mod error;
mod event;
mod simplex;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Event, Step};
pub use solution::{Solution, Status};

use interfacial_core::{MinimizationProblem, Model, Observer};
use tracing::{debug, trace};

use crate::optimization::evaluate::{Evaluation, evaluate};

use simplex::Simplex;

const REFLECT: f64 = 1.0;
const EXPAND: f64 = 2.0;
const CONTRACT: f64 = 0.5;
const SHRINK: f64 = 0.5;

/// Relative displacement of a nonzero coordinate in the initial simplex.
const NONZERO_DELTA: f64 = 0.05;

/// Displacement of a zero coordinate in the initial simplex.
const ZERO_DELTA: f64 = 0.00025;

/// Finds a local minimum of the objective starting from `x0`.
///
/// The observer receives an [`Event`] after each iteration.
/// See the [module docs](self) for details.
///
/// # Errors
///
/// Returns an error if `x0` is empty or non-finite, or if the model or
/// problem fails during an evaluation.
pub fn minimize<M, P, Obs>(
    model: &M,
    problem: &P,
    x0: &[f64],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: MinimizationProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    if x0.is_empty() {
        return Err(Error::EmptyStart);
    }
    if let Some((index, &value)) = x0.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(Error::NonFiniteStart { index, value });
    }

    let dims = x0.len();
    let max_iters = config.max_iters(dims);
    let max_evals = config.max_evals(dims);

    let mut evaluator = Evaluator {
        model,
        problem,
        evals: 0,
    };

    let mut vertices = Vec::with_capacity(dims + 1);
    vertices.push(evaluator.eval(x0.to_vec())?);
    for axis in 0..dims {
        let mut x = x0.to_vec();
        #[allow(clippy::float_cmp)]
        let displaced = if x[axis] == 0.0 {
            ZERO_DELTA
        } else {
            (1.0 + NONZERO_DELTA) * x[axis]
        };
        x[axis] = displaced;
        vertices.push(evaluator.eval(x)?);
    }
    let mut simplex = Simplex::new(vertices);

    let mut iters = 0;
    let status = loop {
        if simplex.x_spread() <= config.x_abs_tol() && simplex.f_spread() <= config.f_abs_tol() {
            break Status::Converged;
        }
        if iters >= max_iters || evaluator.evals >= max_evals {
            break Status::MaxIters;
        }

        let step = iterate(&mut simplex, &mut evaluator)?;
        iters += 1;
        simplex.sort();

        let best = simplex.best();
        trace!(iter = iters, ?step, x = ?best.x, objective = best.objective, "nelder-mead step");

        let event = Event {
            iter: iters,
            step,
            x: &best.x,
            objective: best.objective,
            x_spread: simplex.x_spread(),
            f_spread: simplex.f_spread(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            break Status::StoppedByObserver;
        }
    };

    debug!(
        ?status,
        iters,
        evals = evaluator.evals,
        objective = simplex.best().objective,
        "nelder-mead finished"
    );

    Ok(simplex.into_solution(status, iters, evaluator.evals))
}

/// Finds a local minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if `x0` is empty or non-finite, or if the model or
/// problem fails during an evaluation.
pub fn minimize_unobserved<M, P>(
    model: &M,
    problem: &P,
    x0: &[f64],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: MinimizationProblem<Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, x0, config, ())
}

/// Performs one reflect/expand/contract/shrink move on a sorted simplex.
fn iterate<M, P>(
    simplex: &mut Simplex<M::Input, M::Output>,
    evaluator: &mut Evaluator<'_, M, P>,
) -> Result<Step, Error>
where
    M: Model,
    P: MinimizationProblem<Input = M::Input, Output = M::Output>,
{
    let centroid = simplex.centroid();
    let worst_x = simplex.worst().x.clone();
    let along = |t: f64| -> Vec<f64> {
        centroid
            .iter()
            .zip(&worst_x)
            .map(|(c, w)| (1.0 + t) * c - t * w)
            .collect()
    };

    let reflected = evaluator.eval(along(REFLECT))?;

    if reflected.objective < simplex.best().objective {
        let expanded = evaluator.eval(along(REFLECT * EXPAND))?;
        if expanded.objective < reflected.objective {
            simplex.replace_worst(expanded);
            return Ok(Step::Expand);
        }
        simplex.replace_worst(reflected);
        return Ok(Step::Reflect);
    }

    if reflected.objective < simplex.second_worst().objective {
        simplex.replace_worst(reflected);
        return Ok(Step::Reflect);
    }

    if reflected.objective < simplex.worst().objective {
        let contracted = evaluator.eval(along(CONTRACT * REFLECT))?;
        if contracted.objective <= reflected.objective {
            simplex.replace_worst(contracted);
            return Ok(Step::ContractOutside);
        }
    } else {
        let contracted = evaluator.eval(along(-CONTRACT))?;
        if contracted.objective < simplex.worst().objective {
            simplex.replace_worst(contracted);
            return Ok(Step::ContractInside);
        }
    }

    let shrunk = simplex
        .shrunk(SHRINK)
        .into_iter()
        .map(|x| evaluator.eval(x))
        .collect::<Result<Vec<_>, _>>()?;
    simplex.replace_all_but_best(shrunk);
    Ok(Step::Shrink)
}

/// Evaluates points and counts evaluations.
struct Evaluator<'a, M, P> {
    model: &'a M,
    problem: &'a P,
    evals: usize,
}

impl<M, P> Evaluator<'_, M, P>
where
    M: Model,
    P: MinimizationProblem<Input = M::Input, Output = M::Output>,
{
    fn eval(&mut self, x: Vec<f64>) -> Result<Evaluation<M::Input, M::Output>, Error> {
        self.evals += 1;
        Ok(evaluate(self.model, self.problem, &x)?)
    }
}
