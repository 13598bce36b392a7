//! Exhaustive grid search over a composition lattice.
//!
//! # Algorithm
//!
//! 1. Build a lattice on the unit hypercube with `trunc(1 / step)` intervals
//!    per axis (see [`unit_lattice`]).
//! 2. Rescale every lattice point into the configured `[low, high)` range of
//!    its axis.
//! 3. Keep only points whose coordinates sum to less than one, so that the
//!    implicit balance fraction stays positive.
//! 4. Evaluate the objective once per feasible point and keep the minimum.
//!    Ties resolve to the first point in lattice order; non-finite objective
//!    values never win.
//!
//! Feasibility is judged on the lattice coordinates before the boundary
//! nudge is applied, while the objective is evaluated at the nudged
//! coordinates. A lattice corner such as `x = [1.0]` is therefore always
//! discarded even though its nudged value lies just below one.
//!
//! The evaluation count grows as the product of the per-axis point counts,
//! which is acceptable for the one to three free dimensions of typical
//! alloy systems.
//!
//! # Parallel evaluation
//!
//! With the `parallel` feature, [`search_parallel`] evaluates the feasible
//! points on the rayon thread pool. Results are gathered in lattice order,
//! so the selected point is identical to [`search`].

mod config;
mod error;
mod lattice;
mod solution;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use lattice::{DEFAULT_TOL, unit_lattice};
pub use solution::Solution;

use interfacial_core::{MinimizationProblem, Model};
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::optimization::evaluate::{EvaluateResult, Evaluation, evaluate};

use lattice::{nudge, raw_lattice};

/// Finds the lattice point with the smallest objective.
///
/// # Errors
///
/// Returns [`Error::NoFeasiblePoints`] if every rescaled lattice point
/// violates the simplex constraint, [`Error::NoFiniteObjective`] if no
/// feasible point has a finite objective, or the first model/problem error
/// encountered in lattice order.
pub fn search<M, P>(
    model: &M,
    problem: &P,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: MinimizationProblem<Input = M::Input, Output = M::Output>,
{
    let candidates = feasible_points(config)?;
    let feasible = candidates.len();

    let evaluations = candidates.iter().map(|x| evaluate(model, problem, x));

    select_best::<M, P>(evaluations, feasible)
}

/// Finds the lattice point with the smallest objective, evaluating the
/// feasible points in parallel.
///
/// # Errors
///
/// Same conditions as [`search`]. When several evaluations fail, the error
/// of the earliest failing point in lattice order is returned.
#[cfg(feature = "parallel")]
pub fn search_parallel<M, P>(
    model: &M,
    problem: &P,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model + Sync,
    P: MinimizationProblem<Input = M::Input, Output = M::Output> + Sync,
    M::Input: Send,
    M::Output: Send,
    P::Error: Send,
{
    let candidates = feasible_points(config)?;
    let feasible = candidates.len();

    let evaluations: Vec<EvaluateResult<M, P>> = candidates
        .par_iter()
        .map(|x| evaluate(model, problem, x))
        .collect();

    select_best::<M, P>(evaluations.into_iter(), feasible)
}

/// Rescales the lattice into the configured limits and drops infeasible points.
///
/// Returned points carry the nudged coordinates, in lattice order.
fn feasible_points(config: &Config) -> Result<Vec<Vec<f64>>, Error> {
    let lattice = raw_lattice(&config.intervals());
    let size = lattice.len();

    let points: Vec<Vec<f64>> = lattice
        .into_iter()
        .filter(|p| is_feasible(&rescale(p, config.limits())))
        .map(|p| {
            let nudged: Vec<f64> = p.iter().map(|v| nudge(*v, config.tol())).collect();
            rescale(&nudged, config.limits())
        })
        .collect();

    debug!(lattice = size, feasible = points.len(), "built search lattice");

    if points.is_empty() {
        return Err(Error::NoFeasiblePoints { lattice: size });
    }

    Ok(points)
}

/// Maps a unit-hypercube point into the per-axis `[low, high)` limits.
fn rescale(point: &[f64], limits: &[[f64; 2]]) -> Vec<f64> {
    point
        .iter()
        .zip(limits)
        .map(|(p, [low, high])| low + p * (high - low))
        .collect()
}

/// Returns true if the free fractions leave room for the balance component.
fn is_feasible(x: &[f64]) -> bool {
    x.iter().sum::<f64>() < 1.0
}

/// Keeps the first evaluation with the smallest finite objective.
fn select_best<M, P>(
    evaluations: impl Iterator<Item = EvaluateResult<M, P>>,
    feasible: usize,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: MinimizationProblem<Input = M::Input, Output = M::Output>,
{
    let mut best: Option<(usize, Evaluation<M::Input, M::Output>)> = None;

    for (index, result) in evaluations.enumerate() {
        let eval = result?;
        trace!(index, x = ?eval.x, objective = eval.objective, "evaluated lattice point");

        if !eval.objective.is_finite() {
            continue;
        }
        let improves = best
            .as_ref()
            .is_none_or(|(_, current)| eval.objective < current.objective);
        if improves {
            best = Some((index, eval));
        }
    }

    let (index, eval) = best.ok_or(Error::NoFiniteObjective { feasible })?;
    debug!(index, x = ?eval.x, objective = eval.objective, "grid search finished");

    Ok(Solution {
        index,
        x: eval.x,
        objective: eval.objective,
        snapshot: eval.snapshot,
        feasible,
    })
}
