//! Bisection root finding for scalar equations.
//!
//! The solver halves a bracket `[a, b]` whose endpoint residuals have
//! opposite signs, keeping the half that still contains a sign change.
//!
//! # Termination
//!
//! The search converges when the bracket is narrower than the x tolerance
//! or a residual lands within the residual tolerance. An endpoint that
//! already satisfies the residual tolerance is returned without iterating.
//! Running out of iterations is not an error: the evaluation with the
//! smallest residual magnitude is returned with [`Status::MaxIters`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per midpoint evaluation. Observers can
//! return [`Action::StopEarly`] to halt with the best evaluation so far.

mod bracket;
mod config;
mod error;
mod solution;


pub use bracket::{BracketError, Sign};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use solution::{Solution, Status};

use interfacial_core::{EquationProblem, Model, Observer};
use tracing::{debug, trace};

use crate::equation::{Evaluation, evaluate};

use bracket::Bracket;

/// Control actions supported by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the best evaluation found so far.
    StopEarly,
}

/// Iteration event emitted by the bisection solver.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a, I, O> {
    /// Iteration counter, starting at 1.
    pub iter: usize,

    /// Bracket that was halved to produce this midpoint.
    pub bracket: [f64; 2],

    /// Evaluation at the midpoint.
    pub eval: &'a Evaluation<I, O>,
}

/// Finds a root of a scalar equation inside `bracket`.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or does not contain a sign
/// change, if a residual is not finite, or if the model or problem fails.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let [a, b] = bracket::ordered(bracket)?;

    let left = checked(evaluate(model, problem, a)?)?;
    if left.residual.abs() <= config.residual_tol() {
        return Ok(Solution::from_eval(left, Status::Converged, 0));
    }

    let right = checked(evaluate(model, problem, b)?)?;
    if right.residual.abs() <= config.residual_tol() {
        return Ok(Solution::from_eval(right, Status::Converged, 0));
    }

    let mut bracket = Bracket::new(a, b, left.residual, right.residual)?;
    let mut best = closer_to_root(left, right);

    for iter in 1..=config.max_iters() {
        let mid = bracket.midpoint();
        let eval = checked(evaluate(model, problem, mid)?)?;
        let residual = eval.residual;

        trace!(iter, x = mid, residual, "bisection step");

        let event = Event {
            iter,
            bracket: bracket.as_array(),
            eval: &eval,
        };
        let action = observer.observe(&event);

        let x_converged = bracket.width() <= config.x_abs_tol();
        let residual_converged = residual.abs() <= config.residual_tol();
        bracket.shrink(mid, Sign::of(residual));
        best = closer_to_root(best, eval);

        if let Some(Action::StopEarly) = action {
            return Ok(Solution::from_eval(best, Status::StoppedByObserver, iter));
        }
        if x_converged || residual_converged {
            debug!(iter, x = best.x, residual = best.residual, "bisection converged");
            return Ok(Solution::from_eval(best, Status::Converged, iter));
        }
    }

    debug!(
        iters = config.max_iters(),
        x = best.x,
        residual = best.residual,
        "bisection hit iteration limit"
    );
    Ok(Solution::from_eval(best, Status::MaxIters, config.max_iters()))
}

/// Finds a root of a scalar equation without observer support.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, bracket, config, ())
}

/// Rejects evaluations with a non-finite residual.
fn checked<I, O>(eval: Evaluation<I, O>) -> Result<Evaluation<I, O>, Error> {
    let residual = eval.residual;
    if residual.is_finite() {
        Ok(eval)
    } else {
        Err(Error::NonFiniteResidual {
            x: eval.x,
            residual,
        })
    }
}

/// Returns whichever evaluation has the smaller residual magnitude.
///
/// Ties keep the incumbent.
fn closer_to_root<I, O>(
    incumbent: Evaluation<I, O>,
    candidate: Evaluation<I, O>,
) -> Evaluation<I, O> {
    if candidate.residual.abs() < incumbent.residual.abs() {
        candidate
    } else {
        incumbent
    }
}
