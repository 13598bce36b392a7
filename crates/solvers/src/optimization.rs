//! Solvers for minimization problems.
//!
//! A [`MinimizationProblem`] maps solver variables `x: &[f64]` to model
//! inputs, calls the model, and extracts a scalar objective. Solvers in this
//! module search for the `x` that minimizes that objective.
//!
//! # Solvers
//!
//! - [`grid_search`]: evaluates every feasible point of a rescaled lattice
//!   and keeps the best; used to bracket a starting point
//! - [`nelder_mead`]: simplex-reflection descent from a starting point
//!
//! [`MinimizationProblem`]: interfacial_core::MinimizationProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod grid_search;
pub mod nelder_mead;
