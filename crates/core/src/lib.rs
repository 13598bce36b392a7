//! Core traits and types shared by the interfacial equilibrium crates.
//!
//! This crate defines the abstractions that solvers, observers, and physics
//! models build on:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`Snapshot`]: a captured input/output pair from a model call
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`MinimizationProblem`], [`EquationProblem`]: problem traits that adapt
//!   solver variables to model inputs and extract metrics from outputs

mod model;
mod observer;
mod problems;

pub use observer::Observer;
pub use problems::{EquationProblem, MinimizationProblem};
pub use {model::Model, model::Snapshot};
