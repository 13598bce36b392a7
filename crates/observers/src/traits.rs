//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once and used with several solvers.
//!
//! # Example
//!
//! ```rust
//! use interfacial_core::Observer;
//! use interfacial_observers::traits::{CanStopEarly, HasObjective};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.objective() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use interfacial_solvers::{equation::bisection, optimization::nelder_mead};

/// An event emitted once per solver iteration.
pub trait HasIteration {
    /// Returns the 1-based iteration counter.
    fn iter(&self) -> usize;
}

/// An event that carries a residual value.
pub trait HasResidual {
    fn residual(&self) -> f64;
}

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective of the best point known at this event.
    fn objective(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasIteration for nelder_mead::Event<'_> {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasObjective for nelder_mead::Event<'_> {
    fn objective(&self) -> f64 {
        self.objective
    }
}

impl<I, O> HasIteration for bisection::Event<'_, I, O> {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl<I, O> HasResidual for bisection::Event<'_, I, O> {
    fn residual(&self) -> f64 {
        self.eval.residual
    }
}

impl CanStopEarly for nelder_mead::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
