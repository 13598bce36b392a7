//! Tracing-based progress reporting for solver iterations.

use interfacial_core::Observer;
use interfacial_solvers::{equation::bisection, optimization::nelder_mead};
use tracing::{debug, trace};

/// Reports solver iterations through `tracing`.
///
/// Every iteration is logged at `trace` level, and every `every`-th
/// iteration is also logged at `debug` level. The observer never steers
/// the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    every: usize,
    seen: usize,
}

impl LogObserver {
    /// Creates an observer that logs at `debug` level every `every` iterations.
    ///
    /// An interval of zero disables `debug` output.
    #[must_use]
    pub fn new(every: usize) -> Self {
        Self { every, seen: 0 }
    }

    /// Returns the number of events observed so far.
    #[must_use]
    pub fn seen(&self) -> usize {
        self.seen
    }

    fn record(&mut self, iter: usize) -> bool {
        self.seen += 1;
        self.every != 0 && iter % self.every == 0
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Observer<nelder_mead::Event<'_>, nelder_mead::Action> for LogObserver {
    fn observe(&mut self, event: &nelder_mead::Event<'_>) -> Option<nelder_mead::Action> {
        trace!(
            iter = event.iter,
            step = ?event.step,
            x = ?event.x,
            objective = event.objective,
            "nelder-mead iteration",
        );
        if self.record(event.iter) {
            debug!(
                iter = event.iter,
                objective = event.objective,
                x_spread = event.x_spread,
                f_spread = event.f_spread,
                "nelder-mead progress",
            );
        }
        None
    }
}

impl<I, O> Observer<bisection::Event<'_, I, O>, bisection::Action> for LogObserver {
    fn observe(&mut self, event: &bisection::Event<'_, I, O>) -> Option<bisection::Action> {
        let x = event.eval.x;
        let residual = event.eval.residual;
        trace!(iter = event.iter, x, residual, "bisection iteration");
        if self.record(event.iter) {
            debug!(
                iter = event.iter,
                left = event.bracket[0],
                right = event.bracket[1],
                residual,
                "bisection progress",
            );
        }
        None
    }
}
