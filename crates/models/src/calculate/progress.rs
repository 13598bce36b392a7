use interfacial_core::Observer;
use interfacial_solvers::optimization::nelder_mead::{self, Action};
use tracing::{info, trace};

/// Progress of a two-stage interfacial equilibrium search.
///
/// Observers may return [`Action::StopEarly`] after the coarse stage to skip
/// refinement, or during refinement to stop at the current best vertex.
/// Actions returned for other events are ignored.
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    /// The coarse grid search is about to start.
    Started {
        dims: usize,
        limit: [f64; 2],
        step: f64,
    },

    /// The coarse grid search picked its best lattice point.
    CoarseFinished {
        x: &'a [f64],
        objective: f64,
        feasible: usize,
    },

    /// One Nelder–Mead iteration completed.
    Refining(nelder_mead::Event<'a>),

    /// The search finished at `x`.
    Finished { x: &'a [f64], objective: f64 },
}

/// Reports search progress through `tracing`.
///
/// Stage transitions are logged at `info`, refinement iterations at `trace`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl<'a> Observer<Progress<'a>, Action> for LogProgress {
    fn observe(&mut self, event: &Progress<'a>) -> Option<Action> {
        match *event {
            Progress::Started { dims, limit, step } => {
                info!(dims, ?limit, step, "looking for interfacial equilibrium composition");
            }
            Progress::CoarseFinished {
                x,
                objective,
                feasible,
            } => {
                info!(?x, objective, feasible, "coarse search finished");
            }
            Progress::Refining(step) => {
                trace!(
                    iter = step.iter,
                    x = ?step.x,
                    objective = step.objective,
                    "refining"
                );
            }
            Progress::Finished { x, objective } => {
                info!(?x, objective, "interfacial equilibrium found");
            }
        }
        None
    }
}
