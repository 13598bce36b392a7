use interfacial_core::Snapshot;

/// The result of a grid search.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Position of the winner among the feasible points, in lattice order.
    pub index: usize,

    /// The winning point (rescaled, nudged coordinates).
    pub x: Vec<f64>,

    /// Objective value at the winning point.
    pub objective: f64,

    /// Snapshot at the winning point.
    pub snapshot: Snapshot<I, O>,

    /// Number of feasible points that were evaluated.
    pub feasible: usize,
}
