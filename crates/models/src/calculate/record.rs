use interfacial_solvers::optimization::{grid_search, nelder_mead};

/// Interfacial energy of a pure metal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PureMetalEnergy {
    pub component: String,
    pub temperature: f64,
    pub melting_enthalpy: f64,
    pub interfacial_energy: f64,
}

/// Interfacial energy of an alloy at its interfacial equilibrium.
///
/// Compositions list every component, balance component first, in the
/// order of `components`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterfacialEnergy {
    pub components: Vec<String>,
    pub temperature: f64,
    pub initial_composition: Vec<f64>,
    pub interfacial_composition: Vec<f64>,
    pub partial_energies: Vec<f64>,

    /// Mean of the partial interfacial energies.
    pub interfacial_energy: f64,

    pub coarse: CoarseSummary,

    /// Absent when an observer stopped the search after the coarse stage.
    pub refine: Option<RefineSummary>,
}

/// Outcome of the coarse grid search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoarseSummary {
    /// Position of the winner among the feasible lattice points.
    pub index: usize,
    pub x: Vec<f64>,
    pub objective: f64,
    pub feasible: usize,
}

impl<I, O> From<&grid_search::Solution<I, O>> for CoarseSummary {
    fn from(solution: &grid_search::Solution<I, O>) -> Self {
        Self {
            index: solution.index,
            x: solution.x.clone(),
            objective: solution.objective,
            feasible: solution.feasible,
        }
    }
}

/// Outcome of the Nelder–Mead refinement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RefineSummary {
    pub x: Vec<f64>,
    pub objective: f64,
    pub status: RefineStatus,
    pub iters: usize,
    pub evals: usize,
}

impl<I, O> From<&nelder_mead::Solution<I, O>> for RefineSummary {
    fn from(solution: &nelder_mead::Solution<I, O>) -> Self {
        Self {
            x: solution.x.clone(),
            objective: solution.objective,
            status: solution.status.into(),
            iters: solution.iters,
            evals: solution.evals,
        }
    }
}

/// How the refinement stage ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RefineStatus {
    Converged,
    MaxIters,
    StoppedByObserver,
}

impl From<nelder_mead::Status> for RefineStatus {
    fn from(status: nelder_mead::Status) -> Self {
        match status {
            nelder_mead::Status::Converged => Self::Converged,
            nelder_mead::Status::MaxIters => Self::MaxIters,
            nelder_mead::Status::StoppedByObserver => Self::StoppedByObserver,
        }
    }
}
