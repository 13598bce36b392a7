//! Numerical solvers for interfacial equilibrium searches.
//!
//! - [`optimization::grid_search`]: exhaustive search over a composition
//!   lattice restricted to the simplex
//! - [`optimization::nelder_mead`]: derivative-free local refinement
//! - [`equation::bisection`]: bracketed scalar root finding
//!
//! Solvers are generic over a [`Model`] and a problem trait from
//! `interfacial-core`; they know nothing about the physics being evaluated.
//!
//! [`Model`]: interfacial_core::Model

pub mod equation;
pub mod optimization;
