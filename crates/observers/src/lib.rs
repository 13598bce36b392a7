//! Reusable observers for interfacial equilibrium solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits
//! that work across the solvers in `interfacial-solvers`.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasResidual`], [`HasObjective`], [`CanStopEarly`])
//! - [`log`]: [`LogObserver`], which reports solver iterations via `tracing`
//! - [`stop`]: observers that stop a solver once a target is reached
//!
//! [`Observer`]: interfacial_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasResidual`]: traits::HasResidual
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod log;
pub mod stop;
pub mod traits;

pub use log::LogObserver;
pub use stop::{ObjectiveBelow, ResidualBelow};
