//! Interfacial energy models for alloy phase boundaries.
//!
//! The alloy models ([`CoherentInterface`], [`SolidLiquidInterface`]) turn a
//! trial interfacial composition into one partial interfacial energy per
//! component. The interfacial equilibrium is where those partial energies
//! agree; [`calculate`] finds it with the solvers from
//! `interfacial-solvers` and packages the result.
//!
//! Thermodynamic inputs (chemical potentials, partial excess Gibbs energies,
//! molar volumes) enter through the [`Partials`] trait, which closures over
//! the free mole fractions implement directly.

mod composition;
mod error;
mod partials;
mod problem;

pub mod calculate;
pub mod constants;
pub mod interface;
pub mod melting;
pub mod property;

pub use composition::{Composition, CompositionError};
pub use error::ModelError;
pub use interface::{
    CoherentInterface, InterfaceEnergyModel, PartialExcess, PureMetal, SolidLiquidInterface,
};
pub use partials::{AtTemperature, PerComponent, Partials, TemperatureDependent};
pub use problem::EqualPartials;
