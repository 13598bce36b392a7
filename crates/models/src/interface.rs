//! Interfacial energy models.
//!
//! Each alloy model maps an interfacial [`Composition`] to one partial
//! interfacial energy per component (J/m²). The interfacial equilibrium is
//! the composition at which all partial energies agree, found by minimizing
//! [`EqualPartials`] with the model's pair weight.
//!
//! The coherent and solid/liquid models weight the pairwise differences
//! differently (10 and 1). Both weights are kept as calibrated.

mod coherent;
mod pure_metal;
mod solid_liquid;

pub use coherent::CoherentInterface;
pub use pure_metal::PureMetal;
pub use solid_liquid::{PartialExcess, SolidLiquidInterface};

use interfacial_core::Model;

use crate::{Composition, EqualPartials, ModelError};

/// An alloy interface model evaluated over the composition simplex.
pub trait InterfaceEnergyModel:
    Model<Input = Composition, Output = Vec<f64>, Error = ModelError>
{
    /// Weight applied to every pairwise difference in the objective.
    const WEIGHT: f64;

    /// Number of components, including the balance component.
    fn num_components(&self) -> usize;

    /// Returns the minimization problem paired with this model.
    fn problem(&self) -> EqualPartials {
        EqualPartials::new(Self::WEIGHT)
    }

    /// Partial interfacial energies at the free composition `x`.
    ///
    /// Returns `x.len() + 1` values, balance component first.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` does not have one entry per free component
    /// or a captured quantity returns the wrong number of values.
    fn infenergy(&self, x: &[f64]) -> Result<Vec<f64>, ModelError> {
        self.call(&Composition::from_free(x))
    }

    /// Weighted pairwise disagreement of the partial energies at `x`.
    ///
    /// # Errors
    ///
    /// See [`InterfaceEnergyModel::infenergy`].
    fn objective(&self, x: &[f64]) -> Result<f64, ModelError> {
        Ok(self.problem().score(&self.infenergy(x)?))
    }
}

/// Rejects compositions whose component count differs from the model's.
fn check_components(composition: &Composition, expected: usize) -> Result<(), ModelError> {
    let found = composition.num_components();
    if found == expected {
        Ok(())
    } else {
        Err(ModelError::LengthMismatch {
            name: "composition",
            expected,
            found,
        })
    }
}
