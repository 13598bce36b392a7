use interfacial_core::Model;

use crate::{
    Composition, ModelError, Partials,
    constants::AVOGADRO,
    error::check_partials,
};

use super::{InterfaceEnergyModel, check_components};

/// Structural factor of the coherent interface energy.
const COHERENT_FACTOR: f64 = 2.48;

/// Coherent solid/solid interface between phases `alpha` and `beta`.
///
/// For component `i` at interfacial composition `x`:
///
/// ```text
/// sigma_i = 2.48 * (0.5 * (mu_alpha_i(x) + mu_beta_i(x)) - mueq_i)
///                * vm_i(x)^(-2/3) * N_A^(-1/3)
/// ```
///
/// where `mueq` holds the chemical potentials at the two-phase equilibrium
/// and `vm_i` the interfacial partial molar volumes.
#[derive(Debug, Clone)]
pub struct CoherentInterface<A, B, V> {
    mu_alpha: A,
    mu_beta: B,
    mueq: Vec<f64>,
    molar_volumes: V,
}

impl<A, B, V> CoherentInterface<A, B, V>
where
    A: Partials,
    B: Partials,
    V: Partials,
{
    /// Creates a coherent interface model for `mueq.len()` components.
    ///
    /// # Errors
    ///
    /// Returns an error if `mueq` is empty.
    pub fn new(
        mu_alpha: A,
        mu_beta: B,
        mueq: Vec<f64>,
        molar_volumes: V,
    ) -> Result<Self, ModelError> {
        if mueq.is_empty() {
            return Err(ModelError::LengthMismatch {
                name: "mueq",
                expected: 1,
                found: 0,
            });
        }

        Ok(Self {
            mu_alpha,
            mu_beta,
            mueq,
            molar_volumes,
        })
    }

    /// Equilibrium chemical potentials, one per component.
    pub fn mueq(&self) -> &[f64] {
        &self.mueq
    }
}

impl<A, B, V> Model for CoherentInterface<A, B, V>
where
    A: Partials,
    B: Partials,
    V: Partials,
{
    type Input = Composition;
    type Output = Vec<f64>;
    type Error = ModelError;

    fn call(&self, composition: &Composition) -> Result<Vec<f64>, ModelError> {
        let n = self.mueq.len();
        check_components(composition, n)?;

        let alpha = check_partials("mu_alpha", self.mu_alpha.partials(composition), n)?;
        let beta = check_partials("mu_beta", self.mu_beta.partials(composition), n)?;
        let volumes = check_partials(
            "molar_volumes",
            self.molar_volumes.partials(composition),
            n,
        )?;
        let per_atom = AVOGADRO.powf(-1.0 / 3.0);

        Ok((0..n)
            .map(|i| {
                let driving = 0.5 * (alpha[i] + beta[i]) - self.mueq[i];
                COHERENT_FACTOR * driving * volumes[i].powf(-2.0 / 3.0) * per_atom
            })
            .collect())
    }
}

impl<A, B, V> InterfaceEnergyModel for CoherentInterface<A, B, V>
where
    A: Partials,
    B: Partials,
    V: Partials,
{
    const WEIGHT: f64 = 10.0;

    fn num_components(&self) -> usize {
        self.mueq.len()
    }
}
