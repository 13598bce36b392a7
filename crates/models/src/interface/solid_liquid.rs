use interfacial_core::Model;

use crate::{
    Composition, ModelError, Partials,
    constants::GAS_CONSTANT,
    error::{check_len, check_partials},
};

use super::{InterfaceEnergyModel, check_components};

/// Partial excess Gibbs energies (J/mol) of the interface and both bulk phases.
#[derive(Debug, Clone)]
pub struct PartialExcess<I, S, L> {
    pub interface: I,
    pub solid: S,
    pub liquid: L,
}

/// Solid/liquid interface of an alloy at fixed temperature.
///
/// For component `i` at interfacial composition `x`:
///
/// ```text
/// sigma_i = sigma0_i
///         + R * T * ln(x_i / sqrt(xS_i * xL_i)) / omega_i
///         + (2 * G_I_i(x) - G_S_i(x) - G_L_i(x)) / (2 * omega_i)
/// ```
///
/// `xS` and `xL` are the equilibrium compositions of the solid and liquid,
/// `omega` the molar interfacial areas, `sigma0` the interfacial energies of
/// the pure components, and `G_*` the partial excess Gibbs energies.
///
/// Interfacial fractions outside `(0, 1]` give non-finite energies, which
/// the solvers rank as worst.
#[derive(Debug, Clone)]
pub struct SolidLiquidInterface<I, S, L> {
    temperature: f64,
    x_solid: Vec<f64>,
    x_liquid: Vec<f64>,
    omega: Vec<f64>,
    sigma0: Vec<f64>,
    excess: PartialExcess<I, S, L>,
}

impl<I, S, L> SolidLiquidInterface<I, S, L>
where
    I: Partials,
    S: Partials,
    L: Partials,
{
    /// Creates a solid/liquid interface model.
    ///
    /// The number of components is taken from `x_solid`, which must hold
    /// every mole fraction, balance component first.
    ///
    /// # Errors
    ///
    /// Returns an error if `x_solid` is empty or if `x_liquid`, `omega`, or
    /// `sigma0` does not have one entry per component.
    pub fn new(
        temperature: f64,
        x_solid: Vec<f64>,
        x_liquid: Vec<f64>,
        omega: Vec<f64>,
        sigma0: Vec<f64>,
        excess: PartialExcess<I, S, L>,
    ) -> Result<Self, ModelError> {
        let n = x_solid.len();
        if n == 0 {
            return Err(ModelError::LengthMismatch {
                name: "x_solid",
                expected: 1,
                found: 0,
            });
        }
        check_len("x_liquid", &x_liquid, n)?;
        check_len("omega", &omega, n)?;
        check_len("sigma0", &sigma0, n)?;

        Ok(Self {
            temperature,
            x_solid,
            x_liquid,
            omega,
            sigma0,
            excess,
        })
    }

    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }
}

impl<I, S, L> Model for SolidLiquidInterface<I, S, L>
where
    I: Partials,
    S: Partials,
    L: Partials,
{
    type Input = Composition;
    type Output = Vec<f64>;
    type Error = ModelError;

    fn call(&self, composition: &Composition) -> Result<Vec<f64>, ModelError> {
        let n = self.x_solid.len();
        check_components(composition, n)?;

        let g_interface = check_partials(
            "interface excess",
            self.excess.interface.partials(composition),
            n,
        )?;
        let g_solid = check_partials(
            "solid excess",
            self.excess.solid.partials(composition),
            n,
        )?;
        let g_liquid = check_partials(
            "liquid excess",
            self.excess.liquid.partials(composition),
            n,
        )?;
        let rt = GAS_CONSTANT * self.temperature;

        Ok(composition
            .full()
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                let ideal = rt * (x / (self.x_solid[i] * self.x_liquid[i]).sqrt()).ln();
                let excess = 2.0 * g_interface[i] - g_solid[i] - g_liquid[i];
                self.sigma0[i] + ideal / self.omega[i] + excess / (2.0 * self.omega[i])
            })
            .collect())
    }
}

impl<I, S, L> InterfaceEnergyModel for SolidLiquidInterface<I, S, L>
where
    I: Partials,
    S: Partials,
    L: Partials,
{
    const WEIGHT: f64 = 1.0;

    fn num_components(&self) -> usize {
        self.x_solid.len()
    }
}
