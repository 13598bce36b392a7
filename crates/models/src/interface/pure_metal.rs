use std::{convert::Infallible, f64::consts::LN_2};

use interfacial_core::Model;

use crate::constants::{AVOGADRO, GAS_CONSTANT};

/// Solid/liquid interface of a pure metal.
///
/// ```text
/// sigma = (dH_melt + 0.5 * R * T * ln 2) / (2 * Vm^(2/3) * N_A^(1/3))
/// ```
///
/// The model input is the temperature in K; the output is the interfacial
/// energy in J/m².
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PureMetal {
    melting_enthalpy: f64,
    molar_volume: f64,
}

impl PureMetal {
    /// Creates a model from the melting enthalpy (J/mol) and the molar
    /// volume (m³/mol).
    #[must_use]
    pub fn new(melting_enthalpy: f64, molar_volume: f64) -> Self {
        Self {
            melting_enthalpy,
            molar_volume,
        }
    }

    #[must_use]
    pub fn melting_enthalpy(&self) -> f64 {
        self.melting_enthalpy
    }

    #[must_use]
    pub fn molar_volume(&self) -> f64 {
        self.molar_volume
    }

    /// Interfacial energy at `temperature`.
    #[must_use]
    pub fn infenergy(&self, temperature: f64) -> f64 {
        let entropic = 0.5 * GAS_CONSTANT * temperature * LN_2;
        (self.melting_enthalpy + entropic)
            / (2.0 * self.molar_volume.powf(2.0 / 3.0) * AVOGADRO.cbrt())
    }
}

impl Model for PureMetal {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, temperature: &f64) -> Result<f64, Self::Error> {
        Ok(self.infenergy(*temperature))
    }
}
