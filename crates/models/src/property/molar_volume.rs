use crate::{Composition, ModelError, TemperatureDependent};

/// Molar volume (m³/mol) of a pure component as a function of temperature.
///
/// ```text
/// V(T) = base + scale * T^exponent
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PureMolarVolume {
    pub base: f64,
    pub scale: f64,
    pub exponent: f64,
}

impl PureMolarVolume {
    #[must_use]
    pub fn new(base: f64, scale: f64, exponent: f64) -> Self {
        Self {
            base,
            scale,
            exponent,
        }
    }

    /// A temperature-independent molar volume.
    #[must_use]
    pub fn constant(volume: f64) -> Self {
        Self::new(volume, 0.0, 0.0)
    }

    #[must_use]
    pub fn at(&self, temperature: f64) -> f64 {
        self.base + self.scale * temperature.powf(self.exponent)
    }
}

/// Molar volume of the layer between two bulk phases.
///
/// Each bulk phase mixes its pure molar volumes linearly,
/// `Vm(x, T) = sum_i x_i V_i(T)`, and the interface takes the mean of the
/// two phases. The interfacial partial molar volume of component `i` is
/// `Vm + dVm/dx_i - sum_j x_j dVm/dx_j`, which for linear mixing reduces to
/// the mean of the two pure molar volumes of `i`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterfacialMolarVolume {
    alpha: Vec<PureMolarVolume>,
    beta: Vec<PureMolarVolume>,
}

impl InterfacialMolarVolume {
    /// Creates the interfacial molar volume from the pure molar volumes of
    /// every component in each bulk phase, balance component first.
    ///
    /// # Errors
    ///
    /// Returns an error if the phases are empty or list different numbers
    /// of components.
    pub fn new(
        alpha: Vec<PureMolarVolume>,
        beta: Vec<PureMolarVolume>,
    ) -> Result<Self, ModelError> {
        if alpha.is_empty() {
            return Err(ModelError::LengthMismatch {
                name: "alpha molar volumes",
                expected: 1,
                found: 0,
            });
        }
        if beta.len() != alpha.len() {
            return Err(ModelError::LengthMismatch {
                name: "beta molar volumes",
                expected: alpha.len(),
                found: beta.len(),
            });
        }

        Ok(Self { alpha, beta })
    }

    /// Uses the same pure molar volumes for both bulk phases.
    ///
    /// # Errors
    ///
    /// Returns an error if `volumes` is empty.
    pub fn symmetric(volumes: Vec<PureMolarVolume>) -> Result<Self, ModelError> {
        Self::new(volumes.clone(), volumes)
    }

    #[must_use]
    pub fn num_components(&self) -> usize {
        self.alpha.len()
    }

    /// Molar volume of the interfacial layer at `composition`.
    #[must_use]
    pub fn molar_volume_at(&self, composition: &Composition, temperature: f64) -> f64 {
        composition
            .full()
            .iter()
            .zip(self.pure_means(temperature))
            .map(|(x, v)| x * v)
            .sum()
    }

    fn pure_means(&self, temperature: f64) -> impl Iterator<Item = f64> + '_ {
        self.alpha
            .iter()
            .zip(&self.beta)
            .map(move |(a, b)| 0.5 * (a.at(temperature) + b.at(temperature)))
    }
}

impl TemperatureDependent for InterfacialMolarVolume {
    fn partials_at(&self, _composition: &Composition, temperature: f64) -> Vec<f64> {
        self.pure_means(temperature).collect()
    }
}
