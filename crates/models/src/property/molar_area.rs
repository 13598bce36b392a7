use std::f64::consts::PI;

use crate::constants::AVOGADRO;

/// Packing fractions of the bulk phase and of the interfacial layer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackingFractions {
    pub bulk: f64,
    pub interface: f64,
}

impl Default for PackingFractions {
    fn default() -> Self {
        Self {
            bulk: 0.65,
            interface: 0.906,
        }
    }
}

impl PackingFractions {
    /// Molar interfacial area (m²/mol) of a component with molar volume
    /// `molar_volume` (m³/mol).
    ///
    /// ```text
    /// omega = f * Vm^(2/3) * N_A^(1/3),  f = (3 fb / 4)^(2/3) * pi^(1/3) / fi
    /// ```
    #[must_use]
    pub fn molar_area(&self, molar_volume: f64) -> f64 {
        let f = (0.75 * self.bulk).powf(2.0 / 3.0) * PI.cbrt() / self.interface;
        f * molar_volume.powf(2.0 / 3.0) * AVOGADRO.cbrt()
    }
}

/// Molar interfacial area using the default packing fractions.
#[must_use]
pub fn molar_interfacial_area(molar_volume: f64) -> f64 {
    PackingFractions::default().molar_area(molar_volume)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_packing() {
        assert_relative_eq!(molar_interfacial_area(1e-5), 39_243.735, epsilon = 1e-3);
    }

    #[test]
    fn area_scales_with_two_thirds_power() {
        let small = molar_interfacial_area(1e-6);
        let large = molar_interfacial_area(8e-6);

        assert_relative_eq!(large / small, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn denser_interface_shrinks_area() {
        let loose = PackingFractions {
            bulk: 0.65,
            interface: 0.8,
        };

        assert!(loose.molar_area(1e-5) > molar_interfacial_area(1e-5));
    }
}
