//! Shared alloy fixtures for the end-to-end tests.

pub mod alloys {
    use interfacial_models::{
        AtTemperature, PartialExcess,
        calculate::{CoherentSystem, PureReference, SolidLiquidSystem},
        property::{
            excess::{Coefficient, Interaction, RedlichKister},
            molar_volume::{InterfacialMolarVolume, PureMolarVolume},
        },
    };

    /// Partial chemical potentials of a ternary phase.
    pub type Potentials = fn(&[f64]) -> Vec<f64>;

    /// Temperature-dependent Redlich–Kister partial excess energies.
    pub type Excess = AtTemperature<RedlichKister>;

    pub fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|&name| name.to_owned()).collect()
    }

    /// Molar volume of FCC nickel, in m^3/mol.
    #[must_use]
    pub fn nickel_volume(temperature: f64) -> f64 {
        6.718e-6 + 2.936e-11 * temperature.powf(1.355e-6)
    }

    /// Molar volume of FCC aluminium, in m^3/mol.
    #[must_use]
    pub fn aluminium_volume(temperature: f64) -> f64 {
        10.269e-6 + 3.860e-11 * temperature.powf(1.491e-6)
    }

    fn constant_volumes(volumes: &[f64]) -> InterfacialMolarVolume {
        let pure = volumes.iter().map(|&v| PureMolarVolume::constant(v)).collect();
        InterfacialMolarVolume::symmetric(pure).expect("volumes are valid")
    }

    fn redlich_kister(interactions: &[(usize, usize, &[(f64, f64)])]) -> RedlichKister {
        let interactions = interactions
            .iter()
            .map(|&(i, j, terms)| Interaction {
                i,
                j,
                terms: terms.iter().map(|&(a, b)| Coefficient::new(a, b)).collect(),
            })
            .collect();
        RedlichKister::new(3, interactions).expect("interactions are valid")
    }

    /// Ternary solid/liquid interface at 1000 K with distinct solid, liquid,
    /// and interfacial Redlich–Kister excess energies.
    ///
    /// Molar interfacial areas are derived from the molar volumes.
    #[must_use]
    pub fn ternary_solid_liquid() -> SolidLiquidSystem<Excess, Excess, Excess> {
        let temperature = 1000.0;
        let solid = redlich_kister(&[(0, 1, &[(-10_000.0, 0.0)]), (0, 2, &[(5_000.0, 0.0)])]);
        let liquid = redlich_kister(&[
            (0, 1, &[(-20_000.0, 2.0), (3_000.0, 0.0)]),
            (1, 2, &[(-4_000.0, 0.0)]),
        ]);
        let interface =
            redlich_kister(&[(0, 1, &[(-15_000.0, 0.0)]), (1, 2, &[(8_000.0, 0.0)])]);

        SolidLiquidSystem {
            components: names(&["A", "B", "C"]),
            temperature,
            initial: vec![0.2, 0.1],
            x_solid: vec![0.7, 0.2, 0.1],
            x_liquid: vec![0.5, 0.3, 0.2],
            molar_volumes: constant_volumes(&[1e-5, 8e-6, 1.2e-5]),
            omega: None,
            pure: PureReference::Energies(vec![0.2, 0.3, 0.25]),
            excess: PartialExcess {
                interface: AtTemperature::new(interface, temperature),
                solid: AtTemperature::new(solid, temperature),
                liquid: AtTemperature::new(liquid, temperature),
            },
        }
    }

    /// Chemical potentials that equalize once the interface reaches
    /// `(0.5, 0.3, 0.2)`, offset from the equilibrium potentials by 500.
    fn offset_potentials(x: &[f64]) -> Vec<f64> {
        let full = [1.0 - x[0] - x[1], x[0], x[1]];
        let target = [0.5, 0.3, 0.2];
        full.iter()
            .zip(target)
            .map(|(x, t)| 1000.0 * (x - t) + 500.0)
            .collect()
    }

    /// Ternary coherent interface whose equilibrium is `(0.5, 0.3, 0.2)`.
    #[must_use]
    pub fn ternary_coherent() -> CoherentSystem<Potentials, Potentials> {
        CoherentSystem {
            components: names(&["A", "B", "C"]),
            temperature: 700.0,
            initial: vec![0.3, 0.2],
            mueq: vec![500.0; 3],
            mu_alpha: offset_potentials,
            mu_beta: offset_potentials,
            molar_volumes: constant_volumes(&[1e-5, 1e-5, 1e-5]),
        }
    }
}
