//! Redlich–Kister excess Gibbs energy.
//!
//! The excess molar Gibbs energy (J/mol) is a sum of binary interactions
//!
//! ```text
//! G = sum over pairs (i, j) of x_i x_j sum_k L_k(T) (x_i - x_j)^k
//! ```
//!
//! and the partial excess Gibbs energy of component `m` is
//!
//! ```text
//! G_m = G + dG/dx_m - sum_n x_n dG/dx_n
//! ```
//!
//! with every fraction treated as independent when differentiating.

use crate::{Composition, ModelError, Partials, TemperatureDependent};

/// A linear temperature function `a + b * T`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coefficient {
    pub a: f64,
    pub b: f64,
}

impl Coefficient {
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    #[must_use]
    pub fn constant(a: f64) -> Self {
        Self::new(a, 0.0)
    }

    #[must_use]
    pub fn at(&self, temperature: f64) -> f64 {
        self.a + self.b * temperature
    }
}

/// Interaction between components `i` and `j`, with terms `L_0, L_1, ...`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interaction {
    pub i: usize,
    pub j: usize,
    pub terms: Vec<Coefficient>,
}

/// A Redlich–Kister solution model for one phase.
#[derive(Debug, Clone, PartialEq)]
pub struct RedlichKister {
    components: usize,
    interactions: Vec<Interaction>,
}

impl RedlichKister {
    /// Creates a solution model over `components` components.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Interaction`] if an interaction refers to a
    /// component out of range or pairs a component with itself.
    pub fn new(components: usize, interactions: Vec<Interaction>) -> Result<Self, ModelError> {
        for interaction in &interactions {
            let Interaction { i, j, .. } = *interaction;
            if i >= components || j >= components || i == j {
                return Err(ModelError::Interaction { i, j, components });
            }
        }

        Ok(Self {
            components,
            interactions,
        })
    }

    /// An ideal solution with no excess energy.
    #[must_use]
    pub fn ideal(components: usize) -> Self {
        Self {
            components,
            interactions: Vec::new(),
        }
    }

    #[must_use]
    pub fn num_components(&self) -> usize {
        self.components
    }

    /// Excess molar Gibbs energy at `composition`.
    #[must_use]
    pub fn excess_energy_at(&self, composition: &Composition, temperature: f64) -> f64 {
        self.energy_and_gradient(composition.full(), temperature).0
    }

    /// Returns `G` and `dG/dx_m` for every component.
    fn energy_and_gradient(&self, x: &[f64], temperature: f64) -> (f64, Vec<f64>) {
        let mut energy = 0.0;
        let mut gradient = vec![0.0; self.components];

        for Interaction { i, j, terms } in &self.interactions {
            let (xi, xj) = (x[*i], x[*j]);
            let delta = xi - xj;

            // s = sum L_k delta^k, ds = d(s)/d(delta)
            let mut s = 0.0;
            let mut ds = 0.0;
            let mut power = 1.0;
            let mut lower_power = 0.0;
            for (k, term) in terms.iter().enumerate() {
                let l = term.at(temperature);
                s += l * power;
                ds += k as f64 * l * lower_power;
                lower_power = power;
                power *= delta;
            }

            energy += xi * xj * s;
            gradient[*i] += xj * s + xi * xj * ds;
            gradient[*j] += xi * s - xi * xj * ds;
        }

        (energy, gradient)
    }
}

impl TemperatureDependent for RedlichKister {
    /// Partial excess Gibbs energies, one per component.
    ///
    /// Compositions with a different number of components than the model
    /// yield NaN for every component.
    fn partials_at(&self, composition: &Composition, temperature: f64) -> Vec<f64> {
        let x = composition.full();
        if x.len() != self.components {
            return vec![f64::NAN; x.len()];
        }

        let (energy, gradient) = self.energy_and_gradient(x, temperature);
        let weighted: f64 = x.iter().zip(&gradient).map(|(x, g)| x * g).sum();
        gradient.iter().map(|g| energy + g - weighted).collect()
    }
}

/// Partial excess energies of an interfacial layer between two phases.
///
/// The interfacial excess Gibbs energy is the mean of the two bulk excess
/// energies, so its partial quantities are the means of theirs.
#[derive(Debug, Clone)]
pub struct InterfaceExcess<A, B> {
    alpha: A,
    beta: B,
}

impl<A: Partials, B: Partials> InterfaceExcess<A, B> {
    pub fn new(alpha: A, beta: B) -> Self {
        Self { alpha, beta }
    }
}

impl<A: Partials, B: Partials> Partials for InterfaceExcess<A, B> {
    fn partials(&self, composition: &Composition) -> Vec<f64> {
        let alpha = self.alpha.partials(composition);
        let beta = self.beta.partials(composition);
        if alpha.len() != beta.len() {
            return vec![f64::NAN; composition.num_components()];
        }
        alpha.iter().zip(&beta).map(|(a, b)| 0.5 * (a + b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::AtTemperature;

    fn subregular() -> RedlichKister {
        RedlichKister::new(
            2,
            vec![Interaction {
                i: 0,
                j: 1,
                terms: vec![Coefficient::new(-1200.0, 0.2), Coefficient::constant(500.0)],
            }],
        )
        .expect("valid model")
    }

    #[test]
    fn binary_partials_match_closed_form() {
        // L0 = -1200 + 0.2 * 1000 = -1000, L1 = 500
        let model = subregular();
        let composition = Composition::from_free(&[0.3]);

        let g = model.excess_energy_at(&composition, 1000.0);
        let partials = model.partials_at(&composition, 1000.0);

        assert_relative_eq!(g, -168.0, epsilon = 1e-9);
        assert_relative_eq!(partials[0], -9.0, epsilon = 1e-9);
        assert_relative_eq!(partials[1], -539.0, epsilon = 1e-9);
    }

    #[test]
    fn partials_recombine_to_total() {
        let model = RedlichKister::new(
            3,
            vec![
                Interaction {
                    i: 0,
                    j: 1,
                    terms: vec![Coefficient::constant(-3000.0), Coefficient::constant(800.0)],
                },
                Interaction {
                    i: 1,
                    j: 2,
                    terms: vec![
                        Coefficient::constant(1500.0),
                        Coefficient::constant(-200.0),
                        Coefficient::constant(90.0),
                    ],
                },
                Interaction {
                    i: 2,
                    j: 0,
                    terms: vec![Coefficient::new(400.0, -1.5)],
                },
            ],
        )
        .expect("valid model");
        let composition = Composition::from_free(&[0.25, 0.15]);

        let g = model.excess_energy_at(&composition, 700.0);
        let partials = model.partials_at(&composition, 700.0);
        let recombined: f64 = composition
            .full()
            .iter()
            .zip(&partials)
            .map(|(x, p)| x * p)
            .sum();

        assert_relative_eq!(recombined, g, epsilon = 1e-9);
    }

    #[test]
    fn ideal_solution_has_no_excess() {
        let partials = RedlichKister::ideal(2).partials_at(&Composition::from_free(&[0.4]), 500.0);

        assert_eq!(partials, vec![0.0, 0.0]);
    }

    #[test]
    fn interface_excess_is_the_phase_mean() {
        let interface = InterfaceExcess::new(
            AtTemperature::new(subregular(), 1000.0),
            AtTemperature::new(RedlichKister::ideal(2), 1000.0),
        );

        let partials = interface.partials(&Composition::from_free(&[0.3]));

        assert_relative_eq!(partials[0], -4.5, epsilon = 1e-9);
        assert_relative_eq!(partials[1], -269.5, epsilon = 1e-9);
    }

    #[test]
    fn wrong_component_count_gives_nan() {
        let partials = subregular().partials_at(&Composition::from_free(&[0.2, 0.2]), 1000.0);

        assert_eq!(partials.len(), 3);
        assert!(partials.iter().all(|p| p.is_nan()));
    }

    #[test]
    fn invalid_interactions_are_rejected() {
        let self_pair = Interaction {
            i: 1,
            j: 1,
            terms: vec![Coefficient::constant(1.0)],
        };
        let out_of_range = Interaction {
            i: 0,
            j: 2,
            terms: vec![],
        };

        assert!(matches!(
            RedlichKister::new(2, vec![self_pair]),
            Err(ModelError::Interaction { i: 1, j: 1, .. })
        ));
        assert!(matches!(
            RedlichKister::new(2, vec![out_of_range]),
            Err(ModelError::Interaction { j: 2, .. })
        ));
    }
}
