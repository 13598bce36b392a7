use std::convert::Infallible;

use interfacial_core::MinimizationProblem;

use crate::Composition;

/// Drives the partial interfacial energies of all components together.
///
/// The objective is the weighted sum of absolute pairwise differences,
/// `sum over i < j of weight * |sigma_i - sigma_j|`, which is zero exactly
/// when every partial energy is equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EqualPartials {
    weight: f64,
}

impl EqualPartials {
    #[must_use]
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Computes the weighted pairwise disagreement of `partials`.
    ///
    /// Any NaN partial energy makes the score NaN.
    #[must_use]
    pub fn score(&self, partials: &[f64]) -> f64 {
        let mut total = 0.0;
        for (i, a) in partials.iter().enumerate() {
            for b in &partials[i + 1..] {
                total += self.weight * (a - b).abs();
            }
        }
        total
    }
}

impl MinimizationProblem for EqualPartials {
    type Input = Composition;
    type Output = Vec<f64>;
    type Error = Infallible;

    fn input(&self, x: &[f64]) -> Result<Composition, Self::Error> {
        Ok(Composition::from_free(x))
    }

    fn objective(&self, _input: &Composition, output: &Vec<f64>) -> Result<f64, Self::Error> {
        Ok(self.score(output))
    }
}
