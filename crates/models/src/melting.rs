//! Melting point and melting enthalpy of a pure component.
//!
//! The melting temperature is where the molar Gibbs energies of the solid
//! and liquid cross. [`melting_point`] scans `[298.15, 3000]` K on a fixed
//! grid for the first sign change of `G_liquid - G_solid`, then refines the
//! crossing with bisection. The melting enthalpy is `|H_solid - H_liquid|`
//! at that temperature.

use std::convert::Infallible;

use interfacial_core::{EquationProblem, Model};
use interfacial_solvers::equation::bisection;
use thiserror::Error;
use tracing::{debug, instrument};

/// Temperature range scanned for a melting point, in K.
pub const SCAN_RANGE: [f64; 2] = [298.15, 3000.0];

/// Number of temperatures sampled across [`SCAN_RANGE`].
pub const SCAN_SAMPLES: usize = 10_000;

/// Molar Gibbs energy and enthalpy of a pure phase as functions of temperature.
pub trait PurePhase {
    /// Molar Gibbs energy in J/mol.
    fn gibbs_energy(&self, temperature: f64) -> f64;

    /// Molar enthalpy in J/mol, `H = G - T dG/dT`.
    fn enthalpy(&self, temperature: f64) -> f64;
}

/// A Gibbs energy expression in the standard polynomial form
///
/// ```text
/// G(T) = a + b T + c T ln T + d T^2 + e T^3 + f / T
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GibbsPolynomial {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl PurePhase for GibbsPolynomial {
    fn gibbs_energy(&self, t: f64) -> f64 {
        self.a
            + self.b * t
            + self.c * t * t.ln()
            + self.d * t * t
            + self.e * t.powi(3)
            + self.f / t
    }

    fn enthalpy(&self, t: f64) -> f64 {
        self.a - self.c * t - self.d * t * t - 2.0 * self.e * t.powi(3) + 2.0 * self.f / t
    }
}

/// Errors that can occur while locating a melting point.
#[derive(Debug, Error)]
pub enum MeltingError {
    #[error("no melting point between {low} K and {high} K")]
    NoMeltingPoint { low: f64, high: f64 },

    #[error("melting point refinement failed: {0}")]
    Refine(#[from] bisection::Error),
}

/// Temperature and enthalpy of melting.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeltingPoint {
    pub temperature: f64,
    pub enthalpy: f64,
}

/// Finds the melting point of a pure component.
///
/// # Errors
///
/// Returns [`MeltingError::NoMeltingPoint`] if the Gibbs energies never
/// cross inside [`SCAN_RANGE`], or [`MeltingError::Refine`] if bisection
/// fails on the bracketed crossing.
#[instrument(level = "debug", skip_all)]
pub fn melting_point<S, L>(solid: &S, liquid: &L) -> Result<MeltingPoint, MeltingError>
where
    S: PurePhase,
    L: PurePhase,
{
    let difference = GibbsDifference { solid, liquid };
    let [low, high] = SCAN_RANGE;
    let spacing = (high - low) / (SCAN_SAMPLES - 1) as f64;
    let temperature = |k: usize| low + k as f64 * spacing;

    let bracket = (0..SCAN_SAMPLES - 1)
        .map(|k| [temperature(k), temperature(k + 1)])
        .find(|&[t0, t1]| difference.at(t0) * difference.at(t1) < 0.0)
        .ok_or(MeltingError::NoMeltingPoint { low, high })?;

    let config = bisection::Config::default();
    let solution = bisection::solve_unobserved(&difference, &Crossing, bracket, &config)?;
    let temperature = solution.x;
    let enthalpy = (solid.enthalpy(temperature) - liquid.enthalpy(temperature)).abs();

    debug!(temperature, enthalpy, "found melting point");

    Ok(MeltingPoint {
        temperature,
        enthalpy,
    })
}

/// Returns the melting enthalpy of a pure component.
///
/// # Errors
///
/// See [`melting_point`].
pub fn melting_enthalpy<S, L>(solid: &S, liquid: &L) -> Result<f64, MeltingError>
where
    S: PurePhase,
    L: PurePhase,
{
    melting_point(solid, liquid).map(|point| point.enthalpy)
}

/// `G_liquid(T) - G_solid(T)` as a model of temperature.
struct GibbsDifference<'a, S, L> {
    solid: &'a S,
    liquid: &'a L,
}

impl<S: PurePhase, L: PurePhase> GibbsDifference<'_, S, L> {
    fn at(&self, temperature: f64) -> f64 {
        self.liquid.gibbs_energy(temperature) - self.solid.gibbs_energy(temperature)
    }
}

impl<S: PurePhase, L: PurePhase> Model for GibbsDifference<'_, S, L> {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, temperature: &f64) -> Result<f64, Self::Error> {
        Ok(self.at(*temperature))
    }
}

/// Drives the Gibbs energy difference to zero.
struct Crossing;

impl EquationProblem<1> for Crossing {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, _temperature: &f64, difference: &f64) -> Result<[f64; 1], Self::Error> {
        Ok([*difference])
    }
}
