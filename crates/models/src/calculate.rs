//! End-to-end interfacial energy calculations.
//!
//! The alloy entry points build an interface model from physical inputs,
//! then run a two-stage search for the interfacial equilibrium composition:
//! a coarse grid search over the composition simplex, seeded into a local
//! Nelder–Mead refinement. The partial interfacial energies at the refined
//! composition and their mean make up the [`InterfacialEnergy`] record.
//!
//! Missing pure-component inputs are filled in from the interfacial molar
//! volumes evaluated at the initial alloy composition: molar interfacial
//! areas via [`molar_interfacial_area`], and pure interfacial energies via
//! [`PureMetal`] when only melting enthalpies are known.

mod error;
mod progress;
mod record;
mod settings;

pub use error::CalculationError;
pub use progress::{LogProgress, Progress};
pub use record::{
    CoarseSummary, InterfacialEnergy, PureMetalEnergy, RefineStatus, RefineSummary,
};
pub use settings::SearchSettings;

use interfacial_core::Observer;
use interfacial_solvers::optimization::{grid_search, nelder_mead};
use tracing::{debug, instrument};

use crate::{
    AtTemperature, Composition, ModelError, Partials, TemperatureDependent,
    interface::{
        CoherentInterface, InterfaceEnergyModel, PartialExcess, PureMetal, SolidLiquidInterface,
    },
    melting::{PurePhase, melting_point},
    property::{molar_area::molar_interfacial_area, molar_volume::InterfacialMolarVolume},
};

/// Source of the solid/liquid interfacial energies of the pure components.
#[derive(Debug, Clone, PartialEq)]
pub enum PureReference {
    /// Interfacial energies (J/m²), one per component.
    Energies(Vec<f64>),

    /// Melting enthalpies (J/mol), one per component.
    MeltingEnthalpies(Vec<f64>),
}

/// Physical inputs for a solid/liquid interface in an alloy.
#[derive(Debug, Clone)]
pub struct SolidLiquidSystem<I, S, L> {
    /// Component names, balance component first.
    pub components: Vec<String>,
    pub temperature: f64,

    /// Free fractions of the initial alloy composition.
    pub initial: Vec<f64>,

    /// Full solid composition at the two-phase equilibrium.
    pub x_solid: Vec<f64>,

    /// Full liquid composition at the two-phase equilibrium.
    pub x_liquid: Vec<f64>,

    pub molar_volumes: InterfacialMolarVolume,

    /// Molar interfacial areas (m²/mol), derived from `molar_volumes` when absent.
    pub omega: Option<Vec<f64>>,

    pub pure: PureReference,
    pub excess: PartialExcess<I, S, L>,
}

/// Physical inputs for a coherent interface in an alloy.
#[derive(Debug, Clone)]
pub struct CoherentSystem<A, B> {
    /// Component names, balance component first.
    pub components: Vec<String>,
    pub temperature: f64,

    /// Free fractions of the initial alloy composition.
    pub initial: Vec<f64>,

    /// Chemical potentials at the two-phase equilibrium, one per component.
    pub mueq: Vec<f64>,

    pub mu_alpha: A,
    pub mu_beta: B,
    pub molar_volumes: InterfacialMolarVolume,
}

/// Interfacial energy of a pure metal with a known melting enthalpy.
#[must_use]
pub fn pure_metal(
    component: &str,
    temperature: f64,
    molar_volume: f64,
    melting_enthalpy: f64,
) -> PureMetalEnergy {
    let model = PureMetal::new(melting_enthalpy, molar_volume);
    let interfacial_energy = model.infenergy(temperature);
    debug!(component, temperature, interfacial_energy, "pure metal interfacial energy");

    PureMetalEnergy {
        component: component.to_owned(),
        temperature,
        melting_enthalpy,
        interfacial_energy,
    }
}

/// Interfacial energy of a pure metal whose melting enthalpy is derived
/// from the Gibbs energies of its solid and liquid.
///
/// # Errors
///
/// Returns [`CalculationError::Melting`] if no melting point is found.
pub fn pure_metal_from_phases<S, L>(
    component: &str,
    temperature: f64,
    molar_volume: f64,
    solid: &S,
    liquid: &L,
) -> Result<PureMetalEnergy, CalculationError>
where
    S: PurePhase,
    L: PurePhase,
{
    let melting = melting_point(solid, liquid)?;
    debug!(
        component,
        melting_temperature = melting.temperature,
        melting_enthalpy = melting.enthalpy,
        "derived melting enthalpy"
    );
    Ok(pure_metal(component, temperature, molar_volume, melting.enthalpy))
}

/// Interfacial energy of a solid/liquid interface in an alloy.
///
/// # Errors
///
/// Returns an error if the inputs disagree on the number of components, the
/// initial composition is not physical, the search settings are invalid, or
/// either search stage fails.
#[instrument(level = "debug", skip_all, fields(temperature = system.temperature))]
pub fn solid_liquid<I, S, L, Obs>(
    system: SolidLiquidSystem<I, S, L>,
    settings: &SearchSettings,
    observer: Obs,
) -> Result<InterfacialEnergy, CalculationError>
where
    I: Partials,
    S: Partials,
    L: Partials,
    Obs: for<'a> Observer<Progress<'a>, nelder_mead::Action>,
{
    let SolidLiquidSystem {
        components,
        temperature,
        initial,
        x_solid,
        x_liquid,
        molar_volumes,
        omega,
        pure,
        excess,
    } = system;

    let initial = initial_composition(&components, &initial, &molar_volumes)?;
    let volumes = molar_volumes.partials_at(&initial, temperature);

    let omega = omega
        .unwrap_or_else(|| volumes.iter().copied().map(molar_interfacial_area).collect());
    let sigma0 = match pure {
        PureReference::Energies(sigma0) => sigma0,
        PureReference::MeltingEnthalpies(enthalpies) => {
            check_count("melting enthalpies", enthalpies.len(), components.len())?;
            enthalpies
                .iter()
                .zip(&volumes)
                .map(|(&h, &vm)| PureMetal::new(h, vm).infenergy(temperature))
                .collect()
        }
    };
    debug!(?omega, ?sigma0, "pure component references");

    let model = SolidLiquidInterface::new(temperature, x_solid, x_liquid, omega, sigma0, excess)?;
    check_count("x_solid", model.num_components(), components.len())?;

    let found = find_equilibrium(&model, settings, observer)?;
    Ok(found.into_record(components, temperature, &initial))
}

/// Interfacial energy of a coherent interface in an alloy.
///
/// # Errors
///
/// Returns an error if the inputs disagree on the number of components, the
/// initial composition is not physical, the search settings are invalid, or
/// either search stage fails.
#[instrument(level = "debug", skip_all, fields(temperature = system.temperature))]
pub fn coherent<A, B, Obs>(
    system: CoherentSystem<A, B>,
    settings: &SearchSettings,
    observer: Obs,
) -> Result<InterfacialEnergy, CalculationError>
where
    A: Partials,
    B: Partials,
    Obs: for<'a> Observer<Progress<'a>, nelder_mead::Action>,
{
    let CoherentSystem {
        components,
        temperature,
        initial,
        mueq,
        mu_alpha,
        mu_beta,
        molar_volumes,
    } = system;

    let initial = initial_composition(&components, &initial, &molar_volumes)?;
    check_count("mueq", mueq.len(), components.len())?;

    let volumes = AtTemperature::new(molar_volumes, temperature);
    let model = CoherentInterface::new(mu_alpha, mu_beta, mueq, volumes)?;

    let found = find_equilibrium(&model, settings, observer)?;
    Ok(found.into_record(components, temperature, &initial))
}

/// Runs the coarse and local search stages on an interface model.
///
/// # Errors
///
/// Returns an error if the settings are invalid or either stage fails.
pub fn find_equilibrium<M, Obs>(
    model: &M,
    settings: &SearchSettings,
    mut observer: Obs,
) -> Result<Equilibrium, CalculationError>
where
    M: InterfaceEnergyModel,
    Obs: for<'a> Observer<Progress<'a>, nelder_mead::Action>,
{
    let dims = model.num_components().saturating_sub(1);
    let problem = model.problem();
    let grid = settings.grid_config(dims)?;
    let refine_config = settings.refine_config()?;

    observer.observe(&Progress::Started {
        dims,
        limit: settings.limit,
        step: settings.step,
    });

    let coarse = grid_search::search(model, &problem, &grid)?;
    let stop = observer.observe(&Progress::CoarseFinished {
        x: &coarse.x,
        objective: coarse.objective,
        feasible: coarse.feasible,
    });

    let refined = match stop {
        Some(nelder_mead::Action::StopEarly) => None,
        None => Some(nelder_mead::minimize(
            model,
            &problem,
            &coarse.x,
            &refine_config,
            |event: &nelder_mead::Event<'_>| observer.observe(&Progress::Refining(*event)),
        )?),
    };

    let (x, objective) = refined
        .as_ref()
        .map_or((&coarse.x, coarse.objective), |r| (&r.x, r.objective));
    observer.observe(&Progress::Finished { x, objective });

    let composition = Composition::from_free(x);
    let partial_energies = model.infenergy(x)?;

    Ok(Equilibrium {
        composition,
        partial_energies,
        coarse: CoarseSummary::from(&coarse),
        refine: refined.as_ref().map(RefineSummary::from),
    })
}

/// Interfacial equilibrium found by [`find_equilibrium`].
#[derive(Debug, Clone, PartialEq)]
pub struct Equilibrium {
    pub composition: Composition,
    pub partial_energies: Vec<f64>,
    pub coarse: CoarseSummary,
    pub refine: Option<RefineSummary>,
}

impl Equilibrium {
    /// Mean of the partial interfacial energies.
    #[must_use]
    pub fn interfacial_energy(&self) -> f64 {
        self.partial_energies.iter().sum::<f64>() / self.partial_energies.len() as f64
    }

    fn into_record(
        self,
        components: Vec<String>,
        temperature: f64,
        initial: &Composition,
    ) -> InterfacialEnergy {
        InterfacialEnergy {
            components,
            temperature,
            initial_composition: initial.full().to_vec(),
            interfacial_energy: self.interfacial_energy(),
            interfacial_composition: self.composition.full().to_vec(),
            partial_energies: self.partial_energies,
            coarse: self.coarse,
            refine: self.refine,
        }
    }
}

/// Validates the initial composition against the component list.
fn initial_composition(
    components: &[String],
    initial: &[f64],
    molar_volumes: &InterfacialMolarVolume,
) -> Result<Composition, CalculationError> {
    check_count("initial composition", initial.len() + 1, components.len())?;
    check_count(
        "molar volumes",
        molar_volumes.num_components(),
        components.len(),
    )?;
    Ok(Composition::checked(initial)?)
}

fn check_count(name: &'static str, found: usize, expected: usize) -> Result<(), ModelError> {
    if found == expected {
        Ok(())
    } else {
        Err(ModelError::LengthMismatch {
            name,
            expected,
            found,
        })
    }
}
