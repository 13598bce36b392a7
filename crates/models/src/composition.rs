use thiserror::Error;

/// Tolerance used when checking that fractions sum to one.
const SUM_TOL: f64 = 1e-9;

/// Mole fractions of every component at a point in composition space.
///
/// Solvers work with the *free* fractions, one per component after the
/// first. The first component's fraction is the balance `1 - sum(free)`.
///
/// [`Composition::from_free`] accepts any free vector, including points
/// outside the simplex that an unconstrained search may visit. Use
/// [`Composition::new`] when the fractions must be physical.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    full: Vec<f64>,
}

/// Errors that can occur when validating a composition.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CompositionError {
    #[error("a composition needs at least one component")]
    Empty,

    #[error("fraction of component {index} is outside [0, 1]: {value}")]
    OutOfRange { index: usize, value: f64 },

    #[error("fractions sum to {sum}, expected 1")]
    Sum { sum: f64 },
}

impl Composition {
    /// Creates a validated composition from all mole fractions.
    ///
    /// # Errors
    ///
    /// Returns an error if `full` is empty, if any fraction lies outside
    /// `[0, 1]`, or if the fractions do not sum to one within `1e-9`.
    pub fn new(full: Vec<f64>) -> Result<Self, CompositionError> {
        if full.is_empty() {
            return Err(CompositionError::Empty);
        }
        if let Some((index, &value)) = full
            .iter()
            .enumerate()
            .find(|(_, v)| !(0.0..=1.0).contains(*v))
        {
            return Err(CompositionError::OutOfRange { index, value });
        }
        let sum: f64 = full.iter().sum();
        if (sum - 1.0).abs() > SUM_TOL {
            return Err(CompositionError::Sum { sum });
        }

        Ok(Self { full })
    }

    /// Creates a validated composition from free mole fractions.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting full composition is not physical.
    pub fn checked(free: &[f64]) -> Result<Self, CompositionError> {
        Self::new(Self::from_free(free).full)
    }

    /// Builds a composition from free fractions without validation.
    #[must_use]
    pub fn from_free(free: &[f64]) -> Self {
        let mut full = Vec::with_capacity(free.len() + 1);
        full.push(1.0 - free.iter().sum::<f64>());
        full.extend_from_slice(free);
        Self { full }
    }

    /// Returns the free fractions, excluding the balance component.
    #[must_use]
    pub fn free(&self) -> &[f64] {
        &self.full[1..]
    }

    /// Returns all mole fractions, balance component first.
    #[must_use]
    pub fn full(&self) -> &[f64] {
        &self.full
    }

    #[must_use]
    pub fn num_components(&self) -> usize {
        self.full.len()
    }

    /// Returns true if every fraction lies in `[0, 1]`.
    #[must_use]
    pub fn is_physical(&self) -> bool {
        self.full.iter().all(|v| (0.0..=1.0).contains(v))
    }
}
