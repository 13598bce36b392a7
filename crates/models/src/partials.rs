use crate::Composition;

/// A composition-dependent quantity with one value per component.
///
/// Chemical potentials, partial excess Gibbs energies, and partial molar
/// volumes all take this shape. Closures over the free fractions implement
/// it directly; use [`PerComponent`] to combine one scalar function per
/// component.
pub trait Partials {
    /// Evaluates the quantity for every component, balance component first.
    fn partials(&self, composition: &Composition) -> Vec<f64>;
}

impl<F> Partials for F
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    fn partials(&self, composition: &Composition) -> Vec<f64> {
        self(composition.free())
    }
}

/// One scalar function of the free fractions per component.
///
/// Functions of different closure types can be combined by boxing them,
/// e.g. `PerComponent<Box<dyn Fn(&[f64]) -> f64 + Send + Sync>>`.
#[derive(Debug, Clone)]
pub struct PerComponent<F>(pub Vec<F>);

impl<F> Partials for PerComponent<F>
where
    F: Fn(&[f64]) -> f64,
{
    fn partials(&self, composition: &Composition) -> Vec<f64> {
        self.0.iter().map(|f| f(composition.free())).collect()
    }
}

/// A per-component quantity that also depends on temperature.
///
/// Bind a temperature with [`AtTemperature`] to obtain a [`Partials`].
pub trait TemperatureDependent {
    fn partials_at(&self, composition: &Composition, temperature: f64) -> Vec<f64>;
}

/// Fixes the temperature of a [`TemperatureDependent`] quantity.
#[derive(Debug, Clone, Copy)]
pub struct AtTemperature<F> {
    inner: F,
    temperature: f64,
}

impl<F> AtTemperature<F> {
    pub fn new(inner: F, temperature: f64) -> Self {
        Self { inner, temperature }
    }

    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }
}

impl<F: TemperatureDependent> Partials for AtTemperature<F> {
    fn partials(&self, composition: &Composition) -> Vec<f64> {
        self.inner.partials_at(composition, self.temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    struct Scaled(Vec<f64>);

    impl TemperatureDependent for Scaled {
        fn partials_at(&self, composition: &Composition, temperature: f64) -> Vec<f64> {
            composition
                .full()
                .iter()
                .zip(&self.0)
                .map(|(x, k)| k * x * temperature)
                .collect()
        }
    }

    #[test]
    fn closures_see_free_fractions() {
        let f = |x: &[f64]| vec![x.len() as f64, x[0]];
        let values = f.partials(&Composition::from_free(&[0.3]));

        assert_eq!(values, vec![1.0, 0.3]);
    }

    #[test]
    fn per_component_evaluates_each_function() {
        let fns: Vec<Box<dyn Fn(&[f64]) -> f64>> =
            vec![Box::new(|x: &[f64]| 1.0 - x[0]), Box::new(|x: &[f64]| 2.0 * x[0])];
        let values = PerComponent(fns).partials(&Composition::from_free(&[0.25]));

        assert_relative_eq!(values[0], 0.75);
        assert_relative_eq!(values[1], 0.5);
    }

    #[test]
    fn temperature_is_bound() {
        let bound = AtTemperature::new(Scaled(vec![1.0, 2.0]), 10.0);
        let values = bound.partials(&Composition::from_free(&[0.5]));

        assert_relative_eq!(bound.temperature(), 10.0);
        assert_relative_eq!(values[0], 5.0);
        assert_relative_eq!(values[1], 10.0);
    }
}
