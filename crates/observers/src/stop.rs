//! Observers that stop a solver once a target value is reached.

use interfacial_core::Observer;

use crate::traits::{CanStopEarly, HasObjective, HasResidual};

/// Stops the solver once the objective drops below `threshold`.
///
/// Useful when the interfacial equilibrium only needs to be located to a
/// given objective, not to the solver's full tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectiveBelow {
    pub threshold: f64,
}

impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for ObjectiveBelow {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.objective() < self.threshold).then(A::stop_early)
    }
}

/// Stops the solver once the residual magnitude drops below `threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualBelow {
    pub threshold: f64,
}

impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for ResidualBelow {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.residual().abs() < self.threshold).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use interfacial_core::{EquationProblem, MinimizationProblem, Model};
    use interfacial_solvers::{
        equation::bisection,
        optimization::nelder_mead::{self, Status},
    };

    struct Identity;

    impl Model for Identity {
        type Input = Vec<f64>;
        type Output = Vec<f64>;
        type Error = Infallible;

        fn call(&self, input: &Vec<f64>) -> Result<Vec<f64>, Self::Error> {
            Ok(input.clone())
        }
    }

    struct Bowl;

    impl MinimizationProblem for Bowl {
        type Input = Vec<f64>;
        type Output = Vec<f64>;
        type Error = Infallible;

        fn input(&self, x: &[f64]) -> Result<Vec<f64>, Self::Error> {
            Ok(x.to_vec())
        }

        fn objective(&self, _input: &Vec<f64>, output: &Vec<f64>) -> Result<f64, Self::Error> {
            Ok(output.iter().map(|v| (v - 0.3) * (v - 0.3)).sum())
        }
    }

    struct Square;

    impl Model for Square {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &f64) -> Result<f64, Self::Error> {
            Ok(input * input)
        }
    }

    struct SquareEquals(f64);

    impl EquationProblem<1> for SquareEquals {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
            Ok(x[0])
        }

        fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Self::Error> {
            Ok([output - self.0])
        }
    }

    #[test]
    fn objective_below_stops_nelder_mead() {
        let solution = nelder_mead::minimize(
            &Identity,
            &Bowl,
            &[1.0, 1.0],
            &nelder_mead::Config::default(),
            ObjectiveBelow { threshold: 1e-3 },
        )
        .expect("should minimize");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert!(solution.objective < 1e-3);
    }

    #[test]
    fn residual_below_stops_bisection() {
        let solution = bisection::solve(
            &Square,
            &SquareEquals(2.0),
            [0.0, 2.0],
            &bisection::Config::default(),
            ResidualBelow { threshold: 1e-2 },
        )
        .expect("should solve");

        assert_eq!(solution.status, bisection::Status::StoppedByObserver);
        assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-2);
    }
}
