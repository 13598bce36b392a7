use std::cell::Cell;
use std::convert::Infallible;

use approx::assert_relative_eq;
use thiserror::Error;

use interfacial_core::{MinimizationProblem, Model};

use super::{Config, DEFAULT_TOL, Error, search};

/// Passes the free coordinates through unchanged.
struct Coordinates;

impl Model for Coordinates {
    type Input = Vec<f64>;
    type Output = Vec<f64>;
    type Error = Infallible;

    fn call(&self, x: &Vec<f64>) -> Result<Vec<f64>, Self::Error> {
        Ok(x.clone())
    }
}

/// Squared distance to a target point, counting every evaluation.
struct DistanceTo {
    target: Vec<f64>,
    calls: Cell<usize>,
}

impl DistanceTo {
    fn new(target: Vec<f64>) -> Self {
        Self {
            target,
            calls: Cell::new(0),
        }
    }
}

impl MinimizationProblem for DistanceTo {
    type Input = Vec<f64>;
    type Output = Vec<f64>;
    type Error = Infallible;

    fn input(&self, x: &[f64]) -> Result<Vec<f64>, Self::Error> {
        Ok(x.to_vec())
    }

    fn objective(&self, _input: &Vec<f64>, output: &Vec<f64>) -> Result<f64, Self::Error> {
        self.calls.set(self.calls.get() + 1);
        Ok(output
            .iter()
            .zip(&self.target)
            .map(|(a, b)| (a - b).powi(2))
            .sum())
    }
}

#[test]
fn discards_the_unit_corner() {
    let problem = DistanceTo::new(vec![1.0]);
    let config = Config::new(vec![[0.0, 1.0]], vec![0.5]).unwrap();

    let solution = search(&Coordinates, &problem, &config).expect("should find a point");

    // The lattice has 0, 0.5 and 1.0; the last is infeasible.
    assert_eq!(solution.feasible, 2);
    assert_eq!(problem.calls.get(), 2);
    assert_eq!(solution.index, 1);
    assert_relative_eq!(solution.x[0], 0.5, epsilon = 1e-9);
}

#[test]
fn nudged_origin_is_kept() {
    let problem = DistanceTo::new(vec![0.0]);
    let config = Config::new(vec![[0.0, 1.0]], vec![0.5]).unwrap();

    let solution = search(&Coordinates, &problem, &config).expect("should find a point");

    assert_eq!(solution.index, 0);
    assert!(solution.x[0] > 0.0);
    assert!(solution.x[0] < DEFAULT_TOL);
}

#[test]
fn rescales_into_limits() {
    let problem = DistanceTo::new(vec![0.13]);
    let config = Config::new(vec![[0.1, 0.2]], vec![0.1]).unwrap();

    let solution = search(&Coordinates, &problem, &config).expect("should find a point");

    assert_eq!(solution.feasible, 11);
    assert_relative_eq!(solution.x[0], 0.13, epsilon = 1e-9);
}

#[test]
fn two_dimensions_respect_the_simplex() {
    let problem = DistanceTo::new(vec![0.2, 0.6]);
    let config = Config::uniform(2, [0.0, 1.0], 0.1).unwrap();

    let solution = search(&Coordinates, &problem, &config).expect("should find a point");

    // Raw points with i + j < 10 on an 11 x 11 lattice.
    assert_eq!(solution.feasible, 55);
    assert_relative_eq!(solution.x[0], 0.2, epsilon = 1e-9);
    assert_relative_eq!(solution.x[1], 0.6, epsilon = 1e-9);
    assert!(solution.x.iter().sum::<f64>() < 1.0);
}

#[test]
fn ties_resolve_to_first_point() {
    struct Flat;

    impl MinimizationProblem for Flat {
        type Input = Vec<f64>;
        type Output = Vec<f64>;
        type Error = Infallible;

        fn input(&self, x: &[f64]) -> Result<Vec<f64>, Self::Error> {
            Ok(x.to_vec())
        }

        fn objective(&self, _: &Vec<f64>, _: &Vec<f64>) -> Result<f64, Self::Error> {
            Ok(1.0)
        }
    }

    let config = Config::uniform(1, [0.0, 0.5], 0.25).unwrap();
    let solution = search(&Coordinates, &Flat, &config).expect("should find a point");

    assert_eq!(solution.index, 0);
}

#[test]
fn non_finite_objectives_never_win() {
    struct NanBelowHalf;

    impl MinimizationProblem for NanBelowHalf {
        type Input = Vec<f64>;
        type Output = Vec<f64>;
        type Error = Infallible;

        fn input(&self, x: &[f64]) -> Result<Vec<f64>, Self::Error> {
            Ok(x.to_vec())
        }

        fn objective(&self, input: &Vec<f64>, _: &Vec<f64>) -> Result<f64, Self::Error> {
            Ok(if input[0] < 0.5 { f64::NAN } else { input[0] })
        }
    }

    let config = Config::uniform(1, [0.0, 0.9], 0.25).unwrap();
    let solution = search(&Coordinates, &NanBelowHalf, &config).expect("should find a point");

    assert_relative_eq!(solution.x[0], 0.675, epsilon = 1e-9);
}

#[test]
fn all_non_finite_is_an_error() {
    struct AlwaysNan;

    impl MinimizationProblem for AlwaysNan {
        type Input = Vec<f64>;
        type Output = Vec<f64>;
        type Error = Infallible;

        fn input(&self, x: &[f64]) -> Result<Vec<f64>, Self::Error> {
            Ok(x.to_vec())
        }

        fn objective(&self, _: &Vec<f64>, _: &Vec<f64>) -> Result<f64, Self::Error> {
            Ok(f64::NAN)
        }
    }

    let config = Config::uniform(1, [0.0, 0.5], 0.5).unwrap();
    let result = search(&Coordinates, &AlwaysNan, &config);

    assert!(matches!(result, Err(Error::NoFiniteObjective { feasible: 3 })));
}

#[test]
fn infeasible_limits_are_an_error() {
    let problem = DistanceTo::new(vec![0.0, 0.0]);
    let config = Config::uniform(2, [0.6, 0.9], 0.5).unwrap();

    let result = search(&Coordinates, &problem, &config);

    assert!(matches!(result, Err(Error::NoFeasiblePoints { lattice: 9 })));
    assert_eq!(problem.calls.get(), 0);
}

#[test]
fn model_errors_propagate() {
    #[derive(Debug, Error)]
    #[error("too large")]
    struct TooLarge;

    struct FailsAboveQuarter;

    impl Model for FailsAboveQuarter {
        type Input = Vec<f64>;
        type Output = Vec<f64>;
        type Error = TooLarge;

        fn call(&self, x: &Vec<f64>) -> Result<Vec<f64>, Self::Error> {
            if x[0] > 0.25 { Err(TooLarge) } else { Ok(x.clone()) }
        }
    }

    let problem = DistanceTo::new(vec![0.0]);
    let config = Config::uniform(1, [0.0, 1.0], 0.5).unwrap();

    let result = search(&FailsAboveQuarter, &problem, &config);

    let Err(Error::Model(err)) = result else {
        panic!("expected a model error");
    };
    assert_eq!(err.to_string(), "too large");
}

#[test]
fn repeated_searches_are_identical() {
    let config = Config::uniform(2, [0.0, 0.5], 0.05).unwrap();

    let first = search(&Coordinates, &DistanceTo::new(vec![0.123, 0.321]), &config).unwrap();
    let second = search(&Coordinates, &DistanceTo::new(vec![0.123, 0.321]), &config).unwrap();

    assert_eq!(first.index, second.index);
    assert_eq!(first.x, second.x);
    assert_eq!(first.objective.to_bits(), second.objective.to_bits());
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_search_matches_sequential() {
    use super::search_parallel;

    struct Distance(Vec<f64>);

    impl MinimizationProblem for Distance {
        type Input = Vec<f64>;
        type Output = Vec<f64>;
        type Error = Infallible;

        fn input(&self, x: &[f64]) -> Result<Vec<f64>, Self::Error> {
            Ok(x.to_vec())
        }

        fn objective(&self, _: &Vec<f64>, output: &Vec<f64>) -> Result<f64, Self::Error> {
            Ok(output.iter().zip(&self.0).map(|(a, b)| (a - b).abs()).sum())
        }
    }

    let problem = Distance(vec![0.31, 0.07]);
    let config = Config::uniform(2, [0.0, 0.6], 0.02).unwrap();

    let sequential = search(&Coordinates, &problem, &config).unwrap();
    let parallel = search_parallel(&Coordinates, &problem, &config).unwrap();

    assert_eq!(sequential.index, parallel.index);
    assert_eq!(sequential.x, parallel.x);
}
