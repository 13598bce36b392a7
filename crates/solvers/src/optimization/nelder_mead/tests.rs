use std::convert::Infallible;

use approx::assert_relative_eq;
use thiserror::Error;

use interfacial_core::{MinimizationProblem, Model};

use super::{Action, Config, Error, Event, Status, Step, minimize, minimize_unobserved};

/// Passes the solver variables through unchanged.
struct Coordinates;

impl Model for Coordinates {
    type Input = Vec<f64>;
    type Output = Vec<f64>;
    type Error = Infallible;

    fn call(&self, x: &Vec<f64>) -> Result<Vec<f64>, Self::Error> {
        Ok(x.clone())
    }
}

/// f(x, y) = (x - 0.3)² + 2 (y - 0.1)².
struct Bowl;

impl MinimizationProblem for Bowl {
    type Input = Vec<f64>;
    type Output = Vec<f64>;
    type Error = Infallible;

    fn input(&self, x: &[f64]) -> Result<Vec<f64>, Self::Error> {
        Ok(x.to_vec())
    }

    fn objective(&self, _input: &Vec<f64>, output: &Vec<f64>) -> Result<f64, Self::Error> {
        Ok((output[0] - 0.3).powi(2) + 2.0 * (output[1] - 0.1).powi(2))
    }
}

/// f(x) = |x - 0.004|, a kinked one-dimensional objective.
struct Kink;

impl MinimizationProblem for Kink {
    type Input = Vec<f64>;
    type Output = Vec<f64>;
    type Error = Infallible;

    fn input(&self, x: &[f64]) -> Result<Vec<f64>, Self::Error> {
        Ok(x.to_vec())
    }

    fn objective(&self, _input: &Vec<f64>, output: &Vec<f64>) -> Result<f64, Self::Error> {
        Ok((output[0] - 0.004).abs())
    }
}

/// Rosenbrock's banana function with its minimum at (1, 1).
struct Rosenbrock;

impl MinimizationProblem for Rosenbrock {
    type Input = Vec<f64>;
    type Output = Vec<f64>;
    type Error = Infallible;

    fn input(&self, x: &[f64]) -> Result<Vec<f64>, Self::Error> {
        Ok(x.to_vec())
    }

    fn objective(&self, _input: &Vec<f64>, v: &Vec<f64>) -> Result<f64, Self::Error> {
        Ok(100.0 * (v[1] - v[0] * v[0]).powi(2) + (1.0 - v[0]).powi(2))
    }
}

#[test]
fn minimizes_quadratic_bowl() {
    let solution = minimize_unobserved(&Coordinates, &Bowl, &[0.5, 0.5], &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x[0], 0.3, epsilon = 1e-4);
    assert_relative_eq!(solution.x[1], 0.1, epsilon = 1e-4);
    assert!(solution.objective < 1e-9);
}

#[test]
fn minimizes_kinked_one_dimensional_objective() {
    let solution = minimize_unobserved(&Coordinates, &Kink, &[0.01], &Config::default())
        .expect("should converge");

    assert_relative_eq!(solution.x[0], 0.004, epsilon = 1e-8);
    assert_eq!(solution.snapshot.input, solution.x);
}

#[test]
fn finds_rosenbrock_minimum() {
    let config = Config::from_tol(1e-10).unwrap().with_max_iters(5000).with_max_evals(10_000);

    let solution =
        minimize_unobserved(&Coordinates, &Rosenbrock, &[-1.2, 1.0], &config).expect("should run");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x[0], 1.0, epsilon = 1e-4);
    assert_relative_eq!(solution.x[1], 1.0, epsilon = 1e-4);
}

#[test]
fn never_worse_than_start() {
    let start = [0.9, -0.4];
    let config = Config::default().with_max_iters(3);
    let start_objective = (start[0] - 0.3_f64).powi(2) + 2.0 * (start[1] - 0.1_f64).powi(2);

    let solution = minimize_unobserved(&Coordinates, &Bowl, &start, &config).expect("should run");

    assert!(solution.objective <= start_objective);
}

#[test]
fn budget_exhaustion_is_not_an_error() {
    let config = Config::default().with_max_iters(2);

    let solution =
        minimize_unobserved(&Coordinates, &Rosenbrock, &[-1.2, 1.0], &config).expect("should run");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 2);
    // Three initial vertices plus at least one evaluation per iteration.
    assert!(solution.evals >= 5);
}

#[test]
fn evaluation_budget_is_respected() {
    let config = Config::default().with_max_evals(10);

    let solution =
        minimize_unobserved(&Coordinates, &Rosenbrock, &[-1.2, 1.0], &config).expect("should run");

    assert_eq!(solution.status, Status::MaxIters);
    // The budget is checked between iterations; one 2-D iteration costs at most four evaluations.
    assert!(solution.evals <= 10 + 3);
}

#[test]
fn zero_coordinates_use_absolute_displacement() {
    let mut first_step = None;
    let observer = |event: &Event<'_>| {
        first_step.get_or_insert(event.step);
        Some(Action::StopEarly)
    };

    let solution =
        minimize(&Coordinates, &Bowl, &[0.0, 0.0], &Config::default(), observer).expect("runs");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 1);
    assert!(first_step.is_some());
    // Moving from the origin toward (0.3, 0.1) must improve on the start.
    assert!(solution.objective < 0.3_f64.powi(2) + 2.0 * 0.1_f64.powi(2));
}

#[test]
fn observer_sees_non_increasing_best() {
    let mut history = Vec::new();
    let observer = |event: &Event<'_>| {
        history.push((event.objective, event.step));
        None
    };

    let solution =
        minimize(&Coordinates, &Bowl, &[0.8, 0.7], &Config::default(), observer).expect("runs");

    assert_eq!(history.len(), solution.iters);
    for pair in history.windows(2) {
        assert!(pair[1].0 <= pair[0].0);
    }
    assert!(history.iter().any(|(_, step)| *step != Step::Shrink));
}

#[test]
fn identical_inputs_give_identical_results() {
    let run = || minimize_unobserved(&Coordinates, &Bowl, &[0.71, 0.23], &Config::default());

    let first = run().expect("runs");
    let second = run().expect("runs");

    assert_eq!(first.x, second.x);
    assert_eq!(first.objective.to_bits(), second.objective.to_bits());
    assert_eq!(first.evals, second.evals);
}

#[test]
fn nan_regions_are_avoided() {
    struct NanAboveHalf;

    impl MinimizationProblem for NanAboveHalf {
        type Input = Vec<f64>;
        type Output = Vec<f64>;
        type Error = Infallible;

        fn input(&self, x: &[f64]) -> Result<Vec<f64>, Self::Error> {
            Ok(x.to_vec())
        }

        fn objective(&self, _: &Vec<f64>, v: &Vec<f64>) -> Result<f64, Self::Error> {
            if v[0] > 0.5 {
                Ok(f64::NAN)
            } else {
                Ok((v[0] - 0.45).powi(2))
            }
        }
    }

    let solution = minimize_unobserved(&Coordinates, &NanAboveHalf, &[0.2], &Config::default())
        .expect("runs");

    assert!(solution.objective.is_finite());
    assert_relative_eq!(solution.x[0], 0.45, epsilon = 1e-4);
}

#[test]
fn rejects_empty_and_non_finite_starts() {
    let empty = minimize_unobserved(&Coordinates, &Bowl, &[], &Config::default());
    assert!(matches!(empty, Err(Error::EmptyStart)));

    let nan = minimize_unobserved(&Coordinates, &Bowl, &[0.1, f64::NAN], &Config::default());
    assert!(matches!(nan, Err(Error::NonFiniteStart { index: 1, .. })));
}

#[test]
fn problem_errors_propagate() {
    #[derive(Debug, Error)]
    #[error("left the domain")]
    struct OutOfDomain;

    struct Positive;

    impl MinimizationProblem for Positive {
        type Input = Vec<f64>;
        type Output = Vec<f64>;
        type Error = OutOfDomain;

        fn input(&self, x: &[f64]) -> Result<Vec<f64>, Self::Error> {
            if x[0] < 0.0 { Err(OutOfDomain) } else { Ok(x.to_vec()) }
        }

        fn objective(&self, _: &Vec<f64>, v: &Vec<f64>) -> Result<f64, Self::Error> {
            Ok(v[0])
        }
    }

    let result = minimize_unobserved(&Coordinates, &Positive, &[0.01], &Config::default());

    let Err(Error::Problem(err)) = result else {
        panic!("expected a problem error");
    };
    assert_eq!(err.to_string(), "left the domain");
}
