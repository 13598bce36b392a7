use crate::optimization::evaluate::Evaluation;

use super::{Solution, Status};

/// The working simplex, kept sorted from best to worst objective.
pub(super) struct Simplex<I, O> {
    vertices: Vec<Evaluation<I, O>>,
}

impl<I, O> Simplex<I, O> {
    /// Creates a sorted simplex from at least two vertices.
    pub(super) fn new(vertices: Vec<Evaluation<I, O>>) -> Self {
        debug_assert!(vertices.len() >= 2, "a simplex needs at least two vertices");
        let mut simplex = Self { vertices };
        simplex.sort();
        simplex
    }

    /// Stable sort by objective with NaN ranked last.
    pub(super) fn sort(&mut self) {
        self.vertices
            .sort_by(|a, b| rank(a.objective).total_cmp(&rank(b.objective)));
    }

    pub(super) fn best(&self) -> &Evaluation<I, O> {
        &self.vertices[0]
    }

    pub(super) fn worst(&self) -> &Evaluation<I, O> {
        &self.vertices[self.vertices.len() - 1]
    }

    pub(super) fn second_worst(&self) -> &Evaluation<I, O> {
        &self.vertices[self.vertices.len() - 2]
    }

    /// Centroid of every vertex except the worst.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn centroid(&self) -> Vec<f64> {
        let kept = &self.vertices[..self.vertices.len() - 1];
        let mut centroid = vec![0.0; self.best().x.len()];
        for vertex in kept {
            for (c, x) in centroid.iter_mut().zip(&vertex.x) {
                *c += x;
            }
        }
        let n = kept.len() as f64;
        centroid.iter_mut().for_each(|c| *c /= n);
        centroid
    }

    /// Largest coordinate distance from the best vertex to any other vertex.
    pub(super) fn x_spread(&self) -> f64 {
        let best = &self.best().x;
        self.vertices[1..]
            .iter()
            .flat_map(|v| v.x.iter().zip(best).map(|(a, b)| (a - b).abs()))
            .fold(0.0, nan_max)
    }

    /// Largest objective gap between the best vertex and any other vertex.
    ///
    /// NaN propagates so that a simplex with a NaN vertex never converges.
    pub(super) fn f_spread(&self) -> f64 {
        let best = self.best().objective;
        self.vertices[1..]
            .iter()
            .map(|v| (v.objective - best).abs())
            .fold(0.0, nan_max)
    }

    pub(super) fn replace_worst(&mut self, vertex: Evaluation<I, O>) {
        let last = self.vertices.len() - 1;
        self.vertices[last] = vertex;
    }

    /// Points obtained by pulling every non-best vertex toward the best.
    pub(super) fn shrunk(&self, factor: f64) -> Vec<Vec<f64>> {
        let best = &self.best().x;
        self.vertices[1..]
            .iter()
            .map(|v| {
                v.x.iter()
                    .zip(best)
                    .map(|(x, b)| b + factor * (x - b))
                    .collect()
            })
            .collect()
    }

    pub(super) fn replace_all_but_best(&mut self, vertices: Vec<Evaluation<I, O>>) {
        self.vertices.truncate(1);
        self.vertices.extend(vertices);
    }

    pub(super) fn into_solution(self, status: Status, iters: usize, evals: usize) -> Solution<I, O> {
        let best = self
            .vertices
            .into_iter()
            .next()
            .unwrap_or_else(|| unreachable!("simplex is never empty"));
        Solution {
            status,
            x: best.x,
            objective: best.objective,
            snapshot: best.snapshot,
            iters,
            evals,
        }
    }
}

fn rank(objective: f64) -> f64 {
    if objective.is_nan() {
        f64::INFINITY
    } else {
        objective
    }
}

fn nan_max(acc: f64, value: f64) -> f64 {
    if value.is_nan() || acc.is_nan() {
        f64::NAN
    } else {
        acc.max(value)
    }
}
