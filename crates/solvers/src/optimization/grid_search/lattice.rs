/// Default boundary nudge applied to lattice coordinates.
pub const DEFAULT_TOL: f64 = 1e-10;

/// Builds the lattice on the unit hypercube `[0, 1]^d`.
///
/// Axis `i` is divided into `intervals[i]` equal parts, giving
/// `intervals[i] + 1` coordinates including both ends. Points are produced
/// by iterative Cartesian expansion starting from the origin, so the total
/// count is the product of `intervals[i] + 1` and the order is deterministic.
///
/// Every coordinate is pulled away from the hypercube boundary by `tol`
/// (`p -> tol + (p - tol) * (1 - tol)`) so that physics functions with
/// logarithms or fractional powers of a mole fraction stay finite.
///
/// An axis with zero intervals contributes only the origin coordinate.
#[must_use]
pub fn unit_lattice(intervals: &[usize], tol: f64) -> Vec<Vec<f64>> {
    raw_lattice(intervals)
        .into_iter()
        .map(|point| point.into_iter().map(|p| nudge(p, tol)).collect())
        .collect()
}

/// Builds the lattice without applying the boundary nudge.
#[allow(clippy::cast_precision_loss)]
pub(super) fn raw_lattice(intervals: &[usize]) -> Vec<Vec<f64>> {
    let mut points = vec![vec![0.0; intervals.len()]];

    for (axis, &n) in intervals.iter().enumerate() {
        let mut layer = Vec::with_capacity(points.len() * n);
        for j in 1..=n {
            let coord = j as f64 / n as f64;
            for point in &points {
                let mut next = point.clone();
                next[axis] = coord;
                layer.push(next);
            }
        }
        points.extend(layer);
    }

    points
}

/// Pulls a unit-interval coordinate away from the boundary.
pub(super) fn nudge(p: f64, tol: f64) -> f64 {
    tol + (p - tol) * (1.0 - tol)
}
