/// The move a Nelder–Mead iteration applied to the simplex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The worst vertex was reflected through the centroid.
    Reflect,

    /// The reflection was extended further along the same direction.
    Expand,

    /// The reflection was pulled back toward the centroid.
    ContractOutside,

    /// The worst vertex was pulled toward the centroid without reflecting.
    ContractInside,

    /// Every vertex but the best was pulled toward the best.
    Shrink,
}

/// Event emitted after each completed Nelder–Mead iteration.
///
/// The simplex has already been re-sorted, so `x` and `objective` describe
/// the best vertex after the move.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The move applied in this iteration.
    pub step: Step,

    /// The best vertex.
    pub x: &'a [f64],

    /// Objective at the best vertex.
    pub objective: f64,

    /// Largest coordinate distance from the best vertex to any other vertex.
    pub x_spread: f64,

    /// Largest objective gap between the best vertex and any other vertex.
    pub f_spread: f64,
}
