use thiserror::Error;

/// Errors that can occur when validating a bisection bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    #[error("bracket endpoints must be finite, got [{left}, {right}]")]
    NonFinite { left: f64, right: f64 },

    #[error("bracket has zero width at {at}")]
    ZeroWidth { at: f64 },

    #[error("residuals {left_residual} and {right_residual} do not change sign")]
    NoSignChange {
        left_residual: f64,
        right_residual: f64,
    },
}

/// The sign of a residual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Zero or positive.
    Positive,
    Negative,
}

impl Sign {
    /// Returns the sign of a residual value.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Returns the endpoints in ascending order.
pub(super) fn ordered(bracket: [f64; 2]) -> Result<[f64; 2], BracketError> {
    let [left, right] = bracket;

    if !left.is_finite() || !right.is_finite() {
        return Err(BracketError::NonFinite { left, right });
    }

    #[allow(clippy::float_cmp)]
    if left == right {
        return Err(BracketError::ZeroWidth { at: left });
    }

    Ok(if left < right {
        [left, right]
    } else {
        [right, left]
    })
}

/// A bracket known to contain a sign change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    left: f64,
    right: f64,
    left_sign: Sign,
}

impl Bracket {
    pub(super) fn new(
        left: f64,
        right: f64,
        left_residual: f64,
        right_residual: f64,
    ) -> Result<Self, BracketError> {
        let left_sign = Sign::of(left_residual);
        if left_sign == Sign::of(right_residual) {
            return Err(BracketError::NoSignChange {
                left_residual,
                right_residual,
            });
        }

        Ok(Self {
            left,
            right,
            left_sign,
        })
    }

    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    pub(super) fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Moves the endpoint whose residual shares `sign` to `x`.
    pub(super) fn shrink(&mut self, x: f64, sign: Sign) {
        if sign == self.left_sign {
            self.left = x;
        } else {
            self.right = x;
        }
    }
}
