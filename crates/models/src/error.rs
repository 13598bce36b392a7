use thiserror::Error;

/// Errors raised while evaluating or constructing an interfacial energy model.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A construction-time vector does not match the number of components.
    #[error("`{name}` has {found} entries, expected one per component ({expected})")]
    LengthMismatch {
        name: &'static str,
        expected: usize,
        found: usize,
    },

    /// A composition-dependent quantity returned the wrong number of values.
    #[error("`{name}` returned {found} values for {expected} components")]
    PartialsLength {
        name: &'static str,
        expected: usize,
        found: usize,
    },

    /// A solution-model interaction names an invalid component pair.
    #[error("interaction ({i}, {j}) is invalid for {components} components")]
    Interaction {
        i: usize,
        j: usize,
        components: usize,
    },
}

/// Checks that a construction-time vector has one entry per component.
pub(crate) fn check_len(
    name: &'static str,
    values: &[f64],
    expected: usize,
) -> Result<(), ModelError> {
    if values.len() == expected {
        Ok(())
    } else {
        Err(ModelError::LengthMismatch {
            name,
            expected,
            found: values.len(),
        })
    }
}

/// Checks that an evaluated quantity has one value per component.
pub(crate) fn check_partials(
    name: &'static str,
    values: Vec<f64>,
    expected: usize,
) -> Result<Vec<f64>, ModelError> {
    if values.len() == expected {
        Ok(values)
    } else {
        Err(ModelError::PartialsLength {
            name,
            expected,
            found: values.len(),
        })
    }
}
