//! Physical constants shared by the interfacial energy models.

/// Molar gas constant in J/(mol·K).
pub const GAS_CONSTANT: f64 = 8.31451;

/// Avogadro constant in 1/mol, at the precision the models were calibrated with.
pub const AVOGADRO: f64 = 6.02e23;
