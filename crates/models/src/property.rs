//! Physical property helpers feeding the interface models.
//!
//! - [`molar_area`]: molar interfacial area from a molar volume
//! - [`molar_volume`]: temperature-dependent pure and interfacial molar volumes
//! - [`excess`]: Redlich–Kister excess Gibbs energy and its partial quantities

pub mod excess;
pub mod molar_area;
pub mod molar_volume;
