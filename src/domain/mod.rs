// Domain layer: core models and ports (interfaces). No dependencies beyond
// std/serde and the crate error type.

pub mod model;
pub mod ports;
