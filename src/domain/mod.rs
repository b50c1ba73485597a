// Domain layer: core models and ports (interfaces). No external dependencies beyond serde/strum.

pub mod model;
pub mod ports;
