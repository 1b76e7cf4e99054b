// Domain layer: seed-data models, generator settings and ports.

pub mod model;
pub mod ports;
pub mod settings;
