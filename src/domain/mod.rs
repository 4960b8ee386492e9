// Domain layer: models and ports. Ports return the crate error type and the loaded store config.

pub mod model;
pub mod ports;
