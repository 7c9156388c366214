// Domain layer: core models and ports (interfaces). No cloud SDK types leak in here.

pub mod model;
pub mod ports;
