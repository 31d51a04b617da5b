// Domain layer: transient models and ports (interfaces) for the host platform.

pub mod model;
pub mod ports;
