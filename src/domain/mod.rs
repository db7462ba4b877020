// Domain layer: value types and the ports the core works against.

pub mod model;
pub mod ports;
