// Domain layer: cipher value types and the ports the engine is driven through.

pub mod model;
pub mod ports;
