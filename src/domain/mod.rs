// Domain layer: launch model and ports. Nothing here touches processes or the environment directly.

pub mod model;
pub mod ports;
