// Domain layer: models, display labels and ports (interfaces).

pub mod labels;
pub mod model;
pub mod ports;
