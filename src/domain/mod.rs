// Domain layer: tour models, the optional-value type and ports (traits).

pub mod model;
pub mod optional;
pub mod ports;
pub mod shapes;
