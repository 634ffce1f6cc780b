// Domain layer: the car record, sample data and ports (interfaces).

pub mod model;
pub mod ports;
pub mod sample;
