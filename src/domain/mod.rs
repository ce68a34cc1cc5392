// Domain layer: flight models and the filter/clock ports. No I/O.

pub mod model;
pub mod ports;
