// Domain layer: the descriptor model and the accessor port. No I/O.

pub mod model;
pub mod ports;
