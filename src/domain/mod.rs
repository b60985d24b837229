// Domain layer: the student record, derived grade report and the ports the core depends on.

pub mod model;
pub mod ports;
