// Domain layer: month anchors, durations and the biographical records they are computed from.

pub mod model;
pub mod ports;
