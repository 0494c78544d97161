// Domain layer: train records, the headcode table and ports. No HTTP or HTML here.

pub mod headcode;
pub mod model;
pub mod ports;
