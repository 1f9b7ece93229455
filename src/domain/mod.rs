// Domain layer: models, error taxonomy and ports. Nothing in here talks to the network or the disk.

pub mod errors;
pub mod http;
pub mod model;
pub mod ports;
