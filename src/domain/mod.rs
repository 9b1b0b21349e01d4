// Domain layer: response models and the downstream port. No HTTP framework types here.

pub mod model;
pub mod ports;
