// Domain layer: ports (interfaces) shared by the adapters. No HTTP types leak in here.

pub mod model;
pub mod ports;
