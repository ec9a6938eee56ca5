// Domain layer: models, ports (interfaces) and the auth rules. Nothing here talks to MongoDB or HTTP directly.

pub mod model;
pub mod ports;
pub mod services;
