// Domain layer: wire payloads, UI value types and the two ports.

pub mod model;
pub mod ports;
