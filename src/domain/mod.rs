// Domain layer: UI component tree, request model and ports. No server code here.

pub mod model;
pub mod ports;
