pub mod color;
pub mod ports;
