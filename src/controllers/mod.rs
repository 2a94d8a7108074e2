pub mod batch;
pub mod interactive;
pub mod ports;
pub mod render;
