pub mod png;
pub mod ppm;
