pub mod ports;
pub mod sample_field;
pub mod sample_grid_banded;
pub mod sample_grid_rayon;
pub mod sample_grid_serial;
