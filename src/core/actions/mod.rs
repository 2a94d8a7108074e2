pub mod colourize;
pub mod sample_grid;
