pub mod calculate_bands_in_grid;
pub mod calculate_threads_for_grid_banding;
pub mod pixel_to_complex_coords;
