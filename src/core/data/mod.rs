pub mod colour;
pub mod complex;
pub mod complex_rect;
pub mod grid_size;
pub mod iteration_field;
pub mod pixel_buffer;
pub mod point;
