pub mod algorithm;
pub mod escape_params;
pub mod escape_time;
pub mod fractal_mode;
pub mod iteration_fn;
