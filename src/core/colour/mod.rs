pub mod colour_policy;
pub mod errors;
pub mod gradient;
pub mod log_scale_map;
pub mod palette;
pub mod palette_name;
pub mod wrap_map;
