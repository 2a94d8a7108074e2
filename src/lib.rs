pub mod config;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;

pub use crate::config::{FractalConfig, Settings, SettingsError, ViewArgs};
pub use crate::controllers::batch::{BatchController, DEFAULT_BATCH_CONSTANTS};
pub use crate::controllers::render::{RenderController, render_frame};
pub use crate::core::actions::colourize::colourize::{colourize, colourize_with_policy};
pub use crate::core::actions::sample_grid::sample_field::{
    SamplerKind, sample_field, sample_field_with,
};
pub use crate::core::colour::colour_policy::ColourPolicy;
pub use crate::core::colour::palette::{Palette, build_palette};
pub use crate::core::colour::palette_name::PaletteName;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::ComplexRect;
pub use crate::core::data::grid_size::GridSize;
pub use crate::core::data::iteration_field::IterationField;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::fractals::escape_params::EscapeParams;
pub use crate::core::fractals::escape_time::escape_time;
pub use crate::core::fractals::fractal_mode::FractalMode;
pub use crate::core::fractals::iteration_fn::{IterationFn, IterationFunction};
#[cfg(feature = "gui")]
pub use crate::input::gui::run_gui;
pub use crate::presenters::file::png::PngFilePresenter;
pub use crate::presenters::file::ppm::PpmFilePresenter;
