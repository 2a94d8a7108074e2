//! Boundary-layer parameters: raw settings from TOML and the command line,
//! validated into a [`FractalConfig`] before anything reaches the core.

pub mod fractal_config;
pub mod overrides;
pub mod settings;

pub use fractal_config::FractalConfig;
pub use overrides::ViewArgs;
pub use settings::{Settings, SettingsError};
