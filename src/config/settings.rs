use crate::config::fractal_config::FractalConfig;
use crate::core::actions::sample_grid::sample_field::SamplerKind;
use crate::core::colour::colour_policy::ColourPolicy;
use crate::core::colour::errors::PaletteError;
use crate::core::colour::palette_name::PaletteName;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::grid_size::{GridSize, GridSizeError};
use crate::core::fractals::escape_params::{EscapeParams, EscapeParamsError};
use crate::core::fractals::fractal_mode::FractalMode;
use crate::core::fractals::iteration_fn::IterationFn;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_MAX_ITERATIONS: u32 = 200;
pub const DEFAULT_RADIUS: f64 = 2.0;
pub const DEFAULT_FRAME_RATE: u32 = 144;
pub const DEFAULT_CONSTANT: Complex = Complex::new(0.3341, 0.3966);

#[derive(Debug)]
pub enum SettingsError {
    InvalidRegion(ComplexRectError),
    InvalidGrid(GridSizeError),
    InvalidEscapeParams(EscapeParamsError),
    UnsupportedColourMap(PaletteError),
    InvalidFrameRate,
    Read { path: PathBuf, source: std::io::Error },
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
}

impl SettingsError {
    /// True for values that failed validation, as opposed to I/O or syntax
    /// problems with the settings file.
    #[must_use]
    pub fn is_invalid_parameter(&self) -> bool {
        !matches!(
            self,
            Self::Read { .. } | Self::Parse(_) | Self::Serialize(_)
        )
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRegion(err) => write!(f, "invalid region: {}", err),
            Self::InvalidGrid(err) => write!(f, "invalid grid: {}", err),
            Self::InvalidEscapeParams(err) => write!(f, "invalid escape parameters: {}", err),
            Self::UnsupportedColourMap(err) => write!(f, "{}", err),
            Self::InvalidFrameRate => write!(f, "frame rate must be at least 1"),
            Self::Read { path, source } => {
                write!(f, "failed to read settings from {}: {}", path.display(), source)
            }
            Self::Parse(err) => write!(f, "failed to parse settings: {}", err),
            Self::Serialize(err) => write!(f, "failed to serialize settings: {}", err),
        }
    }
}

impl Error for SettingsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRegion(err) => Some(err),
            Self::InvalidGrid(err) => Some(err),
            Self::InvalidEscapeParams(err) => Some(err),
            Self::UnsupportedColourMap(err) => Some(err),
            Self::InvalidFrameRate => None,
            Self::Read { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<ComplexRectError> for SettingsError {
    fn from(err: ComplexRectError) -> Self {
        Self::InvalidRegion(err)
    }
}

impl From<GridSizeError> for SettingsError {
    fn from(err: GridSizeError) -> Self {
        Self::InvalidGrid(err)
    }
}

impl From<EscapeParamsError> for SettingsError {
    fn from(err: EscapeParamsError) -> Self {
        Self::InvalidEscapeParams(err)
    }
}

impl From<PaletteError> for SettingsError {
    fn from(err: PaletteError) -> Self {
        Self::UnsupportedColourMap(err)
    }
}

/// Unvalidated parameters as they arrive from a settings file or the command
/// line. Missing keys fall back to [`Settings::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub radius: f64,
    pub colour_map: String,
    pub constant: Complex,
    pub frame_rate: u32,
    pub iteration_fn: IterationFn,
    pub mode: FractalMode,
    pub policy: ColourPolicy,
    pub sampler: SamplerKind,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            min_x: -1.0,
            min_y: -1.0,
            max_x: 1.0,
            max_y: 1.0,
            radius: DEFAULT_RADIUS,
            colour_map: PaletteName::default().name().to_string(),
            constant: DEFAULT_CONSTANT,
            frame_rate: DEFAULT_FRAME_RATE,
            iteration_fn: IterationFn::default(),
            mode: FractalMode::default(),
            policy: ColourPolicy::default(),
            sampler: SamplerKind::default(),
        }
    }
}

impl Settings {
    /// Defaults for batch image runs: cubic iteration, log colouring and the
    /// plain twilight map.
    #[must_use]
    pub fn batch_defaults() -> Self {
        Self {
            colour_map: PaletteName::Twilight.name().to_string(),
            iteration_fn: IterationFn::Cubic,
            policy: ColourPolicy::Log,
            ..Self::default()
        }
    }

    pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
        toml::from_str(source).map_err(SettingsError::Parse)
    }

    /// Reads a TOML settings file. Keys not present keep the values of `base`.
    pub fn load(path: impl AsRef<Path>, base: Self) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let overrides: toml::Table = toml::from_str(&source).map_err(SettingsError::Parse)?;
        let mut merged = toml::Table::try_from(base).map_err(SettingsError::Serialize)?;
        merged.extend(overrides);

        merged.try_into().map_err(SettingsError::Parse)
    }

    pub fn region(&self) -> Result<ComplexRect, SettingsError> {
        Ok(ComplexRect::from_bounds(
            self.min_x, self.min_y, self.max_x, self.max_y,
        )?)
    }

    pub fn frame_rate(&self) -> Result<NonZeroU32, SettingsError> {
        NonZeroU32::new(self.frame_rate).ok_or(SettingsError::InvalidFrameRate)
    }

    /// Applies the boundary rules: positive grid, iteration cap and radius,
    /// non-empty region and a known colour map name.
    pub fn validate(&self) -> Result<FractalConfig, SettingsError> {
        let grid = GridSize::new(self.width, self.height)?;
        let region = self.region()?;
        let params = EscapeParams::new(self.constant, self.radius, self.max_iterations)?;
        let palette: PaletteName = self.colour_map.parse()?;

        Ok(FractalConfig {
            region,
            grid,
            params,
            mode: self.mode,
            iteration_fn: self.iteration_fn,
            palette,
            policy: self.policy,
            sampler: self.sampler,
        })
    }
}
