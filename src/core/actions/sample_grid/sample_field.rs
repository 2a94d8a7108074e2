use crate::core::actions::sample_grid::sample_grid_banded::sample_grid_banded;
use crate::core::actions::sample_grid::sample_grid_rayon::sample_grid_rayon;
use crate::core::actions::sample_grid::sample_grid_serial::sample_grid_serial;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::grid_size::GridSize;
use crate::core::data::iteration_field::{IterationField, IterationFieldError};
use crate::core::fractals::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::escape_params::EscapeParams;
use crate::core::fractals::fractal_mode::FractalMode;
use crate::core::fractals::iteration_fn::IterationFunction;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;
use tracing::debug;

/// Scheduling strategy for the per-cell fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplerKind {
    /// Rows handed to rayon's work-stealing pool.
    #[default]
    Rayon,
    /// One scoped thread per band of rows.
    Banded,
    /// Single thread, mostly for comparison.
    Serial,
}

impl SamplerKind {
    pub const ALL: &'static [Self] = &[Self::Rayon, Self::Banded, Self::Serial];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rayon => "rayon",
            Self::Banded => "banded",
            Self::Serial => "serial",
        }
    }
}

impl fmt::Display for SamplerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSampler(pub String);

impl fmt::Display for UnknownSampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sampler \"{}\", expected rayon, banded or serial",
            self.0
        )
    }
}

impl Error for UnknownSampler {}

impl FromStr for SamplerKind {
    type Err = UnknownSampler;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSampler(s.to_string()))
    }
}

#[derive(Debug)]
pub enum SampleFieldError {
    Algorithm(PixelToComplexCoordsError),
    Field(IterationFieldError),
}

impl fmt::Display for SampleFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Algorithm(err) => write!(f, "fractal algorithm error: {}", err),
            Self::Field(err) => write!(f, "iteration field error: {}", err),
        }
    }
}

impl Error for SampleFieldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Algorithm(err) => Some(err),
            Self::Field(err) => Some(err),
        }
    }
}

impl From<PixelToComplexCoordsError> for SampleFieldError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::Algorithm(err)
    }
}

impl From<IterationFieldError> for SampleFieldError {
    fn from(err: IterationFieldError) -> Self {
        Self::Field(err)
    }
}

/// Samples `region` on `grid` with the rayon sampler.
pub fn sample_field<F: IterationFunction>(
    region: ComplexRect,
    grid: GridSize,
    params: EscapeParams,
    mode: FractalMode,
    iteration_fn: F,
) -> Result<IterationField, SampleFieldError> {
    sample_field_with(SamplerKind::Rayon, region, grid, params, mode, iteration_fn)
}

/// Samples `region` on `grid`, producing one escape count per cell.
#[tracing::instrument(
    skip_all,
    fields(
        sampler = %sampler,
        width = grid.width(),
        height = grid.height(),
        mode = %mode,
        max_iterations = params.max_iterations()
    )
)]
pub fn sample_field_with<F: IterationFunction>(
    sampler: SamplerKind,
    region: ComplexRect,
    grid: GridSize,
    params: EscapeParams,
    mode: FractalMode,
    iteration_fn: F,
) -> Result<IterationField, SampleFieldError> {
    let algorithm = EscapeTimeAlgorithm::new(grid, region, params, mode, iteration_fn);
    let start = Instant::now();

    let values = match sampler {
        SamplerKind::Rayon => sample_grid_rayon(&algorithm)?,
        SamplerKind::Banded => sample_grid_banded(&algorithm)?,
        SamplerKind::Serial => sample_grid_serial(&algorithm)?,
    };

    debug!(elapsed = ?start.elapsed(), "sampled grid");

    Ok(IterationField::from_values(
        grid,
        params.max_iterations(),
        values,
    )?)
}
