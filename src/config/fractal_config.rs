use crate::core::actions::sample_grid::sample_field::{
    SampleFieldError, SamplerKind, sample_field_with,
};
use crate::core::colour::colour_policy::ColourPolicy;
use crate::core::colour::palette_name::PaletteName;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::grid_size::GridSize;
use crate::core::data::iteration_field::IterationField;
use crate::core::fractals::escape_params::EscapeParams;
use crate::core::fractals::fractal_mode::FractalMode;
use crate::core::fractals::iteration_fn::IterationFn;

/// A fully validated view: everything needed for one sample + colourise cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalConfig {
    pub region: ComplexRect,
    pub grid: GridSize,
    pub params: EscapeParams,
    pub mode: FractalMode,
    pub iteration_fn: IterationFn,
    pub palette: PaletteName,
    pub policy: ColourPolicy,
    pub sampler: SamplerKind,
}

impl FractalConfig {
    #[must_use]
    pub fn with_constant(self, c: Complex) -> Self {
        Self {
            params: self.params.with_c(c),
            ..self
        }
    }

    pub fn sample(&self) -> Result<IterationField, SampleFieldError> {
        sample_field_with(
            self.sampler,
            self.region,
            self.grid,
            self.params,
            self.mode,
            self.iteration_fn,
        )
    }
}
