use crate::core::actions::sample_grid::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use crate::core::fractals::escape_params::EscapeParams;
use crate::core::fractals::escape_time::escape_time;
use crate::core::fractals::fractal_mode::FractalMode;
use crate::core::fractals::iteration_fn::{IterationFn, IterationFunction};
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

/// Escape-time evaluation of one grid cell: maps the cell into the region
/// and runs [`escape_time`] in the configured mode.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeTimeAlgorithm<F = IterationFn> {
    grid: GridSize,
    region: ComplexRect,
    params: EscapeParams,
    mode: FractalMode,
    iteration_fn: F,
}

impl<F: IterationFunction> FractalAlgorithm for EscapeTimeAlgorithm<F> {
    type Success = u32;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let point = pixel_to_complex_coords(pixel, self.grid, self.region)?;
        let (z0, c) = self.mode.start_and_constant(point, self.params.c());

        Ok(escape_time(
            z0,
            c,
            self.params.radius(),
            self.params.max_iterations(),
            &self.iteration_fn,
        ))
    }

    fn grid(&self) -> GridSize {
        self.grid
    }
}

impl<F: IterationFunction> EscapeTimeAlgorithm<F> {
    #[must_use]
    pub fn new(
        grid: GridSize,
        region: ComplexRect,
        params: EscapeParams,
        mode: FractalMode,
        iteration_fn: F,
    ) -> Self {
        Self {
            grid,
            region,
            params,
            mode,
            iteration_fn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    fn create_algorithm(mode: FractalMode) -> EscapeTimeAlgorithm {
        let grid = GridSize::new(4, 4).unwrap();
        let region = ComplexRect::from_bounds(-1.0, -1.0, 1.0, 1.0).unwrap();
        let params = EscapeParams::new(Complex::ZERO, 2.0, 50).unwrap();

        EscapeTimeAlgorithm::new(grid, region, params, mode, IterationFn::Quadratic)
    }

    #[test]
    fn mandelbrot_centre_cell_is_inside() {
        let algorithm = create_algorithm(FractalMode::Mandelbrot);

        assert_eq!(algorithm.compute(Point { x: 2, y: 2 }), Ok(50));
    }

    #[test]
    fn mandelbrot_corner_cell_escapes() {
        let algorithm = create_algorithm(FractalMode::Mandelbrot);

        assert_eq!(algorithm.compute(Point { x: 0, y: 0 }), Ok(3));
    }

    #[test]
    fn julia_with_zero_constant_keeps_unit_disc() {
        // z -> z², points with |z0| < 1 stay bounded, |z0| > 1 diverge
        let algorithm = create_algorithm(FractalMode::Julia);

        assert_eq!(algorithm.compute(Point { x: 3, y: 2 }), Ok(50));
        assert!(algorithm.compute(Point { x: 0, y: 0 }).unwrap() < 50);
    }

    #[test]
    fn compute_returns_error_for_pixel_outside_grid() {
        let algorithm = create_algorithm(FractalMode::Julia);
        let point = Point { x: 4, y: 0 };

        assert_eq!(
            algorithm.compute(point),
            Err(PixelToComplexCoordsError::PointOutsideGrid {
                point,
                grid: algorithm.grid()
            })
        );
    }
}
