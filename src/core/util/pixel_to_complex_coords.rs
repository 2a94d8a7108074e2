use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideGrid { point: Point, grid: GridSize },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideGrid { point, grid } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} sampling grid",
                    point.x,
                    point.y,
                    grid.width(),
                    grid.height()
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Per-axis step sizes `(dx, dy)` between neighbouring cells.
#[must_use]
pub fn grid_steps(grid: GridSize, region: ComplexRect) -> (f64, f64) {
    (
        region.width() / grid.width() as f64,
        region.height() / grid.height() as f64,
    )
}

/// Maps cell `(ix, iy)` to `(min_x + ix * dx, min_y + iy * dy)`.
///
/// The grid is exclusive of the upper bounds: the last column sits one step
/// short of `max_x`, the last row one step short of `max_y`.
pub fn pixel_to_complex_coords(
    pixel: Point,
    grid: GridSize,
    region: ComplexRect,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !grid.contains_point(pixel) {
        return Err(PixelToComplexCoordsError::PointOutsideGrid { point: pixel, grid });
    }

    let (dx, dy) = grid_steps(grid, region);

    Ok(Complex {
        real: region.min().real + pixel.x as f64 * dx,
        imag: region.min().imag + pixel.y as f64 * dy,
    })
}
