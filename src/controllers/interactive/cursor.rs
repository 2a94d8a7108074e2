use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;

const CONSTANT_DECIMALS: i32 = 4;

/// Maps a window position to a Julia constant. Screen y grows downwards and
/// the imaginary axis grows upwards, so the vertical axis is flipped. The
/// result is rounded to four decimal places.
#[must_use]
pub fn cursor_to_constant(cursor: Point, grid: GridSize, region: ComplexRect) -> Complex {
    let width = grid.width() as f64;
    let height = grid.height() as f64;
    let min = region.min();

    Complex::new(
        min.real + (cursor.x as f64 / width) * region.width(),
        min.imag + ((height - cursor.y as f64) / height) * region.height(),
    )
    .rounded(CONSTANT_DECIMALS)
}
