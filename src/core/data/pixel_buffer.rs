use crate::core::data::colour::Colour;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

fn grid_to_buffer_size(grid: GridSize) -> usize {
    grid.size() * 3
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    BoundsMismatch {
        grid_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                grid_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "grid size {} does not match buffer size {}",
                    grid_size, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB raster, row-major, three bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    grid: GridSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(grid: GridSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let buffer_size = grid_to_buffer_size(grid);

        if buffer_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                grid_size: buffer_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { grid, buffer })
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        if !self.grid.contains_point(pixel) {
            return None;
        }

        let index = self.index_of(pixel);

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    /// Copies the raster into an RGBA frame with opaque alpha.
    pub fn copy_to_rgba(&self, dest: &mut [u8]) -> Result<(), PixelBufferError> {
        let expected = self.grid.size() * 4;

        if dest.len() != expected {
            return Err(PixelBufferError::BoundsMismatch {
                grid_size: expected,
                buffer_size: dest.len(),
            });
        }

        for (src_pixel, dst_pixel) in self.buffer.chunks_exact(3).zip(dest.chunks_exact_mut(4)) {
            dst_pixel[0] = src_pixel[0];
            dst_pixel[1] = src_pixel[1];
            dst_pixel[2] = src_pixel[2];
            dst_pixel[3] = 255;
        }

        Ok(())
    }

    fn index_of(&self, pixel: Point) -> usize {
        (pixel.y as usize * self.grid.width() as usize + pixel.x as usize) * 3
    }
}
