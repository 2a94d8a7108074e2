use crate::core::data::grid_size::GridSize;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationFieldError {
    BoundsMismatch { grid_size: usize, values_len: usize },
    ValueExceedsMax { index: usize, value: u32, max_iterations: u32 },
}

impl fmt::Display for IterationFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                grid_size,
                values_len,
            } => {
                write!(
                    f,
                    "grid size {} does not match number of values {}",
                    grid_size, values_len
                )
            }
            Self::ValueExceedsMax {
                index,
                value,
                max_iterations,
            } => {
                write!(
                    f,
                    "value {} at index {} exceeds maximum {}",
                    value, index, max_iterations
                )
            }
        }
    }
}

impl Error for IterationFieldError {}

/// Row-major escape counts, one per grid cell, each in `0..=max_iterations`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationField {
    grid: GridSize,
    max_iterations: u32,
    values: Vec<u32>,
}

impl IterationField {
    pub fn from_values(
        grid: GridSize,
        max_iterations: u32,
        values: Vec<u32>,
    ) -> Result<Self, IterationFieldError> {
        if values.len() != grid.size() {
            return Err(IterationFieldError::BoundsMismatch {
                grid_size: grid.size(),
                values_len: values.len(),
            });
        }

        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, value)| **value > max_iterations)
        {
            return Err(IterationFieldError::ValueExceedsMax {
                index,
                value,
                max_iterations,
            });
        }

        Ok(Self {
            grid,
            max_iterations,
            values,
        })
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
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    #[must_use]
    pub fn get(&self, ix: u32, iy: u32) -> Option<u32> {
        if ix >= self.width() || iy >= self.height() {
            return None;
        }

        self.values
            .get(iy as usize * self.width() as usize + ix as usize)
            .copied()
    }

    #[must_use]
    pub fn row(&self, iy: u32) -> Option<&[u32]> {
        let width = self.width() as usize;
        let start = iy as usize * width;

        self.values.get(start..start + width)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.values.chunks_exact(self.width() as usize)
    }
}
