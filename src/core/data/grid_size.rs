use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridSizeError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for GridSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "grid size must be at least 1x1: {}x{}", width, height)
            }
        }
    }
}

impl Error for GridSizeError {}

/// Sampling resolution. Cells are addressed by `Point { x: ix, y: iy }` with
/// `0 <= ix < width` and `0 <= iy < height`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridSize {
    width: u32,
    height: u32,
}

impl GridSize {
    pub fn new(width: u32, height: u32) -> Result<Self, GridSizeError> {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(GridSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size_new_valid() {
        let grid = GridSize::new(800, 600).unwrap();

        assert_eq!(grid.width(), 800);
        assert_eq!(grid.height(), 600);
        assert_eq!(grid.size(), 480_000);
    }

    #[test]
    fn test_single_cell_grid_is_valid() {
        let grid = GridSize::new(1, 1).unwrap();

        assert_eq!(grid.size(), 1);
        assert!(grid.contains_point(Point { x: 0, y: 0 }));
    }

    #[test]
    fn test_grid_size_dimensions_must_be_positive() {
        assert_eq!(
            GridSize::new(0, 10),
            Err(GridSizeError::InvalidSize { width: 0, height: 10 })
        );
        assert_eq!(
            GridSize::new(10, 0),
            Err(GridSizeError::InvalidSize { width: 10, height: 0 })
        );
    }

    #[test]
    fn test_grid_size_contains_point_is_exclusive() {
        let grid = GridSize::new(4, 3).unwrap();

        assert!(grid.contains_point(Point { x: 0, y: 0 }));
        assert!(grid.contains_point(Point { x: 3, y: 2 }));
        assert!(!grid.contains_point(Point { x: 4, y: 2 }));
        assert!(!grid.contains_point(Point { x: 3, y: 3 }));
        assert!(!grid.contains_point(Point { x: -1, y: 0 }));
    }
}
