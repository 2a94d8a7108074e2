use crate::core::actions::sample_grid::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Fills `rows` (whole rows, row-major) starting at grid row `first_row`.
pub(crate) fn fill_rows<Alg: FractalAlgorithm>(
    algorithm: &Alg,
    first_row: u32,
    rows: &mut [Alg::Success],
) -> Result<(), Alg::Failure> {
    let width = algorithm.grid().width() as usize;

    for (row_offset, row) in rows.chunks_mut(width).enumerate() {
        let y = (first_row as usize + row_offset) as i32;

        for (x, cell) in row.iter_mut().enumerate() {
            *cell = algorithm.compute(Point { x: x as i32, y })?;
        }
    }

    Ok(())
}

/// Single-threaded reference sampler.
pub fn sample_grid_serial<Alg>(algorithm: &Alg) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm,
    Alg::Success: Default + Clone,
{
    let mut values = vec![Alg::Success::default(); algorithm.grid().size()];
    fill_rows(algorithm, 0, &mut values)?;

    Ok(values)
}

#[cfg(test)]
pub(crate) mod stubs {
    use crate::core::actions::sample_grid::ports::fractal_algorithm::FractalAlgorithm;
    use crate::core::data::grid_size::GridSize;
    use crate::core::data::point::Point;
    use std::error::Error;

    #[derive(Debug, PartialEq)]
    pub struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    pub struct StubSuccessAlgorithm {
        pub grid: GridSize,
    }

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok((pixel.y as u64) * 1000 + pixel.x as u64)
        }

        fn grid(&self) -> GridSize {
            self.grid
        }
    }

    #[derive(Debug)]
    pub struct StubFailureAlgorithm {
        pub grid: GridSize,
    }

    impl FractalAlgorithm for StubFailureAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            if pixel.y == 1 {
                Err(StubError {})
            } else {
                Ok(0)
            }
        }

        fn grid(&self) -> GridSize {
            self.grid
        }
    }

    pub fn success(width: u32, height: u32) -> StubSuccessAlgorithm {
        StubSuccessAlgorithm {
            grid: GridSize::new(width, height).unwrap(),
        }
    }

    pub fn failure(width: u32, height: u32) -> StubFailureAlgorithm {
        StubFailureAlgorithm {
            grid: GridSize::new(width, height).unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::stubs::{StubError, failure, success};
    use super::*;

    #[test]
    fn test_serial_is_row_major() {
        let results = sample_grid_serial(&success(3, 2)).unwrap();

        assert_eq!(results, vec![0, 1, 2, 1000, 1001, 1002]);
    }

    #[test]
    fn test_serial_single_cell() {
        let results = sample_grid_serial(&success(1, 1)).unwrap();

        assert_eq!(results, vec![0]);
    }

    #[test]
    fn test_serial_propagates_algorithm_failure() {
        let result = sample_grid_serial(&failure(3, 4));

        assert_eq!(result, Err(StubError {}));
    }

    #[test]
    fn test_fill_rows_offsets_by_first_row() {
        let algorithm = success(2, 5);
        let mut rows = vec![0; 4];

        fill_rows(&algorithm, 3, &mut rows).unwrap();

        assert_eq!(rows, vec![3000, 3001, 4000, 4001]);
    }
}
