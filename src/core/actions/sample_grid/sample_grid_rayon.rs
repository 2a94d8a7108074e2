use rayon::prelude::*;

use crate::core::actions::sample_grid::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::sample_grid::sample_grid_serial::fill_rows;

/// Samples every grid cell in parallel on rayon's pool.
///
/// The output buffer is split into one mutable slice per row and each row is
/// handed to exactly one task, so workers never share a cell. Results are
/// row-major and identical to [`sample_grid_serial`] regardless of how rayon
/// schedules the rows.
///
/// [`sample_grid_serial`]: crate::core::actions::sample_grid::sample_grid_serial::sample_grid_serial
pub fn sample_grid_rayon<Alg>(algorithm: &Alg) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Default + Clone + Send,
    Alg::Failure: Send,
{
    let grid = algorithm.grid();
    let mut values = vec![Alg::Success::default(); grid.size()];

    values
        .par_chunks_mut(grid.width() as usize)
        .enumerate()
        .try_for_each(|(y, row)| fill_rows(algorithm, y as u32, row))?;

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::sample_grid::sample_grid_serial::sample_grid_serial;
    use crate::core::actions::sample_grid::sample_grid_serial::stubs::{
        StubError, failure, success,
    };

    #[test]
    fn test_rayon_generates_same_results_as_sequential() {
        let algorithm = success(11, 9);

        let sequential_results = sample_grid_serial(&algorithm).unwrap();
        let rayon_results = sample_grid_rayon(&algorithm).unwrap();

        assert_eq!(rayon_results, sequential_results);
    }

    #[test]
    fn test_rayon_propagates_algorithm_failure() {
        let result = sample_grid_rayon(&failure(3, 4));

        assert_eq!(result, Err(StubError {}));
    }

    #[test]
    fn test_rayon_with_smallest_dimensions() {
        let algorithm = success(1, 1);

        assert_eq!(sample_grid_rayon(&algorithm).unwrap(), vec![0]);
    }

    #[test]
    fn test_rayon_with_large_grid() {
        let algorithm = success(101, 101);

        let sequential_results = sample_grid_serial(&algorithm).unwrap();
        let rayon_results = sample_grid_rayon(&algorithm).unwrap();

        assert_eq!(rayon_results, sequential_results);
    }
}
