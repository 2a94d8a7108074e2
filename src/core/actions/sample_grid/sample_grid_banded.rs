use std::thread;

use crate::core::actions::sample_grid::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::sample_grid::sample_grid_serial::fill_rows;
use crate::core::util::calculate_threads_for_grid_banding::calculate_threads_for_grid_banding;

/// Samples the grid on a fixed pool of scoped worker threads, one per band
/// of consecutive rows.
///
/// The pool size is the available hardware parallelism, capped at the grid
/// height. The output buffer is carved into disjoint band slices before the
/// workers start; the scope end is the join barrier.
pub fn sample_grid_banded<Alg>(algorithm: &Alg) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Default + Clone + Send,
    Alg::Failure: Send,
{
    let num_threads = calculate_threads_for_grid_banding(algorithm.grid());
    sample_grid_with_bands(algorithm, num_threads)
}

pub(crate) fn sample_grid_with_bands<Alg>(
    algorithm: &Alg,
    num_bands: u32,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Default + Clone + Send,
    Alg::Failure: Send,
{
    let grid = algorithm.grid();
    let width = grid.width() as usize;
    let num_bands = num_bands.clamp(1, grid.height());
    let band_height = grid.height() / num_bands;
    let mut values = vec![Alg::Success::default(); grid.size()];

    thread::scope(|scope| {
        let mut remaining: &mut [Alg::Success] = &mut values;
        let mut handles = Vec::with_capacity(num_bands as usize);

        for band in 0..num_bands {
            let first_row = band * band_height;

            // Last band takes any remainder rows
            let rows = if band == num_bands - 1 {
                grid.height() - first_row
            } else {
                band_height
            };

            let (band_slice, rest) =
                std::mem::take(&mut remaining).split_at_mut(rows as usize * width);
            remaining = rest;

            handles.push(scope.spawn(move || fill_rows(algorithm, first_row, band_slice)));
        }

        handles.into_iter().try_for_each(|handle| {
            handle
                .join()
                .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
        })
    })?;

    Ok(values)
}
