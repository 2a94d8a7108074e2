use crate::core::data::grid_size::GridSize;
use crate::core::util::calculate_bands_in_grid::calculate_bands_in_grid;
use std::num::NonZeroU32;

fn available_threads() -> NonZeroU32 {
    std::thread::available_parallelism()
        .ok()
        .and_then(|n| NonZeroU32::new(n.get() as u32))
        .unwrap_or(NonZeroU32::MIN)
}

pub fn calculate_threads_for_grid_banding(grid: GridSize) -> u32 {
    calculate_bands_in_grid(available_threads(), grid)
}
