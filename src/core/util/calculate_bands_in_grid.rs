use crate::core::data::grid_size::GridSize;
use std::num::NonZeroU32;

/// Number of row bands to split `grid` into. Never more bands than rows, so
/// every band owns at least one row.
pub fn calculate_bands_in_grid(max_bands: NonZeroU32, grid: GridSize) -> u32 {
    max_bands.get().min(grid.height())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_1_gives_1_band() {
        let bands = calculate_bands_in_grid(
            NonZeroU32::new(10).unwrap(),
            GridSize::new(5, 1).unwrap(),
        );

        assert_eq!(bands, 1);
    }

    #[test]
    fn bands_do_not_exceed_grid_height() {
        let grid = GridSize::new(5, 6).unwrap();

        assert_eq!(calculate_bands_in_grid(NonZeroU32::new(10).unwrap(), grid), 6);
        assert_eq!(calculate_bands_in_grid(NonZeroU32::new(6).unwrap(), grid), 6);
    }

    #[test]
    fn bands_correctly_calculated() {
        let grid = GridSize::new(20, 20).unwrap();

        assert_eq!(calculate_bands_in_grid(NonZeroU32::new(4).unwrap(), grid), 4);
        assert_eq!(calculate_bands_in_grid(NonZeroU32::new(5).unwrap(), grid), 5);
    }
}
