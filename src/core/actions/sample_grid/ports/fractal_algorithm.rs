use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use std::error::Error;

/// Per-cell computation over a sampling grid. Implementations must be pure:
/// the same cell always yields the same result, whichever worker asks.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;

    fn grid(&self) -> GridSize;
}
