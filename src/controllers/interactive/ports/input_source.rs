use crate::core::data::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverInput {
    /// Latest cursor position in grid pixels, origin top left.
    Cursor(Point),
    /// Switch to the next named palette.
    NextPalette,
    /// Raise or lower the iteration cap, never below one.
    AdjustMaxIterations(i32),
    Quit,
}

pub trait InputSource {
    /// Input gathered since the last poll, `None` when nothing happened.
    fn poll(&mut self) -> Option<DriverInput>;
}
