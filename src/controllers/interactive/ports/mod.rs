mod frame_presenter;
mod input_source;

pub use frame_presenter::FramePresenterPort;
pub use input_source::{DriverInput, InputSource};
