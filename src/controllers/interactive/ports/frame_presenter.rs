use crate::controllers::interactive::overlay::Overlay;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::error::Error;

pub trait FramePresenterPort {
    fn present(&mut self, buffer: &PixelBuffer, overlay: &Overlay) -> Result<(), Box<dyn Error + Send + Sync>>;
}
