use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()>;

    /// File extension written by this presenter, without the dot.
    fn extension(&self) -> &'static str;
}
