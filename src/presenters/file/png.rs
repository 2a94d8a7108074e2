use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use image::{ImageError, ImageFormat, RgbImage};
use std::io;
use std::path::Path;

#[derive(Debug, Default)]
pub struct PngFilePresenter {}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> io::Result<()> {
        let image = RgbImage::from_raw(buffer.width(), buffer.height(), buffer.buffer().clone())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    "pixel buffer does not match its dimensions",
                )
            })?;

        image
            .save_with_format(filepath, ImageFormat::Png)
            .map_err(|err| match err {
                ImageError::IoError(err) => err,
                other => io::Error::other(other),
            })
    }

    fn extension(&self) -> &'static str {
        "png"
    }
}

impl PngFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
