use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Binary PPM (P6) writer.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        let mut file = BufWriter::new(std::fs::File::create(filepath)?);

        // P6 header: magic, width height, max colour value
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", buffer.width(), buffer.height())?;
        writeln!(file, "255")?;
        file.write_all(buffer.buffer())?;
        file.flush()
    }

    fn extension(&self) -> &'static str {
        "ppm"
    }
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::grid_size::GridSize;

    #[test]
    fn test_writes_header_then_raw_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ppm");
        let grid = GridSize::new(2, 1).unwrap();
        let buffer = PixelBuffer::from_data(grid, vec![255, 0, 0, 0, 0, 255]).unwrap();

        PpmFilePresenter::new().present(&buffer, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[255, 0, 0, 0, 0, 255]);
        assert_eq!(bytes, expected);
    }
}
