use std::error::Error;
use std::fmt;
use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::config::fractal_config::FractalConfig;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::colourize::colourize::{ColouriseError, colourize_with_policy};
use crate::core::actions::sample_grid::sample_field::SampleFieldError;
use crate::core::colour::errors::PaletteError;
use crate::core::colour::palette::Palette;
use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug)]
pub enum RenderError {
    Palette(PaletteError),
    Sample(SampleFieldError),
    Colourise(ColouriseError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Palette(err) => write!(f, "palette error: {}", err),
            Self::Sample(err) => write!(f, "sampling failed: {}", err),
            Self::Colourise(err) => write!(f, "colourising failed: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Palette(err) => Some(err),
            Self::Sample(err) => Some(err),
            Self::Colourise(err) => Some(err),
        }
    }
}

impl From<PaletteError> for RenderError {
    fn from(err: PaletteError) -> Self {
        Self::Palette(err)
    }
}

impl From<SampleFieldError> for RenderError {
    fn from(err: SampleFieldError) -> Self {
        Self::Sample(err)
    }
}

impl From<ColouriseError> for RenderError {
    fn from(err: ColouriseError) -> Self {
        Self::Colourise(err)
    }
}

/// One full sample then colourise cycle.
pub fn render_frame(config: &FractalConfig, palette: &Palette) -> Result<PixelBuffer, RenderError> {
    let field = config.sample()?;

    Ok(colourize_with_policy(&field, palette, config.policy)?)
}

/// Renders a single view and hands it to a file presenter.
pub struct RenderController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> RenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self, config: &FractalConfig) -> Result<(), RenderError> {
        info!(
            mode = %config.mode,
            width = config.grid.width(),
            height = config.grid.height(),
            max_iterations = config.params.max_iterations(),
            "rendering"
        );

        let palette = Palette::build(config.palette, config.params.max_iterations())?;
        let start = Instant::now();

        self.buffer = Some(render_frame(config, &palette)?);

        info!(elapsed = ?start.elapsed(), "rendered");

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath.as_ref())?;
            info!(path = %filepath.as_ref().display(), "saved");
        }

        Ok(())
    }
}
