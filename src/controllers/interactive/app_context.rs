use crate::config::fractal_config::FractalConfig;
use crate::config::settings::SettingsError;
use crate::controllers::interactive::cursor::cursor_to_constant;
use crate::controllers::render::{RenderError, render_frame};
use crate::core::colour::errors::PaletteError;
use crate::core::colour::palette::Palette;
use crate::core::colour::palette_name::PaletteName;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::fractals::escape_params::EscapeParams;
use tracing::debug;

/// Everything one interactive session owns: the current view and the palette
/// built for it. The palette is rebuilt only when its length or name changes.
#[derive(Debug, Clone)]
pub struct AppContext {
    config: FractalConfig,
    palette: Palette,
}

impl AppContext {
    pub fn new(config: FractalConfig) -> Result<Self, PaletteError> {
        let palette = Palette::build(config.palette, config.params.max_iterations())?;

        Ok(Self { config, palette })
    }

    #[must_use]
    pub fn config(&self) -> &FractalConfig {
        &self.config
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn constant(&self) -> Complex {
        self.config.params.c()
    }

    pub fn set_constant(&mut self, c: Complex) {
        self.config = self.config.with_constant(c);
    }

    #[must_use]
    pub fn cursor_to_constant(&self, cursor: Point) -> Complex {
        cursor_to_constant(cursor, self.config.grid, self.config.region)
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), SettingsError> {
        if max_iterations == self.config.params.max_iterations() {
            return Ok(());
        }

        let params = EscapeParams::new(self.constant(), self.config.params.radius(), max_iterations)?;
        let palette = Palette::build(self.config.palette, max_iterations)?;

        debug!(max_iterations, "rebuilt palette");

        self.config.params = params;
        self.palette = palette;

        Ok(())
    }

    pub fn set_palette(&mut self, name: PaletteName) -> Result<(), PaletteError> {
        if name == self.config.palette {
            return Ok(());
        }

        self.palette = Palette::build(name, self.config.params.max_iterations())?;
        self.config.palette = name;

        debug!(palette = %name, "rebuilt palette");

        Ok(())
    }

    pub fn render(&self) -> Result<PixelBuffer, RenderError> {
        render_frame(&self.config, &self.palette)
    }
}
