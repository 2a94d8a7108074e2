use crate::core::actions::colourize::ports::colour_map::ColourMap;
use crate::core::colour::errors::ColourMapErrors;
use crate::core::colour::palette::Palette;
use crate::core::data::colour::Colour;
use std::error::Error;

/// Indexes the palette with the escape count modulo the palette length, so
/// counts equal to the palette length wrap back to the first colour.
#[derive(Debug)]
pub struct WrapColourMap<'a> {
    palette: &'a Palette,
}

impl<'a> WrapColourMap<'a> {
    #[must_use]
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

impl ColourMap<u32> for WrapColourMap<'_> {
    fn map(&self, value: u32) -> Result<Colour, Box<dyn Error + Send + Sync>> {
        let colours = self.palette.colours();

        if colours.is_empty() {
            return Err(Box::new(ColourMapErrors::EmptyPalette));
        }

        Ok(colours[value as usize % colours.len()])
    }

    fn display_name(&self) -> &str {
        "Wrap"
    }
}
