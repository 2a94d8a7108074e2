use crate::core::colour::errors::PaletteError;
use crate::core::colour::palette_name::PaletteName;
use crate::core::data::colour::Colour;

/// A named colour map sampled into a fixed number of evenly spaced colours.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    name: PaletteName,
    colours: Vec<Colour>,
}

impl Palette {
    /// Samples `name` at `len` evenly spaced positions from 0 to 1 inclusive.
    pub fn build(name: PaletteName, len: u32) -> Result<Self, PaletteError> {
        if len == 0 {
            return Err(PaletteError::ZeroLength);
        }

        let gradient = name.gradient();
        let last = (len - 1) as f64;

        let colours = (0..len)
            .map(|i| {
                let t = if len == 1 { 0.0 } else { i as f64 / last };
                gradient.sample(t)
            })
            .collect();

        Ok(Self { name, colours })
    }

    #[must_use]
    pub fn name(&self) -> PaletteName {
        self.name
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Colour> {
        self.colours.get(index).copied()
    }
}

/// Builds a palette of `max_iterations` colours from a colour map name.
pub fn build_palette(name: &str, max_iterations: u32) -> Result<Palette, PaletteError> {
    Palette::build(name.parse()?, max_iterations)
}
