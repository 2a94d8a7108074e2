use crate::core::actions::colourize::ports::colour_map::ColourMap;
use crate::core::colour::errors::ColourMapErrors;
use crate::core::colour::palette::Palette;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_field::IterationField;
use std::error::Error;

/// Log-scaled colouring: `ln(v + 1)` is normalized over the range observed in
/// a field and mapped to the nearest palette slot.
#[derive(Debug)]
pub struct LogScaleColourMap<'a> {
    palette: &'a Palette,
    lo: f64,
    hi: f64,
}

impl<'a> LogScaleColourMap<'a> {
    #[must_use]
    pub fn new(palette: &'a Palette, field: &IterationField) -> Self {
        let (min, max) = field
            .values()
            .iter()
            .fold((u32::MAX, 0), |(lo, hi), &v| (lo.min(v), hi.max(v)));

        let (min, max) = if min > max { (0, 0) } else { (min, max) };

        Self {
            palette,
            lo: log_scale(min),
            hi: log_scale(max),
        }
    }
}

fn log_scale(value: u32) -> f64 {
    (value as f64 + 1.0).ln()
}

impl ColourMap<u32> for LogScaleColourMap<'_> {
    fn map(&self, value: u32) -> Result<Colour, Box<dyn Error + Send + Sync>> {
        let colours = self.palette.colours();

        if colours.is_empty() {
            return Err(Box::new(ColourMapErrors::EmptyPalette));
        }

        let span = self.hi - self.lo;

        // a constant field has nothing to spread across the palette
        if span <= 0.0 {
            return Ok(colours[0]);
        }

        let t = ((log_scale(value) - self.lo) / span).clamp(0.0, 1.0);
        let index = (t * (colours.len() - 1) as f64).round() as usize;

        Ok(colours[index])
    }

    fn display_name(&self) -> &str {
        "Logarithmic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour::palette_name::PaletteName;
    use crate::core::data::grid_size::GridSize;

    fn field(values: Vec<u32>, max_iterations: u32) -> IterationField {
        let grid = GridSize::new(values.len() as u32, 1).unwrap();
        IterationField::from_values(grid, max_iterations, values).unwrap()
    }

    #[test]
    fn test_extremes_map_to_palette_ends() {
        let palette = Palette::build(PaletteName::Viridis, 100).unwrap();
        let field = field(vec![0, 3, 99, 100], 100);
        let mapper = LogScaleColourMap::new(&palette, &field);

        assert_eq!(mapper.map(0).unwrap(), palette.colours()[0]);
        assert_eq!(mapper.map(100).unwrap(), palette.colours()[99]);
    }

    #[test]
    fn test_log_scale_spreads_low_counts() {
        let palette = Palette::build(PaletteName::Viridis, 101).unwrap();
        let field = field(vec![0, 100], 100);
        let mapper = LogScaleColourMap::new(&palette, &field);

        // ln(10) / ln(101) is almost halfway along the palette
        let index = palette
            .colours()
            .iter()
            .position(|&c| c == mapper.map(9).unwrap())
            .unwrap();
        assert!(index > 40 && index < 60, "index {}", index);
    }

    #[test]
    fn test_constant_field_uses_first_colour() {
        let palette = Palette::build(PaletteName::Inferno, 50).unwrap();
        let field = field(vec![7, 7, 7], 50);
        let mapper = LogScaleColourMap::new(&palette, &field);

        assert_eq!(mapper.map(7).unwrap(), palette.colours()[0]);
    }

    #[test]
    fn test_mapping_is_monotonic_in_palette_index() {
        let palette = Palette::build(PaletteName::Plasma, 64).unwrap();
        let field = field((0..=64).collect(), 64);
        let mapper = LogScaleColourMap::new(&palette, &field);

        let indices: Vec<usize> = (0..=64)
            .map(|v| {
                let colour = mapper.map(v).unwrap();
                palette.colours().iter().position(|&c| c == colour).unwrap()
            })
            .collect();

        assert!(indices.windows(2).all(|w| w[0] <= w[1]));
    }
}
