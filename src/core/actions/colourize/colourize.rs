use crate::core::actions::colourize::ports::colour_map::ColourMap;
use crate::core::colour::colour_policy::{ColourPolicy, colour_map_for};
use crate::core::colour::palette::Palette;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_field::IterationField;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ColouriseError {
    ColourMap(Box<dyn Error + Send + Sync>),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for ColouriseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for ColouriseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err.as_ref()),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for ColouriseError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Maps every escape count in `field` through `mapper` into an RGB raster of
/// the same shape.
#[tracing::instrument(
    skip_all,
    fields(
        width = field.width(),
        height = field.height(),
        colour_map = mapper.display_name()
    )
)]
pub fn colourize<CMap: ColourMap<u32>>(
    field: &IterationField,
    mapper: &CMap,
) -> Result<PixelBuffer, ColouriseError> {
    let mut buffer: PixelBufferData = Vec::with_capacity(field.values().len() * 3);

    for &value in field.values() {
        let Colour { r, g, b } = mapper.map(value).map_err(ColouriseError::ColourMap)?;

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
    }

    Ok(PixelBuffer::from_data(field.grid(), buffer)?)
}

pub fn colourize_with_policy(
    field: &IterationField,
    palette: &Palette,
    policy: ColourPolicy,
) -> Result<PixelBuffer, ColouriseError> {
    colourize(field, &colour_map_for(policy, palette, field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour::palette_name::PaletteName;
    use crate::core::data::grid_size::GridSize;
    use crate::core::data::point::Point;

    #[derive(Debug)]
    struct StubColourMapSuccess {}

    impl ColourMap<u32> for StubColourMapSuccess {
        fn map(&self, value: u32) -> Result<Colour, Box<dyn Error + Send + Sync>> {
            let v = value as u8;
            Ok(Colour { r: v, g: v, b: v })
        }

        fn display_name(&self) -> &str {
            "Stub Success"
        }
    }

    #[derive(Debug)]
    struct StubColourMapFailure {}

    impl ColourMap<u32> for StubColourMapFailure {
        fn map(&self, _: u32) -> Result<Colour, Box<dyn Error + Send + Sync>> {
            Err("StubColourMapError".into())
        }

        fn display_name(&self) -> &str {
            "Stub Failure"
        }
    }

    fn field_3x2() -> IterationField {
        let grid = GridSize::new(3, 2).unwrap();
        IterationField::from_values(grid, 10, vec![1, 2, 3, 4, 5, 6]).unwrap()
    }

    #[test]
    fn test_generates_pixel_buffer_correctly() {
        let result = colourize(&field_3x2(), &StubColourMapSuccess {}).unwrap();

        assert_eq!(
            result.buffer(),
            &vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6]
        );
        assert_eq!(result.grid(), field_3x2().grid());
        assert_eq!(result.pixel(Point { x: 0, y: 1 }), Some(Colour::new(4, 4, 4)));
    }

    #[test]
    fn test_propagates_colour_map_failure() {
        let result = colourize(&field_3x2(), &StubColourMapFailure {});

        assert!(matches!(result, Err(ColouriseError::ColourMap(_))));
    }

    #[test]
    fn test_error_displays_colour_map_error() {
        let err = ColouriseError::ColourMap("StubColourMapError".into());
        assert_eq!(format!("{}", err), "colour map error: StubColourMapError");
    }

    #[test]
    fn test_source_is_the_colour_map_error() {
        let err = ColouriseError::ColourMap("StubColourMapError".into());

        let source = err.source().map(|source| source.to_string());
        assert_eq!(source.as_deref(), Some("StubColourMapError"));
    }

    #[test]
    fn test_wrap_policy_uses_palette_entries() {
        let palette = Palette::build(PaletteName::Viridis, 10).unwrap();
        let field = field_3x2();

        let buffer = colourize_with_policy(&field, &palette, ColourPolicy::Wrap).unwrap();

        assert_eq!(buffer.pixel(Point { x: 2, y: 1 }), palette.get(6));
    }
}
