use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    UnsupportedColourMap(String),
    ZeroLength,
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedColourMap(name) => {
                write!(
                    f,
                    "unsupported colour map \"{}\", expected one of: twilight_shifted_r, twilight, twilight_shifted, viridis, plasma, inferno",
                    name
                )
            }
            Self::ZeroLength => write!(f, "palette must contain at least one colour"),
        }
    }
}

impl Error for PaletteError {}

#[derive(Debug)]
pub enum ColourMapErrors {
    EmptyPalette,
}

impl fmt::Display for ColourMapErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPalette => write!(f, "cannot map values through an empty palette"),
        }
    }
}

impl Error for ColourMapErrors {}
