use crate::core::actions::colourize::ports::colour_map::ColourMap;
use crate::core::colour::log_scale_map::LogScaleColourMap;
use crate::core::colour::palette::Palette;
use crate::core::colour::wrap_map::WrapColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_field::IterationField;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// How escape counts are turned into palette indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColourPolicy {
    /// `palette[v mod len]`, used by the interactive view.
    #[default]
    Wrap,
    /// `ln(v + 1)` normalized over the field, used for batch images.
    Log,
}

impl ColourPolicy {
    pub const ALL: &'static [Self] = &[Self::Wrap, Self::Log];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wrap => "wrap",
            Self::Log => "log",
        }
    }
}

impl fmt::Display for ColourPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColourPolicy(pub String);

impl fmt::Display for UnknownColourPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown colour policy \"{}\", expected wrap or log", self.0)
    }
}

impl Error for UnknownColourPolicy {}

impl FromStr for ColourPolicy {
    type Err = UnknownColourPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|policy| policy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownColourPolicy(s.to_string()))
    }
}

/// The colour map selected by a [`ColourPolicy`] for one field.
#[derive(Debug)]
pub enum PolicyColourMap<'a> {
    Wrap(WrapColourMap<'a>),
    Log(LogScaleColourMap<'a>),
}

impl ColourMap<u32> for PolicyColourMap<'_> {
    fn map(&self, value: u32) -> Result<Colour, Box<dyn Error + Send + Sync>> {
        match self {
            Self::Wrap(map) => map.map(value),
            Self::Log(map) => map.map(value),
        }
    }

    fn display_name(&self) -> &str {
        match self {
            Self::Wrap(map) => map.display_name(),
            Self::Log(map) => map.display_name(),
        }
    }
}

#[must_use]
pub fn colour_map_for<'a>(
    policy: ColourPolicy,
    palette: &'a Palette,
    field: &IterationField,
) -> PolicyColourMap<'a> {
    match policy {
        ColourPolicy::Wrap => PolicyColourMap::Wrap(WrapColourMap::new(palette)),
        ColourPolicy::Log => PolicyColourMap::Log(LogScaleColourMap::new(palette, field)),
    }
}
