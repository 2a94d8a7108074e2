use crate::core::colour::errors::PaletteError;
use crate::core::colour::gradient::{
    Gradient, INFERNO_STOPS, PLASMA_STOPS, TWILIGHT_STOPS, VIRIDIS_STOPS,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported named colour maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PaletteName {
    #[default]
    TwilightShiftedR,
    Twilight,
    TwilightShifted,
    Viridis,
    Plasma,
    Inferno,
}

impl PaletteName {
    pub const ALL: &'static [Self] = &[
        Self::TwilightShiftedR,
        Self::Twilight,
        Self::TwilightShifted,
        Self::Viridis,
        Self::Plasma,
        Self::Inferno,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TwilightShiftedR => "twilight_shifted_r",
            Self::Twilight => "twilight",
            Self::TwilightShifted => "twilight_shifted",
            Self::Viridis => "viridis",
            Self::Plasma => "plasma",
            Self::Inferno => "inferno",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::TwilightShiftedR => "Twilight (shifted, reversed)",
            Self::Twilight => "Twilight",
            Self::TwilightShifted => "Twilight (shifted)",
            Self::Viridis => "Viridis",
            Self::Plasma => "Plasma",
            Self::Inferno => "Inferno",
        }
    }

    /// The following name in [`PaletteName::ALL`], wrapping at the end.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&name| name == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub const fn gradient(self) -> Gradient {
        match self {
            Self::Twilight => Gradient::new(TWILIGHT_STOPS),
            Self::TwilightShifted => Gradient::new(TWILIGHT_STOPS).shifted(0.5).reversed(),
            Self::TwilightShiftedR => Gradient::new(TWILIGHT_STOPS).shifted(0.5),
            Self::Viridis => Gradient::new(VIRIDIS_STOPS),
            Self::Plasma => Gradient::new(PLASMA_STOPS),
            Self::Inferno => Gradient::new(INFERNO_STOPS),
        }
    }
}

impl std::fmt::Display for PaletteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteName {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|name| name.name() == s.trim())
            .ok_or_else(|| PaletteError::UnsupportedColourMap(s.to_string()))
    }
}

impl TryFrom<String> for PaletteName {
    type Error = PaletteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PaletteName> for String {
    fn from(value: PaletteName) -> Self {
        value.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(PaletteName::ALL.first(), Some(&PaletteName::default()));
    }

    #[test]
    fn parse_round_trips_names() {
        for &name in PaletteName::ALL {
            assert_eq!(name.name().parse::<PaletteName>(), Ok(name));
        }
    }

    #[test]
    fn parse_rejects_unsupported_names() {
        assert_eq!(
            "jet".parse::<PaletteName>(),
            Err(PaletteError::UnsupportedColourMap("jet".to_string()))
        );
    }

    #[test]
    fn next_cycles_through_every_name() {
        let mut name = PaletteName::default();
        let mut seen = Vec::new();

        for _ in 0..PaletteName::ALL.len() {
            seen.push(name);
            name = name.next();
        }

        assert_eq!(seen, PaletteName::ALL);
        assert_eq!(name, PaletteName::default());
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in PaletteName::ALL.iter().enumerate() {
            for b in &PaletteName::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
                assert_ne!(a.display_name(), b.display_name());
            }
        }
    }
}
