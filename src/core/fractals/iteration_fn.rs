use crate::core::data::complex::Complex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Orbit step `z -> f(z, c)` driven by the escape-time evaluator.
pub trait IterationFunction: Send + Sync {
    fn apply(&self, z: Complex, c: Complex) -> Complex;
}

/// Built-in iteration functions selectable from settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IterationFn {
    /// `z² + c`
    #[default]
    Quadratic,
    /// `z³ + c`
    Cubic,
}

impl IterationFn {
    pub const ALL: &'static [Self] = &[Self::Quadratic, Self::Cubic];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Quadratic => "quadratic",
            Self::Cubic => "cubic",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Quadratic => "z² + c",
            Self::Cubic => "z³ + c",
        }
    }
}

impl IterationFunction for IterationFn {
    #[inline]
    fn apply(&self, z: Complex, c: Complex) -> Complex {
        match self {
            Self::Quadratic => z * z + c,
            Self::Cubic => z * z * z + c,
        }
    }
}

impl<F> IterationFunction for F
where
    F: Fn(Complex, Complex) -> Complex + Send + Sync,
{
    #[inline]
    fn apply(&self, z: Complex, c: Complex) -> Complex {
        self(z, c)
    }
}

impl fmt::Display for IterationFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownIterationFn(pub String);

impl fmt::Display for UnknownIterationFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown iteration function \"{}\", expected one of: quadratic, cubic",
            self.0
        )
    }
}

impl Error for UnknownIterationFn {}

impl FromStr for IterationFn {
    type Err = UnknownIterationFn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownIterationFn(s.to_string()))
    }
}
