use crate::core::data::complex::Complex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// How a sampled grid point feeds the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FractalMode {
    /// Grid point is the start `z0`, `c` is the fixed constant.
    #[default]
    Julia,
    /// Grid point is `c`, orbit starts at 0.
    Mandelbrot,
}

impl FractalMode {
    pub const ALL: &'static [Self] = &[Self::Julia, Self::Mandelbrot];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
        }
    }

    /// Returns `(z0, c)` for the evaluator.
    #[inline]
    #[must_use]
    pub fn start_and_constant(self, point: Complex, constant: Complex) -> (Complex, Complex) {
        match self {
            Self::Julia => (point, constant),
            Self::Mandelbrot => (Complex::ZERO, point),
        }
    }
}

impl fmt::Display for FractalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFractalMode(pub String);

impl fmt::Display for UnknownFractalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown fractal mode \"{}\", expected julia or mandelbrot",
            self.0
        )
    }
}

impl Error for UnknownFractalMode {}

impl FromStr for FractalMode {
    type Err = UnknownFractalMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownFractalMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(FractalMode::ALL.first(), Some(&FractalMode::default()));
    }

    #[test]
    fn julia_uses_point_as_start() {
        let point = Complex::new(0.5, -0.5);
        let constant = Complex::new(-0.7, 0.27);

        assert_eq!(
            FractalMode::Julia.start_and_constant(point, constant),
            (point, constant)
        );
    }

    #[test]
    fn mandelbrot_uses_point_as_constant() {
        let point = Complex::new(0.5, -0.5);
        let constant = Complex::new(-0.7, 0.27);

        assert_eq!(
            FractalMode::Mandelbrot.start_and_constant(point, constant),
            (Complex::ZERO, point)
        );
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("mandelbrot".parse(), Ok(FractalMode::Mandelbrot));
        assert_eq!("JULIA".parse(), Ok(FractalMode::Julia));
        assert!("burning-ship".parse::<FractalMode>().is_err());
    }
}
