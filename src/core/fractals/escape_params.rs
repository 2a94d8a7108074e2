use crate::core::data::complex::Complex;
use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EscapeParamsError {
    ZeroMaxIterationsError,
    InvalidRadius(f64),
}

impl fmt::Display for EscapeParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidRadius(radius) => {
                write!(f, "Escape radius must be a positive number, got {}", radius)
            }
        }
    }
}

impl Error for EscapeParamsError {}

/// Constant `c`, escape radius and iteration cap for one evaluation.
///
/// `c` is ignored in Mandelbrot mode, where each sample supplies its own.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeParams {
    c: Complex,
    radius: f64,
    max_iterations: u32,
}

impl EscapeParams {
    pub fn new(c: Complex, radius: f64, max_iterations: u32) -> Result<Self, EscapeParamsError> {
        if max_iterations == 0 {
            return Err(EscapeParamsError::ZeroMaxIterationsError);
        }

        if !(radius > 0.0 && radius.is_finite()) {
            return Err(EscapeParamsError::InvalidRadius(radius));
        }

        Ok(Self {
            c,
            radius,
            max_iterations,
        })
    }

    #[must_use]
    pub fn c(&self) -> Complex {
        self.c
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Same radius and iteration cap with a new constant.
    #[must_use]
    pub fn with_c(self, c: Complex) -> Self {
        Self { c, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_params() {
        let params = EscapeParams::new(Complex::new(0.3341, 0.3966), 2.0, 200).unwrap();

        assert_eq!(params.c(), Complex::new(0.3341, 0.3966));
        assert_eq!(params.radius(), 2.0);
        assert_eq!(params.max_iterations(), 200);
    }

    #[test]
    fn test_max_iterations_must_be_greater_than_zero() {
        assert_eq!(
            EscapeParams::new(Complex::ZERO, 2.0, 0),
            Err(EscapeParamsError::ZeroMaxIterationsError)
        );
    }

    #[test]
    fn test_radius_must_be_positive_and_finite() {
        assert_eq!(
            EscapeParams::new(Complex::ZERO, 0.0, 10),
            Err(EscapeParamsError::InvalidRadius(0.0))
        );
        assert_eq!(
            EscapeParams::new(Complex::ZERO, -1.0, 10),
            Err(EscapeParamsError::InvalidRadius(-1.0))
        );
        assert!(EscapeParams::new(Complex::ZERO, f64::NAN, 10).is_err());
        assert!(EscapeParams::new(Complex::ZERO, f64::INFINITY, 10).is_err());
    }

    #[test]
    fn test_with_c_keeps_other_fields() {
        let params = EscapeParams::new(Complex::ZERO, 3.0, 50).unwrap();
        let moved = params.with_c(Complex::new(1.0, -1.0));

        assert_eq!(moved.c(), Complex::new(1.0, -1.0));
        assert_eq!(moved.radius(), 3.0);
        assert_eq!(moved.max_iterations(), 50);
    }
}
