use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::ops::{Add, Mul};
use std::str::FromStr;

// implement Complex instead of using the num-complex trait for learning
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.real.hypot(self.imag)
    }

    /// Rounds both components to `decimals` decimal places.
    #[must_use]
    pub fn rounded(&self, decimals: i32) -> Self {
        let scale = 10f64.powi(decimals);

        Self {
            real: (self.real * scale).round() / scale,
            imag: (self.imag * scale).round() / scale,
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(4);
        let sign = if self.imag.is_sign_negative() { '-' } else { '+' };

        write!(
            f,
            "{:.*}{}{:.*}i",
            precision,
            self.real,
            sign,
            precision,
            self.imag.abs()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseComplexError {
    MissingComma(String),
    InvalidComponent(String),
}

impl fmt::Display for ParseComplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingComma(input) => {
                write!(f, "expected a complex number as \"real,imag\", got \"{}\"", input)
            }
            Self::InvalidComponent(component) => {
                write!(f, "\"{}\" is not a valid number", component)
            }
        }
    }
}

impl Error for ParseComplexError {}

/// Parses `"real,imag"`, e.g. `"-0.48,-0.595"`.
impl FromStr for Complex {
    type Err = ParseComplexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (real, imag) = s
            .split_once(',')
            .ok_or_else(|| ParseComplexError::MissingComma(s.to_string()))?;

        let parse = |component: &str| {
            component
                .trim()
                .parse::<f64>()
                .map_err(|_| ParseComplexError::InvalidComponent(component.trim().to_string()))
        };

        Ok(Self {
            real: parse(real)?,
            imag: parse(imag)?,
        })
    }
}
