use crate::core::data::colour::Colour;

/// A colour at position `t` in `[0, 1]`.
pub type ColourStop = (f64, [u8; 3]);

// Control points approximating the matplotlib maps of the same names,
// sampled every eighth of the range.
pub const TWILIGHT_STOPS: &[ColourStop] = &[
    (0.000, [226, 217, 226]),
    (0.125, [166, 186, 206]),
    (0.250, [107, 142, 193]),
    (0.375, [95, 86, 177]),
    (0.500, [48, 19, 55]),
    (0.625, [118, 36, 76]),
    (0.750, [176, 80, 70]),
    (0.875, [206, 151, 139]),
    (1.000, [226, 217, 226]),
];

pub const VIRIDIS_STOPS: &[ColourStop] = &[
    (0.000, [68, 1, 84]),
    (0.125, [71, 44, 122]),
    (0.250, [59, 81, 139]),
    (0.375, [44, 113, 142]),
    (0.500, [33, 144, 141]),
    (0.625, [39, 173, 129]),
    (0.750, [92, 200, 99]),
    (0.875, [170, 220, 50]),
    (1.000, [253, 231, 37]),
];

pub const PLASMA_STOPS: &[ColourStop] = &[
    (0.000, [13, 8, 135]),
    (0.125, [75, 3, 161]),
    (0.250, [125, 3, 168]),
    (0.375, [168, 34, 150]),
    (0.500, [203, 70, 121]),
    (0.625, [229, 107, 93]),
    (0.750, [248, 148, 65]),
    (0.875, [253, 195, 40]),
    (1.000, [240, 249, 33]),
];

pub const INFERNO_STOPS: &[ColourStop] = &[
    (0.000, [0, 0, 4]),
    (0.125, [31, 12, 72]),
    (0.250, [85, 15, 109]),
    (0.375, [136, 34, 106]),
    (0.500, [186, 54, 85]),
    (0.625, [227, 89, 51]),
    (0.750, [249, 140, 10]),
    (0.875, [249, 201, 50]),
    (1.000, [252, 255, 164]),
];

/// Piecewise-linear gradient over sorted control points, with optional
/// reversal and cyclic shift of the input position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    stops: &'static [ColourStop],
    shift: f64,
    reversed: bool,
}

impl Gradient {
    #[must_use]
    pub const fn new(stops: &'static [ColourStop]) -> Self {
        Self {
            stops,
            shift: 0.0,
            reversed: false,
        }
    }

    /// Rotates the gradient so position `t` reads the colour at `t + shift`
    /// (mod 1). Only meaningful for cyclic gradients.
    #[must_use]
    pub const fn shifted(self, shift: f64) -> Self {
        Self { shift, ..self }
    }

    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            reversed: !self.reversed,
            ..self
        }
    }

    /// Colour at `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn sample(&self, t: f64) -> Colour {
        let mut t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        if self.reversed {
            t = 1.0 - t;
        }

        if self.shift != 0.0 {
            t = (t + self.shift).rem_euclid(1.0);
        }

        self.interpolate(t)
    }

    fn interpolate(&self, t: f64) -> Colour {
        let Some(&(first_t, first)) = self.stops.first() else {
            return Colour::default();
        };

        if t <= first_t {
            return to_colour(first);
        }

        for pair in self.stops.windows(2) {
            let (t0, c0) = pair[0];
            let (t1, c1) = pair[1];

            if t <= t1 {
                let local_t = if t1 > t0 { (t - t0) / (t1 - t0) } else { 0.0 };

                return Colour {
                    r: lerp(c0[0], c1[0], local_t),
                    g: lerp(c0[1], c1[1], local_t),
                    b: lerp(c0[2], c1[2], local_t),
                };
            }
        }

        self.stops
            .last()
            .map_or_else(Colour::default, |&(_, last)| to_colour(last))
    }
}

fn to_colour([r, g, b]: [u8; 3]) -> Colour {
    Colour { r, g, b }
}

fn lerp(from: u8, to: u8, t: f64) -> u8 {
    (from as f64 + (to as f64 - from as f64) * t)
        .round()
        .clamp(0.0, 255.0) as u8
}
