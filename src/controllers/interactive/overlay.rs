use crate::core::data::complex::Complex;

/// Text drawn on top of an interactive frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    pub fps: f64,
    pub constant: Complex,
}

impl Overlay {
    #[must_use]
    pub fn fps_text(&self) -> String {
        format!("FPS: {:.2}", self.fps)
    }

    #[must_use]
    pub fn constant_text(&self) -> String {
        format!("Complex Point: {:.4}", self.constant)
    }

    #[must_use]
    pub fn lines(&self) -> [String; 2] {
        [self.fps_text(), self.constant_text()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_fps_and_constant() {
        let overlay = Overlay {
            fps: 143.996,
            constant: Complex::new(0.3341, -0.3966),
        };

        assert_eq!(
            overlay.lines(),
            [
                "FPS: 144.00".to_string(),
                "Complex Point: 0.3341-0.3966i".to_string()
            ]
        );
    }
}
