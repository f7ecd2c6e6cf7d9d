//! Subtractive CMYK ink color type

use super::rgb::Rgb;

/// A color as four ink coverages.
///
/// Each channel is in 0.0..=1.0 where 0.0 means no ink on paper. Arithmetic
/// on inks (remapping, accumulation) may push channels out of range; call
/// [`Cmyk::clamped`] before converting back to [`Rgb`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cmyk {
    pub cyan: f32,
    pub magenta: f32,
    pub yellow: f32,
    pub black: f32,
}

impl Cmyk {
    /// No ink at all. Renders as the paper itself (white).
    pub const PAPER: Self = Self {
        cyan: 0.0,
        magenta: 0.0,
        yellow: 0.0,
        black: 0.0,
    };

    #[inline]
    pub fn new(cyan: f32, magenta: f32, yellow: f32, black: f32) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
            black,
        }
    }

    /// Clamp every channel into 0.0..=1.0.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            cyan: self.cyan.clamp(0.0, 1.0),
            magenta: self.magenta.clamp(0.0, 1.0),
            yellow: self.yellow.clamp(0.0, 1.0),
            black: self.black.clamp(0.0, 1.0),
        }
    }
}

impl From<Rgb> for Cmyk {
    /// Standard subtractive decomposition with full grey component
    /// replacement: black takes the shared darkness, the chromatic inks
    /// take the rest relative to the remaining white.
    fn from(rgb: Rgb) -> Self {
        let black = 1.0 - rgb.r.max(rgb.g).max(rgb.b);

        // Pure black has no chromatic information left to divide out.
        if black >= 1.0 {
            return Self::new(0.0, 0.0, 0.0, 1.0);
        }

        let white = 1.0 - black;
        Self {
            cyan: (1.0 - rgb.r - black) / white,
            magenta: (1.0 - rgb.g - black) / white,
            yellow: (1.0 - rgb.b - black) / white,
            black,
        }
    }
}
