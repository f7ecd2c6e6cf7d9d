//! Page background detection.

use crate::color::Cmyk;
use crate::raster::RasterBuffer;

/// The paper color of one correction run.
///
/// Sampled once from pixel (0, 0) before any pixel is corrected and then
/// passed by value to the per-pixel transform. Pixels whose ink equals it
/// on all four channels are treated as bare paper.
///
/// A page whose top-left corner is not paper (a dark scan edge, a bleed
/// image) will not have its real background suppressed. There is no
/// fallback sampling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Background(Cmyk);

impl Background {
    pub fn new(ink: Cmyk) -> Self {
        Self(ink)
    }

    /// Sample the background of `buffer`, `None` if it has no pixels.
    pub fn sample(buffer: &RasterBuffer) -> Option<Self> {
        buffer.pixel(0, 0).map(|rgb| Self(Cmyk::from(rgb)))
    }

    #[inline]
    pub fn ink(&self) -> Cmyk {
        self.0
    }

    /// Exact equality on all four channels.
    #[inline]
    pub fn matches(&self, ink: &Cmyk) -> bool {
        self.0 == *ink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_sample_uses_top_left_pixel() {
        let mut buffer = RasterBuffer::filled(4, 4, [255, 255, 255, 255]);
        buffer.set_pixel(0, 0, Rgb::from_u8(230, 225, 210));

        let bg = Background::sample(&buffer).unwrap();
        assert_eq!(bg.ink(), Cmyk::from(Rgb::from_u8(230, 225, 210)));
    }

    #[test]
    fn test_sample_empty_buffer() {
        let buffer = RasterBuffer::new(0, 0, Vec::new()).unwrap();
        assert_eq!(Background::sample(&buffer), None);
    }

    #[test]
    fn test_matches_is_exact() {
        let bg = Background::new(Cmyk::from(Rgb::from_u8(200, 200, 200)));
        assert!(bg.matches(&Cmyk::from(Rgb::from_u8(200, 200, 200))));
        assert!(!bg.matches(&Cmyk::from(Rgb::from_u8(201, 200, 200))));
        assert!(!bg.matches(&Cmyk::from(Rgb::from_u8(199, 199, 199))));
    }
}
