//! Additive RGB color type
//!
//! Rgb is the color space the page rasterizer hands us: three independent
//! light intensities, 8 bits each on the wire.

use super::cmyk::Cmyk;

/// A color in additive RGB space.
///
/// Values are in the range 0.0..=1.0 (mapping to 0..255 for 8-bit).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red channel (0.0..=1.0)
    pub r: f32,
    /// Green channel (0.0..=1.0)
    pub g: f32,
    /// Blue channel (0.0..=1.0)
    pub b: f32,
}

impl Rgb {
    /// Create a new Rgb color from float values.
    ///
    /// # Arguments
    /// * `r` - Red channel (0.0..=1.0)
    /// * `g` - Green channel (0.0..=1.0)
    /// * `b` - Blue channel (0.0..=1.0)
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create an Rgb color from 8-bit unsigned integer values.
    ///
    /// # Example
    /// ```
    /// use ink_remap::Rgb;
    /// let red = Rgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create an Rgb color from a byte array [R, G, B].
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    ///
    /// Rounds and clamps values to the 0..=255 range.
    ///
    /// # Example
    /// ```
    /// use ink_remap::Rgb;
    /// let color = Rgb::new(1.0, 0.5, -0.2);
    /// assert_eq!(color.to_bytes(), [255, 128, 0]);
    /// ```
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }
}

impl From<Cmyk> for Rgb {
    /// Recombine inks into additive light.
    ///
    /// `red = (1 - cyan) * (1 - black)` and likewise for green/magenta and
    /// blue/yellow. Out-of-range inks should be clamped by the caller first.
    fn from(ink: Cmyk) -> Self {
        let white = 1.0 - ink.black;
        Self {
            r: (1.0 - ink.cyan) * white,
            g: (1.0 - ink.magenta) * white,
            b: (1.0 - ink.yellow) * white,
        }
    }
}
