//! InkCorrector builder -- the entry point for correcting whole pages.

use super::background::Background;
use super::parallel::for_each_pixel_mut;
use super::remap::remap;
use crate::color::{Cmyk, Rgb};
use crate::mapping::ChannelMapping;
use crate::raster::{RasterBuffer, BYTES_PER_PIXEL};

/// Correct one ink color against the run's background.
///
/// Background pixels become [`Cmyk::PAPER`]; everything else goes through
/// [`remap`].
#[inline]
pub fn correct_pixel(ink: Cmyk, background: &Background, mapping: &ChannelMapping) -> Cmyk {
    if background.matches(&ink) {
        Cmyk::PAPER
    } else {
        remap(ink, mapping)
    }
}

/// Correct every pixel of `buffer` in place.
///
/// Shorthand for `InkCorrector::new(*mapping).correct(buffer)`.
pub fn correct_buffer(buffer: &mut RasterBuffer, mapping: &ChannelMapping) {
    InkCorrector::new(*mapping).correct(buffer);
}

/// Page corrector for one channel mapping.
///
/// # Design
///
/// - The background is sampled from pixel (0, 0) before traversal and
///   passed by value, so there is no state shared between pixels
/// - [`correct()`](Self::correct) takes `&self`; one corrector serves any
///   number of pages
/// - Large pages are split across the rayon pool unless
///   [`parallel(false)`](Self::parallel) is set; output is byte-identical
///   either way
///
/// # Example
///
/// ```
/// use ink_remap::{ChannelMapping, InkCorrector, RasterBuffer, Rgb};
///
/// let mut page = RasterBuffer::filled(4, 4, [200, 200, 200, 255]);
/// page.set_pixel(2, 2, Rgb::from_u8(0, 255, 255));
///
/// let mapping = ChannelMapping::from_tokens("none", "magenta", "yellow").unwrap();
/// InkCorrector::new(mapping).correct(&mut page);
///
/// // Background became paper, the cyan mark was dropped.
/// assert_eq!(page.rgba(0, 3), Some([255, 255, 255, 255]));
/// assert_eq!(page.rgba(2, 2), Some([255, 255, 255, 255]));
/// ```
#[derive(Debug, Clone)]
pub struct InkCorrector {
    mapping: ChannelMapping,
    parallel: bool,
}

impl InkCorrector {
    pub fn new(mapping: ChannelMapping) -> Self {
        Self {
            mapping,
            parallel: true,
        }
    }

    /// Allow splitting large pages across threads (default: on).
    #[inline]
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Correct `buffer` in place and return the background that was used.
    ///
    /// Returns `None` (and touches nothing) for an empty buffer.
    pub fn correct(&self, buffer: &mut RasterBuffer) -> Option<Background> {
        let background = Background::sample(buffer)?;
        let mapping = self.mapping;

        for_each_pixel_mut(buffer.as_bytes_mut(), BYTES_PER_PIXEL, self.parallel, |px| {
            let ink = Cmyk::from(Rgb::from_bytes([px[0], px[1], px[2]]));
            let corrected = correct_pixel(ink, &background, &mapping);
            px[..3].copy_from_slice(&Rgb::from(corrected).to_bytes());
        });

        Some(background)
    }
}
