//! RasterBuffer: a fixed-size RGBA8 page owned by the caller.

use thiserror::Error;

use crate::color::Rgb;

/// Bytes per pixel in a [`RasterBuffer`] (R, G, B, A).
pub const BYTES_PER_PIXEL: usize = 4;

/// Error constructing a [`RasterBuffer`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterError {
    #[error("pixel data length {actual} does not match {width}x{height} RGBA ({expected} bytes)")]
    LengthMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// A 2-D grid of pixels with known dimensions.
///
/// Pixels are stored row-major as `[R, G, B, A, R, G, B, A, ...]`. The
/// buffer never changes size after construction; correction rewrites the
/// color bytes in place and leaves alpha alone.
///
/// # Example
///
/// ```
/// use ink_remap::{RasterBuffer, Rgb};
///
/// let mut page = RasterBuffer::filled(3, 2, [200, 200, 200, 255]);
/// page.set_pixel(1, 1, Rgb::from_u8(0, 255, 255));
///
/// assert_eq!(page.pixel(1, 1).unwrap().to_bytes(), [0, 255, 255]);
/// assert_eq!(page.as_bytes().len(), 3 * 2 * 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterBuffer {
    /// Wrap existing RGBA8 data.
    ///
    /// Fails if `data.len() != width * height * 4`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, RasterError> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(RasterError::LengthMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A buffer with every pixel set to `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let count = width as usize * height as usize;
        let data = rgba.iter().copied().cycle().take(count * BYTES_PER_PIXEL).collect();
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw RGBA bytes, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// RGB bytes without alpha, row-major (`width * height * 3` bytes).
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixel_count() * 3);
        for px in self.data.chunks_exact(BYTES_PER_PIXEL) {
            rgb.extend_from_slice(&px[..3]);
        }
        rgb
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }

    /// Raw RGBA of the pixel at (x, y), `None` outside the buffer.
    pub fn rgba(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let i = self.offset(x, y)?;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Color of the pixel at (x, y), `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        let [r, g, b, _] = self.rgba(x, y)?;
        Some(Rgb::from_u8(r, g, b))
    }

    /// Overwrite the color of the pixel at (x, y), keeping its alpha.
    ///
    /// Writes outside the buffer are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        if let Some(i) = self.offset(x, y) {
            self.data[i..i + 3].copy_from_slice(&color.to_bytes());
        }
    }
}
