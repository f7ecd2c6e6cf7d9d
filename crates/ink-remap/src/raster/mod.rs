//! In-memory raster pages.
//!
//! [`RasterBuffer`] is the unit of work for correction: one rendered page
//! as interleaved RGBA8 bytes, the layout both canvas readbacks and
//! `tiny-skia` pixmaps use.

mod buffer;

pub use buffer::{RasterBuffer, RasterError, BYTES_PER_PIXEL};
